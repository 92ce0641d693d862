//! Error kinds shared by the build, clean, list and docs operations.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the tool can report. None of them are retried.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required command-line parameter was not given.
    #[error("Missing option {0}")]
    MissingArgument(&'static str),

    /// The selected compiler is not resolvable on the search path.
    #[error("Compiler '{0}' not found on the search path")]
    CompilerNotFound(String),

    /// The compiler wrote diagnostics to stderr (or timed out).
    #[error("Build of {input} failed")]
    BuildFailed { input: PathBuf, stderr: String },

    /// The built binary wrote to stderr (or timed out).
    #[error("Running {binary} failed")]
    RunFailed { binary: PathBuf, stderr: String },

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to remove {path}: {source}")]
    ArtifactRemovalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external helper (e.g. the documentation generator) is missing.
    #[error("'{0}' not found on the search path")]
    ToolNotFound(String),

    /// An external helper was killed after exceeding the timeout.
    #[error("'{0}' timed out")]
    ToolTimedOut(String),

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildError>;

//! Optional `symbuild.toml` configuration.
//!
//! Every key has a default matching the project layout the tool was written
//! for, so running without a config file is the common case.
//!
//! ```toml
//! [paths]
//! bin = "bin"
//! ledger = "config/built.txt"
//!
//! [build]
//! std = "c++11"
//! timeout_secs = 600
//!
//! [docs]
//! doxyfile = "doc/doxygen/Doxyfile"
//! link = "SymmetricMatrix.html"
//! ```

use crate::error::{BuildError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "symbuild.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub build: BuildSettings,
    pub docs: DocsConfig,
}

/// Source roots per category plus output and ledger locations.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub test: PathBuf,
    pub example: PathBuf,
    pub benchmark: PathBuf,
    pub googlebenchmark: PathBuf,
    pub bin: PathBuf,
    pub ledger: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            test: PathBuf::from("test"),
            example: PathBuf::from("examples"),
            benchmark: PathBuf::from("benchmark"),
            googlebenchmark: PathBuf::from("googlebenchmark"),
            bin: PathBuf::from("bin"),
            ledger: Path::new("config").join("built.txt"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BuildSettings {
    /// Language standard passed as `-std=<std>`.
    pub std: String,
    pub timeout_secs: u64,
    /// Library linked into benchmark-harness programs (`-l<name>`).
    pub benchmark_lib: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            std: "c++11".to_string(),
            timeout_secs: 600,
            benchmark_lib: "benchmark".to_string(),
        }
    }
}

impl BuildSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DocsConfig {
    pub generator: String,
    pub doxyfile: PathBuf,
    /// Directories produced by the generator, removed by clean.
    pub output: Vec<PathBuf>,
    pub entry_page: PathBuf,
    pub link: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        let doxygen = Path::new("doc").join("doxygen");
        Self {
            generator: "doxygen".to_string(),
            doxyfile: doxygen.join("Doxyfile"),
            output: vec![doxygen.join("html"), doxygen.join("latex")],
            entry_page: doxygen.join("html").join("index.html"),
            link: PathBuf::from("SymmetricMatrix.html"),
        }
    }
}

impl Config {
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| BuildError::Config {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }
}

//! Ledger-driven artifact cleanup.
//!
//! Every recorded artifact is attempted once; the ledger is truncated only
//! after all attempts, so a second clean finds nothing to do. Removal
//! failures are collected, never fatal.

use super::ledger::Ledger;
use crate::config::DocsConfig;
use crate::error::{BuildError, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    /// Recorded but already gone.
    pub missing: Vec<PathBuf>,
    pub failed: Vec<BuildError>,
}

impl CleanReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.missing.is_empty() && self.failed.is_empty()
    }

    fn merge(&mut self, other: CleanReport) {
        self.removed.extend(other.removed);
        self.missing.extend(other.missing);
        self.failed.extend(other.failed);
    }
}

pub fn clean_artifacts(ledger: &Ledger) -> Result<CleanReport> {
    let mut report = CleanReport::default();

    for path in ledger.entries()? {
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("removed {}", path.display());
                report.removed.push(path);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => report.missing.push(path),
            Err(source) => {
                tracing::warn!("failed to remove {}: {}", path.display(), source);
                report
                    .failed
                    .push(BuildError::ArtifactRemovalFailed { path, source });
            }
        }
    }

    ledger.clear()?;
    Ok(report)
}

/// Remove generated documentation directories and the entry-page link.
/// Paths that do not exist are skipped silently.
pub fn clean_docs(docs: &DocsConfig) -> CleanReport {
    let mut report = CleanReport::default();

    for dir in &docs.output {
        if !dir.exists() {
            continue;
        }
        match fs::remove_dir_all(dir) {
            Ok(()) => report.removed.push(dir.clone()),
            Err(source) => report.failed.push(BuildError::ArtifactRemovalFailed {
                path: dir.clone(),
                source,
            }),
        }
    }

    // symlink_metadata so a dangling link is still removed
    if fs::symlink_metadata(&docs.link).is_ok() {
        match fs::remove_file(&docs.link) {
            Ok(()) => report.removed.push(docs.link.clone()),
            Err(source) => report.failed.push(BuildError::ArtifactRemovalFailed {
                path: docs.link.clone(),
                source,
            }),
        }
    }

    report
}

/// Full clean pass: ledger artifacts first, then documentation.
pub fn clean(ledger: &Ledger, docs: &DocsConfig) -> Result<CleanReport> {
    let mut report = clean_artifacts(ledger)?;
    report.merge(clean_docs(docs));
    Ok(report)
}

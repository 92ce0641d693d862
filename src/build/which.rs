//! Executable lookup in the style of the Unix `which` command.
//!
//! The search path is always passed in; only the binary reads `PATH`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Split a `PATH`-style value into directories.
pub fn search_path_from(value: Option<&OsStr>) -> Vec<PathBuf> {
    value
        .map(|v| std::env::split_paths(v).collect())
        .unwrap_or_default()
}

/// Resolve `program` to a file the current user may execute.
///
/// A program with a directory component is checked as given. A bare name is
/// tried in each directory of `search_path`, first match wins.
pub fn which(program: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    // An empty entry would make the lookup fall back to the working directory.
    let dirs: Vec<&PathBuf> = search_path
        .iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();
    let has_dir = Path::new(program)
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    if dirs.is_empty() && !has_dir {
        return None;
    }

    let paths = std::env::join_paths(dirs).ok()?;
    match ::which::which_in(program, Some(paths), Path::new(".")) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!("{} not resolved: {}", program, e);
            None
        }
    }
}

use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SOURCE_SUFFIXES: [&str; 2] = [".cc", ".cpp"];

pub fn is_source_file(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Recursively collect every `.cc`/`.cpp` file under `root`, in walk order.
/// Returned paths are prefixed with `root`.
pub fn locate(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BuildError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if is_source_file(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    tracing::debug!("located {} source file(s) in {}", files.len(), root.display());
    Ok(files)
}

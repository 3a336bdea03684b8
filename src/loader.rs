//! Locating and parsing result documents on disk

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, ResultError};

/// Read and parse a JSON result document
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| ResultError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ResultError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect result documents under `root`.
///
/// A file path is returned as-is. A directory is walked (one level deep
/// unless `recursive`) and files whose extension is in `extensions` are
/// returned, sorted by file name within each directory.
pub fn collect_json_files(
    root: &Path,
    recursive: bool,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(ResultError::InvalidPath(root.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "collected result documents");
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

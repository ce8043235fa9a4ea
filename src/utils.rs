//! Small helpers shared by the batch loop and the CLI: size formatting,
//! path resolution against the base prefix, and text-list import.

use crate::error::{ReexportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Format a byte count using binary (1024) steps through B, KB, MB, then GB
/// for anything larger, always with one decimal place.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB"] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} GB", size)
}

/// Resolve one list entry against the optional base path.
///
/// A non-empty base is joined in front of relative entries (a leading `./`
/// on the entry is dropped first); absolute entries pass through unchanged.
/// The result is normalized to an absolute path when possible.
pub fn resolve_path(base_path: &str, entry: &str) -> PathBuf {
    let joined = if base_path.is_empty() {
        PathBuf::from(entry)
    } else {
        Path::new(base_path).join(entry.trim_start_matches("./"))
    };
    std::path::absolute(&joined).unwrap_or(joined)
}

/// Read image paths from a UTF-8 text file, one per line.
/// Lines are trimmed and blank lines are ignored.
pub fn read_paths_from_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ReexportError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

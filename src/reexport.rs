//! The batch loop: resolve each entry, re-encode the supported ones in
//! place, and fold every outcome into a [`BatchReport`].

use crate::constants::MAX_COMPRESS_LEVEL;
use crate::encode::reencode_in_place;
use crate::error::{ReexportError, Result};
use crate::formats::{is_image_file, ImageKind};
use crate::report::{BatchReport, EntryOutcome};
use crate::utils::resolve_path;
use crate::verbose;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-encode every resolvable PNG/JPEG entry in place, preserving formats,
/// and report per-file and total size statistics.
///
/// Entries are processed strictly in order, one at a time, and every
/// per-entry failure is recovered into the report; one bad file never aborts
/// the batch. The only error that crosses this boundary is a compression
/// level outside 0-9, checked before any filesystem access. An empty input
/// sequence yields an empty report.
///
/// Callers must not run overlapping batches over the same files; there is no
/// reentrancy guard here.
pub fn reexport(base_path: &str, paths: &[String], compress_level: u8) -> Result<BatchReport> {
    if compress_level > MAX_COMPRESS_LEVEL {
        return Err(ReexportError::InvalidCompressLevel(compress_level));
    }

    let mut report = BatchReport::default();

    let progress = if crate::logger::is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(paths.len() as u64)
    };
    progress.set_style(ProgressStyle::default_bar());

    for raw in paths {
        let entry = raw.trim();
        if entry.is_empty() {
            progress.inc(1);
            continue;
        }

        let full_path = resolve_path(base_path, entry);
        verbose!("processing {}", full_path.display());
        let outcome = process_entry(&full_path, compress_level);
        report.record(display_name(&full_path), outcome);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(report)
}

/// One entry, start to finish. Every failure mode maps to an outcome value.
fn process_entry(full_path: &Path, compress_level: u8) -> EntryOutcome {
    if !full_path.exists() {
        return EntryOutcome::Skipped {
            original_size: 0,
            reason: format!("file not found: {}", full_path.display()),
        };
    }

    let original_size = match fs::metadata(full_path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            return EntryOutcome::Failed {
                original_size: 0,
                reason: format!("failed to read metadata: {}", e),
            }
        }
    };

    let kind = match ImageKind::from_path(full_path) {
        Some(kind) => kind,
        None => {
            return EntryOutcome::Skipped {
                original_size,
                reason: format!("unsupported format: {}", display_name(full_path)),
            }
        }
    };

    match reencode_in_place(full_path, kind, compress_level) {
        Ok(new_size) => EntryOutcome::Success {
            original_size,
            new_size,
        },
        Err(e) => EntryOutcome::Failed {
            original_size,
            reason: e.to_string(),
        },
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// What a batch would do with one entry, without writing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStatus {
    /// Exists and will be re-encoded.
    Ready(ImageKind),
    Missing,
    /// Passes the selection filter (GIF/BMP) but cannot be re-encoded.
    NotReencodable,
    NotAnImage,
}

impl fmt::Display for PreviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewStatus::Ready(kind) => write!(f, "ready ({})", kind),
            PreviewStatus::Missing => write!(f, "missing"),
            PreviewStatus::NotReencodable => write!(f, "image, left as-is"),
            PreviewStatus::NotAnImage => write!(f, "not an image"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
    pub status: PreviewStatus,
}

/// Dry-run classification of a path list. Resolution and trimming follow
/// [`reexport`] exactly; no file is opened or modified.
pub fn preview(base_path: &str, paths: &[String]) -> Vec<PreviewEntry> {
    let mut entries = Vec::new();

    for raw in paths {
        let entry = raw.trim();
        if entry.is_empty() {
            continue;
        }

        let path = resolve_path(base_path, entry);
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let status = if !path.exists() {
            PreviewStatus::Missing
        } else if let Some(kind) = ImageKind::from_path(&path) {
            PreviewStatus::Ready(kind)
        } else if is_image_file(&path) {
            PreviewStatus::NotReencodable
        } else {
            PreviewStatus::NotAnImage
        };

        entries.push(PreviewEntry {
            filename: display_name(&path),
            path,
            size,
            status,
        });
    }

    entries
}

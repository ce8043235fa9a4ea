//! Extension-based format classification.
//!
//! Two sets are deliberately different: `SELECTABLE_EXTENSIONS` is the broad
//! filter used when gathering candidate paths (the set a file picker would
//! offer), while [`ImageKind`] covers only what the re-exporter can actually
//! re-encode in place. GIF/BMP entries pass the first filter and are skipped
//! by the batch as unsupported.

use std::fmt;
use std::path::Path;

/// Formats the re-exporter can re-encode while preserving the original format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Classify a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageKind::Png),
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageKind::Png => "PNG",
            ImageKind::Jpeg => "JPEG",
        };
        write!(f, "{}", name)
    }
}

/// Extensions accepted when assembling an input list.
pub const SELECTABLE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Check whether a path looks like an image by the selection filter above.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SELECTABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

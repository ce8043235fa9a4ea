use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReexportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Invalid compression level: {0}. Must be between 0 and 9")]
    InvalidCompressLevel(u8),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to replace original file: {0}")]
    Replace(String),
}

pub type Result<T> = std::result::Result<T, ReexportError>;

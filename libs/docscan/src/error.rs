use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no image is currently displayed")]
    NoImage,

    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("failed to encode image: {0}")]
    Encode(#[source] BoxError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR failed: {0}")]
    Ocr(#[source] BoxError),

    #[error("no text extracted from the scanned document")]
    NoTextExtracted,

    #[error("reference directory {} is not available", path.display())]
    ReferenceDir { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ScanError>;

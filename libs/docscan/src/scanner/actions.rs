use std::path::Path;

use super::services::Services;
use super::types::ScannerState;
use crate::common::is_supported_image;
use crate::error::{Result, ScanError};
use crate::export::{ExportFormat, PdfPlacement};
use crate::verify::{verify_against_references, VerificationOutcome};

pub const SCAN_STATUS: &str = "Document scanned successfully. Ready for verification.";

/// Decode `path` and make it the displayed image. The previous image is kept
/// when decoding fails.
pub fn scan_document(state: &mut ScannerState, services: &Services, path: &Path) -> Result<()> {
    if !is_supported_image(path) {
        return Err(ScanError::UnsupportedFormat(path.to_path_buf()));
    }

    let image = services.codec.decode(path).map_err(|e| ScanError::Decode {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    log::info!("Scanned {} ({}x{})", path.display(), image.width(), image.height());
    state.replace(image, SCAN_STATUS);
    Ok(())
}

/// Export the displayed image, choosing PNG, JPEG or PDF from the extension.
pub fn save_document(
    state: &ScannerState,
    services: &Services,
    path: &Path,
    placement: PdfPlacement,
) -> Result<ExportFormat> {
    let image = state.current().ok_or(ScanError::NoImage)?;
    let format = ExportFormat::from_path(path)
        .ok_or_else(|| ScanError::UnsupportedFormat(path.to_path_buf()))?;

    let bytes = match format.image_format() {
        Some(image_format) => services.codec.encode(image, image_format),
        None => services.pdf.render(image, placement),
    }
    .map_err(|e| ScanError::Encode(e.into()))?;

    std::fs::write(path, &bytes).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Saved {} ({} bytes) to {}", format, bytes.len(), path.display());
    Ok(format)
}

pub fn verify_with_resources(
    state: &ScannerState,
    services: &Services,
    reference_dir: &Path,
) -> Result<VerificationOutcome> {
    let image = state.current().ok_or(ScanError::NoImage)?;
    verify_against_references(
        services.ocr.as_ref(),
        services.codec.as_ref(),
        image,
        reference_dir,
    )
}

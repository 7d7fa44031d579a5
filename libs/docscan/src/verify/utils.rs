use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use image::DynamicImage;

use super::types::VerificationOutcome;
use crate::common::is_supported_image;
use crate::error::{Result, ScanError};
use crate::image2text::{extract_text, OcrEngine};
use crate::image_utils::ImageCodec;

/// Reference images in `dir`, sorted by file name.
pub fn list_reference_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScanError::ReferenceDir { path: dir.to_path_buf() });
    }

    let escaped = Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*");
    let entries = glob(&pattern.to_string_lossy())
        .map_err(|_| ScanError::ReferenceDir { path: dir.to_path_buf() })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable reference entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Trimmed, case-insensitive equality.
pub fn texts_match(scanned: &str, reference: &str) -> bool {
    scanned.trim().to_lowercase() == reference.trim().to_lowercase()
}

pub fn verify_against_references(
    ocr: &dyn OcrEngine,
    codec: &dyn ImageCodec,
    image: &DynamicImage,
    reference_dir: &Path,
) -> Result<VerificationOutcome> {
    let scanned_text = extract_text(ocr, image).map_err(|e| ScanError::Ocr(e.into()))?;
    if scanned_text.trim().is_empty() {
        return Err(ScanError::NoTextExtracted);
    }
    log::debug!("Scanned text: {}", scanned_text.trim());

    let references = list_reference_images(reference_dir)?;
    log::info!(
        "Comparing against {} reference images in {}",
        references.len(),
        reference_dir.display()
    );

    let mut checked = 0;
    for path in references {
        let reference = match codec.decode(&path) {
            Ok(image) => image,
            Err(e) => {
                log::warn!("Skipping reference {}: {}", path.display(), e);
                continue;
            }
        };

        let reference_text = match extract_text(ocr, &reference) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("OCR failed for reference {}: {}", path.display(), e);
                continue;
            }
        };
        checked += 1;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("Reference text ({}): {}", file_name, reference_text.trim());

        if texts_match(&scanned_text, &reference_text) {
            log::info!("Scanned image matches {}", file_name);
            return Ok(VerificationOutcome::Matched { file_name, path });
        }
    }

    log::info!("No match among {} reference images", checked);
    Ok(VerificationOutcome::NoMatch { checked })
}

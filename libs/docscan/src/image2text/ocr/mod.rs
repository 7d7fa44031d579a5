// OCR module structure
mod ocr_tesseract;
pub use ocr_tesseract::TesseractOcr;

mod types;
pub use types::OcrConfig;

use anyhow::Result;
use image::{DynamicImage, GrayImage};

use crate::image_utils::to_grayscale;

/// Text recognition provider. Implementations receive the grayscale raster
/// and return the recognised text untrimmed.
pub trait OcrEngine {
    fn extract_text(&self, image: &GrayImage) -> Result<String>;
}

/// Grayscale-convert `image` and run it through `engine`.
pub fn extract_text(engine: &dyn OcrEngine, image: &DynamicImage) -> Result<String> {
    let gray = to_grayscale(image);
    log::debug!("Running OCR on {}x{} grayscale image", gray.width(), gray.height());
    engine.extract_text(&gray)
}

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage};

use crate::export::{PdfPlacement, PdfRenderer};
use crate::image2text::OcrEngine;
use crate::image_utils::{to_grayscale, ImageCodec, ImageCrateCodec};

/// Deterministic OCR double: returns the text registered for the exact
/// grayscale pixels it is shown, or an empty string.
#[derive(Default)]
pub(crate) struct LookupOcr {
    table: HashMap<Vec<u8>, String>,
    failing: HashSet<Vec<u8>>,
    calls: Cell<usize>,
}

impl LookupOcr {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, image: &DynamicImage, text: &str) -> Self {
        self.table.insert(to_grayscale(image).into_raw(), text.to_string());
        self
    }

    /// Make recognition fail for exactly these pixels.
    pub(crate) fn failing_on(mut self, image: &DynamicImage) -> Self {
        self.failing.insert(to_grayscale(image).into_raw());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl OcrEngine for LookupOcr {
    fn extract_text(&self, image: &GrayImage) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.contains(image.as_raw()) {
            return Err(anyhow::anyhow!("recognition failed"));
        }
        Ok(self.table.get(image.as_raw()).cloned().unwrap_or_default())
    }
}

pub(crate) struct FailingOcr;

impl OcrEngine for FailingOcr {
    fn extract_text(&self, _image: &GrayImage) -> Result<String> {
        Err(anyhow::anyhow!("tesseract not available"))
    }
}

/// Decodes normally but refuses to encode.
pub(crate) struct BrokenEncoder;

impl ImageCodec for BrokenEncoder {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        ImageCrateCodec.decode(path)
    }

    fn encode(&self, _image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        Err(anyhow::anyhow!("no encoder for {:?}", format))
    }
}

pub(crate) struct BrokenPdf;

impl PdfRenderer for BrokenPdf {
    fn render(&self, _image: &DynamicImage, _placement: PdfPlacement) -> Result<Vec<u8>> {
        Err(anyhow::anyhow!("pdf writer unavailable"))
    }
}

/// 100x100 white page with a dark band whose position depends on `seed`, so
/// every seed yields distinct grayscale pixels.
pub(crate) fn page_image(seed: u8) -> DynamicImage {
    let band = u32::from(seed % 90);
    DynamicImage::ImageRgb8(RgbImage::from_fn(100, 100, |_, y| {
        if y >= band && y < band + 10 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    }))
}

pub(crate) fn save_png(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("failed to write test image");
    path
}

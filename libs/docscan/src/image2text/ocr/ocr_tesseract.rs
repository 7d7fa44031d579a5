use anyhow::Result;
use image::{DynamicImage, GrayImage};
use rusty_tesseract::{Args, Image};
use std::collections::HashMap;

use super::types::OcrConfig;
use super::OcrEngine;

/// Tesseract through the `tesseract` executable. The data directory comes
/// from configuration and is handed to the child process as `TESSDATA_PREFIX`.
#[derive(Clone, Debug)]
pub struct TesseractOcr {
    config: OcrConfig,
}

impl TesseractOcr {
    pub fn new(config: OcrConfig) -> Self {
        // Process-wide; must run before any other thread reads the environment.
        if let Some(dir) = &config.tessdata_dir {
            std::env::set_var("TESSDATA_PREFIX", dir);
        }
        Self { config }
    }

    fn args(&self) -> Args {
        let config = &self.config;
        Args {
            lang: config.lang.clone(),
            config_variables: HashMap::new(),
            dpi: Some(config.dpi.unwrap_or(OcrConfig::get_default_dpi()) as i32),
            psm: Some(config.psm.unwrap_or(OcrConfig::get_default_psm()) as i32),
            oem: Some(config.oem.unwrap_or(OcrConfig::get_default_oem()) as i32),
        }
    }
}

impl OcrEngine for TesseractOcr {
    fn extract_text(&self, image: &GrayImage) -> Result<String> {
        let dynamic = DynamicImage::ImageLuma8(image.clone());
        let ocr_image = Image::from_dynamic_image(&dynamic)
            .map_err(|e| anyhow::anyhow!("Error preparing image for tesseract: {}", e))?;

        let text = rusty_tesseract::image_to_string(&ocr_image, &self.args())
            .map_err(|e| anyhow::anyhow!("Error running tesseract: {}", e))?;
        log::debug!("Tesseract extracted {} characters", text.len());
        Ok(text)
    }
}

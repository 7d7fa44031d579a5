use std::path::{Path, PathBuf};

use anyhow::Result;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::common::resolve_bundled_resource_dir;
use crate::export::PdfPlacement;
use crate::image2text::OcrConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub reference_dir: PathBuf,
    pub ocr: OcrConfig,
    pub pdf_placement: PdfPlacement,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            reference_dir: resolve_bundled_resource_dir(),
            ocr: OcrConfig::default(),
            pdf_placement: PdfPlacement::default(),
        }
    }
}

impl ScannerConfig {
    pub fn new(reference_dir: PathBuf, ocr: OcrConfig, pdf_placement: PdfPlacement) -> Self {
        Self {
            reference_dir,
            ocr,
            pdf_placement,
        }
    }

    /// Load a JSON config file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
        Ok(config)
    }
}

/// The displayed image and status line. At most one image is held; a new
/// scan replaces it wholesale.
#[derive(Debug, Default, Clone)]
pub struct ScannerState {
    current: Option<DynamicImage>,
    status: String,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&DynamicImage> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn replace(&mut self, image: DynamicImage, status: impl Into<String>) {
        self.current = Some(image);
        self.status = status.into();
    }
}

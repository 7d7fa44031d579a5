use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    pub tessdata_dir: Option<PathBuf>, // directory holding <lang>.traineddata
    pub lang: String,
    pub dpi: Option<u32>, // dots per inch
    pub psm: Option<u32>, // Page segmentation mode
    pub oem: Option<u32>, // OCR Engine Mode
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tessdata_dir: None,
            lang: Self::get_default_lang(),
            dpi: None,
            psm: None,
            oem: None,
        }
    }
}

impl OcrConfig {
    pub fn get_default_lang() -> String {
        "eng".to_string()
    }

    pub fn get_default_dpi() -> u32 {
        300
    }

    pub fn get_default_psm() -> u32 {
        3
    }

    pub fn get_default_oem() -> u32 {
        3
    }
}

use std::path::Path;

use clap::ValueEnum;
use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::common::extension_lowercase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    /// Pick the output format from the destination's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match extension_lowercase(path)?.as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }

    /// Raster encoder for this format, `None` for PDF.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            ExportFormat::Png => Some(ImageFormat::Png),
            ExportFormat::Jpeg => Some(ImageFormat::Jpeg),
            ExportFormat::Pdf => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Png => write!(f, "PNG"),
            ExportFormat::Jpeg => write!(f, "JPEG"),
            ExportFormat::Pdf => write!(f, "PDF"),
        }
    }
}

/// How the raster is drawn on the PDF page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PdfPlacement {
    /// One point per pixel, at the fixed offset.
    #[default]
    Native,
    /// Scaled uniformly to fill the page area right of and above the offset.
    FitPage,
}

impl std::fmt::Display for PdfPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfPlacement::Native => write!(f, "native"),
            PdfPlacement::FitPage => write!(f, "fit-page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.png")), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_path(Path::new("a.JPG")), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_path(Path::new("a.jpeg")), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_path(Path::new("a.pdf")), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_path(Path::new("a.tiff")), None);
        assert_eq!(ExportFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_placement_names_match_config_file() {
        assert_eq!(PdfPlacement::from_str("fit-page", false), Ok(PdfPlacement::FitPage));
        assert_eq!(PdfPlacement::from_str("native", false), Ok(PdfPlacement::Native));
        assert!(PdfPlacement::from_str("fitpage", false).is_err());

        let parsed: PdfPlacement = serde_json::from_str("\"fit-page\"").unwrap();
        assert_eq!(parsed, PdfPlacement::FitPage);
        assert!(serde_json::from_str::<PdfPlacement>("\"fitpage\"").is_err());
    }
}

use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, GrayImage};

pub fn load_image_from_path(path: &Path) -> Result<DynamicImage> {
    image::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to load image from {}: {}", path.display(), e))
}

/// Plain per-pixel luma conversion. No filtering, thresholding or deskew is
/// applied so OCR sees the raster as displayed.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let rgb = RgbImage::from_pixel(37, 11, Rgb([10, 200, 30]));
        let gray = to_grayscale(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.dimensions(), (37, 11));

        let rgba = RgbaImage::from_pixel(1, 64, Rgba([0, 0, 0, 0]));
        let gray = to_grayscale(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(gray.dimensions(), (1, 64));
    }

    #[test]
    fn test_grayscale_keeps_black_and_white() {
        let mut rgb = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        rgb.put_pixel(1, 0, Rgb([0, 0, 0]));
        let gray = to_grayscale(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.get_pixel(0, 0).0, [255]);
        assert_eq!(gray.get_pixel(1, 0).0, [0]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_image_from_path(Path::new("does/not/exist.png")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}

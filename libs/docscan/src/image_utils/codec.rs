use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageFormat};

use super::utils::load_image_from_path;

/// Raster decode/encode provider. Swappable so actions can be tested without
/// touching real codecs.
pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage>;
    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        load_image_from_path(path)
    }

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        // JPEG has no alpha channel
        let result = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8())
                .write_to(&mut Cursor::new(&mut buffer), format),
            _ => image.write_to(&mut Cursor::new(&mut buffer), format),
        };
        result.map_err(|e| anyhow::anyhow!("Error encoding image as {:?}: {}", format, e))?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(40, 25, |x, y| {
            Rgba([(x * 6) as u8, (y * 10) as u8, 128, 200])
        }))
    }

    #[test]
    fn test_reencode_keeps_dimensions() -> Result<()> {
        let temp_dir = tempdir()?;
        let codec = ImageCrateCodec;

        for (name, format) in [("out.png", ImageFormat::Png), ("out.jpg", ImageFormat::Jpeg)] {
            let path = temp_dir.path().join(name);
            std::fs::write(&path, codec.encode(&sample(), format)?)?;
            let decoded = codec.decode(&path)?;
            assert_eq!((decoded.width(), decoded.height()), (40, 25), "{}", name);
        }
        Ok(())
    }

    #[test]
    fn test_png_is_lossless() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("lossless.png");
        let codec = ImageCrateCodec;

        std::fs::write(&path, codec.encode(&sample(), ImageFormat::Png)?)?;
        assert_eq!(codec.decode(&path)?.to_rgba8(), sample().to_rgba8());
        Ok(())
    }

    #[test]
    fn test_decode_rejects_garbage() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"not an image")?;
        assert!(ImageCrateCodec.decode(&path).is_err());
        Ok(())
    }
}

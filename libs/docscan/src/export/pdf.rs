use anyhow::Result;
use image::DynamicImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::types::PdfPlacement;

// US Letter in points
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

// Lower-left corner of the image, in points from the page origin
const IMAGE_OFFSET: (f32, f32) = (100.0, 100.0);

const IMAGE_NAME: &str = "Im0";

/// Single-page PDF writer for one raster.
pub trait PdfRenderer {
    fn render(&self, image: &DynamicImage, placement: PdfPlacement) -> Result<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfRenderer;

/// Rectangle `(x, y, width, height)` the image occupies on the page.
fn image_rect(width: u32, height: u32, placement: PdfPlacement) -> (f32, f32, f32, f32) {
    let (x, y) = IMAGE_OFFSET;
    let (w, h) = (width as f32, height as f32);

    match placement {
        PdfPlacement::FitPage if width > 0 && height > 0 => {
            let scale = ((PAGE_WIDTH - x) / w).min((PAGE_HEIGHT - y) / h);
            (x, y, w * scale, h * scale)
        }
        _ => (x, y, w, h),
    }
}

impl PdfRenderer for LopdfRenderer {
    fn render(&self, image: &DynamicImage, placement: PdfPlacement) -> Result<Vec<u8>> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        log::debug!("Embedding {}x{} image in PDF ({})", width, height, placement);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
            },
            rgb.into_raw(),
        );
        let image_id = doc.add_object(image_stream);

        let (x, y, w, h) = image_rect(width, height, placement);
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![w.into(), 0.0_f32.into(), 0.0_f32.into(), h.into(), x.into(), y.into()],
                ),
                Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    IMAGE_NAME => image_id,
                },
            },
            "MediaBox" => Object::Array(vec![
                0.0_f32.into(),
                0.0_f32.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ]),
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Object::Array(vec![page_id.into()]),
                "Count" => 1_i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

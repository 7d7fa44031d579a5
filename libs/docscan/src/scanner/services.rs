use crate::export::{LopdfRenderer, PdfRenderer};
use crate::image2text::{OcrConfig, OcrEngine, TesseractOcr};
use crate::image_utils::{ImageCodec, ImageCrateCodec};

/// External collaborators the actions call into.
pub struct Services {
    pub codec: Box<dyn ImageCodec>,
    pub pdf: Box<dyn PdfRenderer>,
    pub ocr: Box<dyn OcrEngine>,
}

impl Services {
    pub fn new(
        codec: Box<dyn ImageCodec>,
        pdf: Box<dyn PdfRenderer>,
        ocr: Box<dyn OcrEngine>,
    ) -> Self {
        Self { codec, pdf, ocr }
    }

    /// `image` codecs, `lopdf` and tesseract.
    pub fn native(ocr_config: OcrConfig) -> Self {
        Self::new(
            Box::new(ImageCrateCodec),
            Box::new(LopdfRenderer),
            Box::new(TesseractOcr::new(ocr_config)),
        )
    }

    pub fn with_ocr(mut self, ocr: Box<dyn OcrEngine>) -> Self {
        self.ocr = ocr;
        self
    }
}

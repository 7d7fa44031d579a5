mod ocr;
pub use ocr::{extract_text, OcrConfig, OcrEngine, TesseractOcr};

mod pdf;
mod types;

pub use pdf::{LopdfRenderer, PdfRenderer};
pub use types::{ExportFormat, PdfPlacement};

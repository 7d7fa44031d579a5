mod actions;
pub use actions::{save_document, scan_document, verify_with_resources, SCAN_STATUS};

mod services;
pub use services::Services;

mod session;
pub use session::ScannerSession;

mod types;
pub use types::{ScannerConfig, ScannerState};

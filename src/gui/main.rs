use docscan::logger::init_logger_exe;
use docscan::scanner::{ScannerConfig, ScannerSession};

mod app;
use crate::app::ScannerApp;

fn main() -> Result<(), eframe::Error> {
    init_logger_exe();

    let config = ScannerConfig::default();
    log::info!("Reference directory: {}", config.reference_dir.display());
    let session = ScannerSession::native(config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("Document Scanner"),
        ..Default::default()
    };

    eframe::run_native(
        "Document Scanner",
        options,
        Box::new(|_cc| Box::new(ScannerApp::new(session))),
    )
}

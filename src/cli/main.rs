use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use docscan::common::Notice;
use docscan::export::PdfPlacement;
use docscan::logger::init_logger_exe;
use docscan::scanner::{ScannerConfig, ScannerSession};

#[derive(Parser)]
#[command(
    version,
    about = "A CLI tool to scan, export and verify document images",
    long_about = None
)]
struct Cli {
    #[arg(long, help = "input document image (png, jpg, jpeg)")]
    image: PathBuf,
    #[arg(long, help = "export the document to this path (png, jpg, pdf)")]
    save: Option<PathBuf>,
    #[arg(
        long,
        help = "compare the document's text against the reference images",
        default_value_t = false
    )]
    verify: bool,
    #[arg(long, help = "JSON configuration file")]
    config: Option<PathBuf>,
    #[arg(long, help = "directory of reference images")]
    reference_dir: Option<PathBuf>,
    #[arg(long, help = "tesseract data directory (tessdata)")]
    tessdata_dir: Option<PathBuf>,
    #[arg(long, help = "OCR language code")]
    lang: Option<String>,
    #[arg(long, value_enum, help = "PDF image placement")]
    pdf_placement: Option<PdfPlacement>,
}

impl Cli {
    fn scanner_config(&self) -> Result<ScannerConfig> {
        let mut config = match &self.config {
            Some(path) => ScannerConfig::from_file(path)?,
            None => ScannerConfig::default(),
        };

        if let Some(dir) = &self.reference_dir {
            config.reference_dir = dir.clone();
        }
        if let Some(dir) = &self.tessdata_dir {
            config.ocr.tessdata_dir = Some(dir.clone());
        }
        if let Some(lang) = &self.lang {
            config.ocr.lang = lang.clone();
        }
        if let Some(placement) = self.pdf_placement {
            config.pdf_placement = placement;
        }
        Ok(config)
    }
}

fn report(notice: &Notice) {
    println!("{}", notice);
}

fn main() -> Result<ExitCode> {
    init_logger_exe();
    let cli = Cli::parse();

    let config = cli.scanner_config()?;
    log::info!(
        "Reference directory: {}, PDF placement: {}",
        config.reference_dir.display(),
        config.pdf_placement
    );
    let mut session = ScannerSession::native(config);
    let mut failed = false;

    match session.scan_with_notice(&cli.image) {
        Some(notice) => {
            report(&notice);
            failed = true;
        }
        None => println!("{}", session.state().status()),
    }

    if let Some(path) = &cli.save {
        let notice = session.save_with_notice(path);
        failed |= !notice.success;
        report(&notice);
    }

    if cli.verify {
        let notice = session.verify_with_notice();
        failed |= !notice.success;
        report(&notice);
    }

    log::info!("Exiting...");
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

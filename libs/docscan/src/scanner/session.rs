use std::path::Path;

use super::actions::{save_document, scan_document, verify_with_resources};
use super::services::Services;
use super::types::{ScannerConfig, ScannerState};
use crate::common::{Action, Notice};
use crate::error::Result;
use crate::export::ExportFormat;
use crate::verify::VerificationOutcome;

/// Application state plus the services and configuration the front ends
/// drive it with. Everything runs on the caller's thread.
pub struct ScannerSession {
    config: ScannerConfig,
    services: Services,
    state: ScannerState,
}

impl ScannerSession {
    pub fn new(config: ScannerConfig, services: Services) -> Self {
        Self {
            config,
            services,
            state: ScannerState::new(),
        }
    }

    /// Session backed by the `image` codecs, `lopdf` and tesseract.
    pub fn native(config: ScannerConfig) -> Self {
        let services = Services::native(config.ocr.clone());
        Self::new(config, services)
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn scan(&mut self, path: &Path) -> Result<()> {
        scan_document(&mut self.state, &self.services, path)
    }

    pub fn save(&self, path: &Path) -> Result<ExportFormat> {
        save_document(&self.state, &self.services, path, self.config.pdf_placement)
    }

    pub fn verify(&self) -> Result<VerificationOutcome> {
        verify_with_resources(&self.state, &self.services, &self.config.reference_dir)
    }

    /// Run `save` and describe the result for the user.
    pub fn save_with_notice(&self, path: &Path) -> Notice {
        match self.save(path) {
            Ok(_) => Notice::info("Success", "Document saved successfully."),
            Err(e) => {
                log::error!("Failed to save document: {}", e);
                Notice::from_error(Action::Save, &e)
            }
        }
    }

    /// Run `verify` and describe the result for the user.
    pub fn verify_with_notice(&self) -> Notice {
        match self.verify() {
            Ok(outcome) => outcome.notice(),
            Err(e) => {
                log::error!("Failed to verify document: {}", e);
                Notice::from_error(Action::Verify, &e)
            }
        }
    }

    /// Run `scan`; only failures produce a notice; success updates the status.
    pub fn scan_with_notice(&mut self, path: &Path) -> Option<Notice> {
        match self.scan(path) {
            Ok(()) => None,
            Err(e) => {
                log::error!("Failed to scan document: {}", e);
                Some(Notice::from_error(Action::Scan, &e))
            }
        }
    }
}

use std::path::PathBuf;

use crate::common::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// First reference, in file-name order, whose text equals the scan.
    Matched { file_name: String, path: PathBuf },
    /// Every reference was checked and none matched.
    NoMatch { checked: usize },
}

impl VerificationOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, VerificationOutcome::Matched { .. })
    }

    pub fn notice(&self) -> Notice {
        match self {
            VerificationOutcome::Matched { file_name, .. } => Notice::info(
                "Verification Passed",
                format!("Scanned image matches the image: {}", file_name),
            ),
            VerificationOutcome::NoMatch { .. } => Notice::failure(
                "Verification Failed",
                "Scanned image does not match any image in the resources folder.",
            ),
        }
    }
}

use crate::error::ScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Scan,
    Save,
    Verify,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Scan => write!(f, "scan"),
            Action::Save => write!(f, "save"),
            Action::Verify => write!(f, "verify"),
        }
    }
}

/// Title and message shown to the user once an action finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub success: bool,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            success: false,
        }
    }

    pub fn from_error(action: Action, err: &ScanError) -> Self {
        let message = match (action, err) {
            (Action::Save, ScanError::NoImage) => "No image scanned to save.".to_string(),
            (_, ScanError::NoImage) => "No document scanned to verify.".to_string(),
            (_, ScanError::NoTextExtracted) => {
                "No text extracted from the scanned document.".to_string()
            }
            (action, err) => format!("Failed to {} document: {}", action, err),
        };
        Self::failure("Error", message)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

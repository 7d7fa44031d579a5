mod types;
mod utils;

pub use types::VerificationOutcome;
pub use utils::{list_reference_images, texts_match, verify_against_references};

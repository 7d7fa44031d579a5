mod path_utils;
mod types;

pub use path_utils::{extension_lowercase, is_supported_image, resolve_bundled_resource_dir};
pub use types::{Action, Notice};

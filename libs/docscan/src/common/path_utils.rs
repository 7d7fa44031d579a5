use std::path::{Path, PathBuf};

const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
const BUNDLED_REFERENCE_DIR: &str = "resources/images";

pub fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_lowercase)
}

/// True for the raster formats the scanner can open and compare against.
pub fn is_supported_image(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Locate the reference images shipped next to the executable, falling back
/// to the working directory when running from a source checkout.
pub fn resolve_bundled_resource_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(BUNDLED_REFERENCE_DIR)));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(BUNDLED_REFERENCE_DIR),
    }
}

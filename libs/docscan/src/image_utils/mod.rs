mod codec;
mod utils;

pub use codec::{ImageCodec, ImageCrateCodec};
pub use utils::{load_image_from_path, to_grayscale};

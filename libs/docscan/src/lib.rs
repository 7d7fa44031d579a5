pub mod common;
pub mod error;
pub mod export;
pub mod image2text;
pub mod image_utils;
pub mod logger;
pub mod scanner;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_support;

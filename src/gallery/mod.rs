mod builder;
mod types;

pub use builder::{build_gallery, process_media};
pub use types::GalleryEntry;

#[cfg(test)]
pub mod unit_test;

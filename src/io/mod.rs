//! I/O layer: decoding uploaded files (`reader`), zip packaging
//! (`writers::archive`) and configuration presets (`preset`).
pub mod reader;
pub use reader::{UploadedImage, decode_image};

pub mod preset;
pub use preset::{load_preset, save_preset};

pub mod writers;

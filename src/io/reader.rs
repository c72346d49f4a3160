use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// An input file as received: its file name and encoded bytes
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub name: String,
    pub data: Vec<u8>,
}

impl UploadedImage {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::invalid("input", path.display()))?;
        let data = std::fs::read(path)?;
        debug!("Read {} ({} bytes)", name, data.len());
        Ok(Self { name, data })
    }
}

/// Decode from magic bytes, ignoring the file extension
pub fn decode_image(name: &str, data: &[u8]) -> Result<DynamicImage> {
    let decode_err = |source| Error::Decode {
        name: name.to_string(),
        source,
    };

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    reader.decode().map_err(decode_err)
}

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::error::Result;

/// Encode as PNG, keeping 8/16-bit color types as they are.
/// Float images are stored as 16-bit since PNG has no float samples.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    match img {
        DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb16(img.to_rgb16()).write_to(&mut buffer, ImageFormat::Png)?
        }
        DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(img.to_rgba16()).write_to(&mut buffer, ImageFormat::Png)?
        }
        _ => img.write_to(&mut buffer, ImageFormat::Png)?,
    }

    Ok(buffer.into_inner())
}

use image::DynamicImage;
use tracing::{debug, info};

use crate::core::processing::resize::resize_exact;
use crate::error::Result;
use crate::types::{AspectMode, AspectRatio, FitStrategy};

/// Flip the target ratio when it disagrees with the image on portrait vs landscape.
/// Returns the (width, height) components of the ratio to fit against.
pub fn normalize_ratio(width: u32, height: u32, target: AspectRatio) -> (f64, f64) {
    let current = width as f64 / height as f64;
    let ratio = target.value();
    if (current > 1.0 && ratio < 1.0) || (current < 1.0 && ratio > 1.0) {
        (target.height, target.width)
    } else {
        (target.width, target.height)
    }
}

/// Largest centred region of the image with the target ratio.
/// The kept axis is untouched, the other is floored.
pub fn crop_dimensions(width: u32, height: u32, target: AspectRatio) -> (u32, u32) {
    let (rw, rh) = normalize_ratio(width, height, target);
    let (w, h) = (width as f64, height as f64);

    if w * rh > h * rw {
        let new_width = (h * rw / rh) as u32;
        (new_width.clamp(1, width), height)
    } else {
        let new_height = (w * rh / rw) as u32;
        (width, new_height.clamp(1, height))
    }
}

/// Smallest size with the target ratio that contains the image on both axes.
pub fn resize_dimensions(width: u32, height: u32, target: AspectRatio) -> (u32, u32) {
    let (rw, rh) = normalize_ratio(width, height, target);
    let (w, h) = (width as f64, height as f64);

    if w * rh > h * rw {
        let new_height = (w * rh / rw).round() as u32;
        (width, new_height.max(height))
    } else {
        let new_width = (h * rw / rh).round() as u32;
        (new_width.max(width), height)
    }
}

/// Centre-crop along the long axis so the image matches `target`
pub fn crop_to_ratio(img: &DynamicImage, target: AspectRatio) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    let (new_width, new_height) = crop_dimensions(width, height, target);
    let left = (width - new_width) / 2;
    let top = (height - new_height) / 2;

    debug!(
        "Cropping {}x{} to {}x{} at ({}, {})",
        width, height, new_width, new_height, left, top
    );

    img.crop_imm(left, top, new_width, new_height)
}

/// Stretch the whole image so it matches `target`; nothing is cropped
pub fn resize_to_ratio(img: &DynamicImage, target: AspectRatio) -> Result<DynamicImage> {
    let (width, height) = (img.width(), img.height());
    let (new_width, new_height) = resize_dimensions(width, height, target);

    if (new_width, new_height) == (width, height) {
        debug!("Image already at {} ({}x{})", target, width, height);
        return Ok(img.clone());
    }

    debug!(
        "Resizing {}x{} to {}x{}",
        width, height, new_width, new_height
    );
    resize_exact(img, new_width, new_height)
}

pub fn fit_to_aspect(img: DynamicImage, mode: &AspectMode) -> Result<DynamicImage> {
    match *mode {
        AspectMode::KeepOriginal => Ok(img),
        AspectMode::Fit { ratio, strategy } => {
            info!("Fitting to {} ({})", ratio, strategy);
            match strategy {
                FitStrategy::Crop => Ok(crop_to_ratio(&img, ratio)),
                FitStrategy::Resize => resize_to_ratio(&img, ratio),
            }
        }
    }
}

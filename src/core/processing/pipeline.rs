use image::DynamicImage;
use tracing::info;

use crate::core::params::BorderConfig;
use crate::core::processing::aspect::fit_to_aspect;
use crate::core::processing::padding::pad;
use crate::error::Result;
use crate::types::Orientation;

/// Fit and pad one decoded image. Orientation is taken from the image as
/// decoded, before any fitting.
pub fn border_image(img: DynamicImage, config: &BorderConfig) -> Result<DynamicImage> {
    let orientation = Orientation::of(img.width(), img.height());
    info!(
        "Image {}x{} classified as {}",
        img.width(),
        img.height(),
        orientation
    );

    let fitted = fit_to_aspect(img, &config.aspect)?;
    Ok(pad(&fitted, config.settings_for(orientation)))
}

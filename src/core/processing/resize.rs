use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;
use tracing::info;

use crate::error::Result;

/// Resample to exactly `target_width x target_height`, keeping the color type.
/// Aspect ratio is not preserved.
pub fn resize_exact(
    img: &DynamicImage,
    target_width: u32,
    target_height: u32,
) -> Result<DynamicImage> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    info!(
        "Original size: {}x{}, New size: {}x{}",
        img.width(),
        img.height(),
        target_width,
        target_height
    );

    let mut dst_image = DynamicImage::new(target_width, target_height, img.color());
    resizer.resize(img, &mut dst_image, &resize_options)?;

    Ok(dst_image)
}

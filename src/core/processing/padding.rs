use image::{DynamicImage, ImageBuffer, Pixel, Primitive, imageops};
use tracing::info;

use crate::core::params::{Margins, MatAspect, OrientationSettings};

/// Canvas size and the position of the original image on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// Grow each axis by its margin on both sides. Offsets are floored per axis,
/// so odd remainders can leave the image one pixel off centre.
pub fn percent_layout(width: u32, height: u32, margins: &Margins) -> CanvasLayout {
    let (w, h) = (width as f64, height as f64);

    CanvasLayout {
        width: (w * (1.0 + 2.0 * margins.h_padding)) as u32,
        height: (h * (1.0 + 2.0 * margins.v_padding)) as u32,
        x: (w * margins.h_padding) as u32,
        y: (h * margins.v_padding) as u32,
    }
}

/// Size the canvas to the mat, but never below the percentage layout.
pub fn canvas_layout(width: u32, height: u32, margins: &Margins, mat: &MatAspect) -> CanvasLayout {
    let padded = percent_layout(width, height, margins);

    let mat_width = (width as f64 * mat.border.width / mat.image.width) as u32;
    let mat_height = (height as f64 * mat.border.height / mat.image.height) as u32;

    let canvas_width = padded.width.max(mat_width);
    let canvas_height = padded.height.max(mat_height);

    CanvasLayout {
        width: canvas_width,
        height: canvas_height,
        x: (canvas_width - width) / 2,
        y: (canvas_height - height) / 2,
    }
}

pub fn pad_percent(img: &DynamicImage, margins: &Margins) -> DynamicImage {
    let layout = percent_layout(img.width(), img.height(), margins);
    paste_on_white(img, &layout)
}

pub fn pad_to_canvas(img: &DynamicImage, margins: &Margins, mat: &MatAspect) -> DynamicImage {
    let layout = canvas_layout(img.width(), img.height(), margins, mat);
    paste_on_white(img, &layout)
}

pub fn pad(img: &DynamicImage, settings: &OrientationSettings) -> DynamicImage {
    match &settings.mat {
        Some(mat) => pad_to_canvas(img, &settings.margins, mat),
        None => pad_percent(img, &settings.margins),
    }
}

fn paste_on_white(img: &DynamicImage, layout: &CanvasLayout) -> DynamicImage {
    info!(
        "Adding border: {}x{} -> {}x{} at ({}, {})",
        img.width(),
        img.height(),
        layout.width,
        layout.height,
        layout.x,
        layout.y
    );

    match img {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(paste_buffer(buf, layout)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(paste_buffer(buf, layout)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(paste_buffer(buf, layout)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(paste_buffer(buf, layout)),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(paste_buffer(buf, layout)),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(paste_buffer(buf, layout)),
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(paste_buffer(buf, layout)),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(paste_buffer(buf, layout)),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(paste_buffer(buf, layout)),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(paste_buffer(buf, layout)),
        other => DynamicImage::ImageRgba8(paste_buffer(&other.to_rgba8(), layout)),
    }
}

// White is every channel at its maximum, which also makes alpha opaque.
fn paste_buffer<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    layout: &CanvasLayout,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let channels = vec![<P::Subpixel as Primitive>::DEFAULT_MAX_VALUE; P::CHANNEL_COUNT as usize];
    let white = *P::from_slice(&channels);

    let mut canvas = ImageBuffer::from_pixel(layout.width, layout.height, white);
    imageops::replace(&mut canvas, src, layout.x as i64, layout.y as i64);
    canvas
}

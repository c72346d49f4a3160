use clap::Parser;
use std::path::PathBuf;

use whiteborder::{AspectRatio, FitStrategy};

#[derive(Parser)]
#[command(
    name = "whiteborder",
    version,
    about = "Add a white border to images and zip the results"
)]
pub struct CliArgs {
    /// Image files to border (PNG or JPEG)
    pub inputs: Vec<PathBuf>,

    /// Output zip archive
    #[arg(short, long, default_value = "bordered_images.zip")]
    pub output: PathBuf,

    /// Horizontal padding for portrait images, as a fraction of the width
    #[arg(long, default_value_t = 0.12)]
    pub portrait_h_padding: f64,

    /// Vertical padding for portrait images, as a fraction of the height
    #[arg(long, default_value_t = 0.06)]
    pub portrait_v_padding: f64,

    /// Horizontal padding for landscape images, as a fraction of the width
    #[arg(long, default_value_t = 0.06)]
    pub landscape_h_padding: f64,

    /// Vertical padding for landscape images, as a fraction of the height
    #[arg(long, default_value_t = 0.12)]
    pub landscape_v_padding: f64,

    /// Keep each image's own aspect ratio instead of fitting to --aspect
    #[arg(long, default_value_t = false)]
    pub keep_aspect: bool,

    /// Target aspect ratio (WxH or W:H), flipped to match each image's orientation
    #[arg(long, default_value_t = AspectRatio::LETTER)]
    pub aspect: AspectRatio,

    /// How to reach the target aspect: crop the long side or stretch the short side
    #[arg(long, value_enum, default_value_t = FitStrategy::Crop)]
    pub fit: FitStrategy,

    /// Mat size for portrait images (e.g. 11x14); requires --portrait-image-aspect
    #[arg(long)]
    pub portrait_border_aspect: Option<AspectRatio>,

    /// Print size the portrait mat is relative to (e.g. 8x10)
    #[arg(long)]
    pub portrait_image_aspect: Option<AspectRatio>,

    /// Mat size for landscape images (e.g. 14x11); requires --landscape-image-aspect
    #[arg(long)]
    pub landscape_border_aspect: Option<AspectRatio>,

    /// Print size the landscape mat is relative to (e.g. 10x8)
    #[arg(long)]
    pub landscape_image_aspect: Option<AspectRatio>,

    /// Load settings from a preset file; border flags are ignored
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Write the effective settings to a preset file
    #[arg(long)]
    pub save_preset: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#![doc = r#"
whiteborder: add a white mat to photos and package them for download.

Each image is optionally fitted to a target aspect ratio (centre crop or
stretch), then placed on a white canvas sized either by percentage margins or
by a mat aspect such as 11x14 around an 8x10 print. Portrait and landscape
images get their own settings. Results are PNG files named
`bordered_<original name>`, collected into a single zip archive.

Add dependency
--------------
```toml
[dependencies]
whiteborder = "0.1"
```

Quick start: a batch in memory
------------------------------
```rust,no_run
use whiteborder::{BorderConfig, UploadedImage, archive_to_vec, process_batch};

fn main() -> whiteborder::Result<()> {
    let uploads = vec![
        UploadedImage::new("beach.jpg", std::fs::read("beach.jpg")?),
        UploadedImage::new("portrait.png", std::fs::read("portrait.png")?),
    ];

    let images = process_batch(&uploads, &BorderConfig::default())?;
    let zip_bytes = archive_to_vec(&images)?;
    std::fs::write("bordered_images.zip", zip_bytes)?;
    Ok(())
}
```

Custom configuration
--------------------
```rust
use whiteborder::{AspectMode, AspectRatio, BorderConfig, FitStrategy, Margins, MatAspect};

let mat = MatAspect {
    border: AspectRatio::new(11.0, 14.0),
    image: AspectRatio::new(8.0, 10.0),
};

let mut config = BorderConfig::default();
config.aspect = AspectMode::Fit {
    ratio: AspectRatio::new(8.0, 10.0),
    strategy: FitStrategy::Resize,
};
config.portrait.mat = Some(mat);
config.landscape.mat = Some(MatAspect {
    border: AspectRatio::new(14.0, 11.0),
    image: AspectRatio::new(10.0, 8.0),
});
config.landscape.margins = Margins::new(0.05, 0.05);

config.validate().expect("valid configuration");
```

Error handling
--------------
All public functions return `whiteborder::Result<T>`. A file that cannot be
decoded aborts the whole batch with `Error::Decode`, naming the file.

Useful modules
--------------
- [`api`]: batch and archive entry points.
- [`core`]: aspect fitting, padding and the per-image pipeline.
- [`io`]: decoding, zip writing and presets.
- [`types`]: `Orientation`, `AspectRatio`, `AspectMode`, `FitStrategy`.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::{BorderConfig, Margins, MatAspect, OrientationSettings};
pub use error::{Error, Result};
pub use types::{AspectMode, AspectRatio, FitStrategy, Orientation};

pub use crate::core::processing::aspect::{crop_to_ratio, fit_to_aspect, resize_to_ratio};
pub use crate::core::processing::padding::{CanvasLayout, pad, pad_percent, pad_to_canvas};
pub use crate::core::processing::pipeline::border_image;

pub use io::preset::{load_preset, save_preset};
pub use io::reader::{UploadedImage, decode_image};

pub use api::{
    BatchReport, BorderedImage, archive_to_vec, process_batch, process_files_to_archive,
    process_upload, write_archive,
};

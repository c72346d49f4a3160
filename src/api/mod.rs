//! High-level, ergonomic library API: border one upload, a whole batch, and
//! package the results as a zip archive. Prefer these entrypoints over the
//! low-level processing modules when integrating whiteborder.
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use tracing::info;

use crate::core::params::BorderConfig;
use crate::core::processing::pipeline::border_image;
use crate::core::processing::save::encode_png;
use crate::error::Result;
use crate::io::reader::{UploadedImage, decode_image};
use crate::io::writers::archive::{entry_name, unique_entry_names, write_zip};

/// One finished image, PNG-encoded
#[derive(Debug, Clone)]
pub struct BorderedImage {
    /// Upload name the image came from
    pub source_name: String,
    /// `bordered_<source_name>`
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub archive_bytes: u64,
}

/// Decode, fit, pad and re-encode a single upload
pub fn process_upload(upload: &UploadedImage, config: &BorderConfig) -> Result<BorderedImage> {
    let decoded = decode_image(&upload.name, &upload.data)?;
    let bordered = border_image(decoded, config)?;
    let png = encode_png(&bordered)?;

    Ok(BorderedImage {
        source_name: upload.name.clone(),
        name: entry_name(&upload.name),
        width: bordered.width(),
        height: bordered.height(),
        png,
    })
}

/// Process every upload in order. The first failure aborts the batch and
/// nothing is returned; an empty batch yields an empty result.
pub fn process_batch(uploads: &[UploadedImage], config: &BorderConfig) -> Result<Vec<BorderedImage>> {
    config.validate()?;

    if uploads.is_empty() {
        info!("No images to process");
        return Ok(Vec::new());
    }

    let mut images = Vec::with_capacity(uploads.len());
    for upload in uploads {
        info!("Processing: {}", upload.name);
        images.push(process_upload(upload, config)?);
    }

    info!("Processed {} images", images.len());
    Ok(images)
}

/// Write the images into a zip archive, one entry per image in order
pub fn write_archive<W: Write + Seek>(images: &[BorderedImage], writer: W) -> Result<W> {
    let names = unique_entry_names(images.iter().map(|img| img.name.as_str()));
    write_zip(
        writer,
        names
            .iter()
            .zip(images)
            .map(|(name, img)| (name.as_str(), img.png.as_slice())),
    )
}

/// In-memory archive, e.g. for a download response
pub fn archive_to_vec(images: &[BorderedImage]) -> Result<Vec<u8>> {
    Ok(write_archive(images, Cursor::new(Vec::new()))?.into_inner())
}

/// Read `inputs` from disk, border them and write one archive to `output`.
/// Nothing is written when `inputs` is empty.
pub fn process_files_to_archive<P: AsRef<Path>>(
    inputs: &[P],
    output: &Path,
    config: &BorderConfig,
) -> Result<BatchReport> {
    let uploads = inputs
        .iter()
        .map(|p| UploadedImage::from_path(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let images = process_batch(&uploads, config)?;
    if images.is_empty() {
        return Ok(BatchReport::default());
    }

    let writer = write_archive(&images, BufWriter::new(File::create(output)?))?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    let archive_bytes = file.metadata()?.len();

    info!("Archive {:?} ({} bytes)", output, archive_bytes);
    Ok(BatchReport {
        processed: images.len(),
        archive_bytes,
    })
}

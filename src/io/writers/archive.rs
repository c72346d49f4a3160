use std::collections::HashSet;
use std::io::{Seek, Write};
use std::path::Path;

use tracing::{info, warn};
use zip::write::{FileOptions, ZipWriter};

use crate::error::Result;

pub const ENTRY_PREFIX: &str = "bordered_";

/// `bordered_<file name>`, with any directory part of `original` dropped
pub fn entry_name(original: &str) -> String {
    let file_name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(original);
    format!("{}{}", ENTRY_PREFIX, file_name)
}

/// Suffix repeated names with ` (2)`, ` (3)`, ... before the extension so
/// every entry survives in the archive.
pub fn unique_entry_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for name in names {
        let mut candidate = name.to_string();
        let mut n = 2;
        while !seen.insert(candidate.clone()) {
            candidate = match name.rsplit_once('.') {
                Some((stem, ext)) if !stem.is_empty() => format!("{} ({}).{}", stem, n, ext),
                _ => format!("{} ({})", name, n),
            };
            n += 1;
        }
        if candidate != name {
            warn!("Duplicate entry {} stored as {}", name, candidate);
        }
        out.push(candidate);
    }

    out
}

/// Write `(name, bytes)` entries into a zip archive. PNG data is already
/// compressed, so entries are stored as is.
pub fn write_zip<'a, W, I>(writer: W, entries: I) -> Result<W>
where
    W: Write + Seek,
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::<()>::default().compression_method(zip::CompressionMethod::Stored);

    let mut count = 0usize;
    for (name, data) in entries {
        zip.start_file(name, options)?;
        zip.write_all(data)?;
        count += 1;
    }

    let writer = zip.finish()?;
    info!("Archive written with {} entries", count);
    Ok(writer)
}

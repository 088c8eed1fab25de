use crate::types::{CatalogEntry, ExtractedImages, Result, SkippedEntry};
use image::DynamicImage;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// File suffixes that are treated as catalog images
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Whether an archive entry name has a recognized image suffix
pub fn is_catalog_image(name: &str) -> bool {
    if name.ends_with('/') {
        return false;
    }
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Decode every image entry in a zip archive.
///
/// Entries are visited in lexicographic order of their full names. Entries
/// without an image suffix and directories are ignored. Entries that claim
/// to be images but fail to decode are reported in
/// [`ExtractedImages::skipped`] instead of failing the whole archive.
pub fn extract_images(archive_bytes: &[u8]) -> Result<ExtractedImages> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;

    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| is_catalog_image(name))
        .map(str::to_owned)
        .collect();
    names.sort();

    let mut extracted = ExtractedImages::default();

    for name in names {
        match read_entry(&mut archive, &name) {
            Ok(image) => {
                log::debug!(
                    "Decoded {} ({}x{})",
                    name,
                    image.width(),
                    image.height()
                );
                extracted.entries.push(CatalogEntry::new(name, image));
            }
            Err(reason) => {
                log::warn!("Skipping {}: {}", name, reason);
                extracted.skipped.push(SkippedEntry { name, reason });
            }
        }
    }

    log::info!(
        "Extracted {} image(s), skipped {}",
        extracted.len(),
        extracted.skipped_count()
    );

    Ok(extracted)
}

fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> std::result::Result<DynamicImage, String> {
    let mut file = archive.by_name(name).map_err(|e| e.to_string())?;
    if file.is_dir() {
        return Err("entry is a directory".to_string());
    }

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;

    decode_image(&bytes).map_err(|e| e.to_string())
}

/// Decode raw png/jpeg bytes into an RGBA image
pub fn decode_image(bytes: &[u8]) -> image::ImageResult<DynamicImage> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(DynamicImage::ImageRgba8(decoded.to_rgba8()))
}

//! File I/O around the catalog core
//!
//! Reading and writing happen on tokio; decoding and rendering are CPU-bound
//! and run on the blocking pool, one whole call at a time.

use crate::archive::{decode_image, extract_images};
use crate::options::CatalogRequest;
use crate::pdf::render;
use crate::types::*;
use image::DynamicImage;
use std::path::Path;

/// Read a zip file and decode its images
pub async fn load_archive(path: impl AsRef<Path>) -> Result<ExtractedImages> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    log::info!("Read {} ({} bytes)", path.display(), bytes.len());
    tokio::task::spawn_blocking(move || extract_images(&bytes)).await?
}

/// Read and decode a logo image
pub async fn load_logo(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let logo = tokio::task::spawn_blocking(move || decode_image(&bytes)).await??;
    log::info!(
        "Loaded logo {} ({}x{})",
        path.display(),
        logo.width(),
        logo.height()
    );
    Ok(logo)
}

/// Render the catalog and write it to `output_path`
pub async fn generate_catalog(
    request: CatalogRequest,
    output_path: impl AsRef<Path>,
) -> Result<CatalogDocument> {
    let output_path = output_path.as_ref().to_owned();

    let document = tokio::task::spawn_blocking(move || render(&request)).await??;

    tokio::fs::write(&output_path, &document.bytes).await?;
    log::info!(
        "Wrote {} ({} bytes)",
        output_path.display(),
        document.bytes.len()
    );

    Ok(document)
}

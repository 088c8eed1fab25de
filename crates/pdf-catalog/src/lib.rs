//! Branded PDF catalogs from a zip of images
//!
//! [`extract_images`] turns archive bytes into named images sorted by entry
//! name; [`render`] lays them out as a cover page plus one page per image.

pub mod archive;
pub mod composite;
pub mod constants;
pub mod encoding;
mod io;
pub mod layout;
mod options;
pub mod pdf;
mod types;

pub use archive::{extract_images, is_catalog_image};
pub use io::{generate_catalog, load_archive, load_logo};
pub use options::*;
pub use pdf::{render, render_catalog};
pub use types::*;

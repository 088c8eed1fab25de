use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed archive: {0}")]
    MalformedArchive(#[from] zip::result::ZipError),
    #[error("Invalid image '{name}': width and height must be non-zero")]
    InvalidImage { name: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A named image taken from the archive. Entries are laid out one per page
/// in the order they are given.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub image: DynamicImage,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// An archive entry that had an image suffix but could not be decoded
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

/// Result of reading an archive: decoded entries sorted by name, plus
/// whatever had to be left out.
#[derive(Debug, Clone, Default)]
pub struct ExtractedImages {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl ExtractedImages {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A finished catalog PDF
#[derive(Debug, Clone)]
pub struct CatalogDocument {
    pub bytes: Vec<u8>,
    /// Cover page included
    pub page_count: usize,
}

impl CatalogDocument {
    pub const MIME_TYPE: &'static str = "application/pdf";
}

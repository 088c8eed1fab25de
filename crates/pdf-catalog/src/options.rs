use crate::constants::mm_to_pt;
use crate::layout::PageGeometry;
use crate::types::*;
use chrono::NaiveDate;
use image::DynamicImage;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Portrait paper sizes the catalog can be printed on
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    #[default]
    Letter,
    Legal,
    A4,
}

impl PaperSize {
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::A4 => (210.0, 297.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::A4 => "A4",
        }
    }

    pub fn geometry(self) -> PageGeometry {
        match self {
            // Exact PostScript size; the mm round trip is off by a hair
            PaperSize::Letter => PageGeometry::new(612.0, 792.0),
            PaperSize::Legal => PageGeometry::new(612.0, 1008.0),
            PaperSize::A4 => {
                let (w, h) = self.dimensions_mm();
                PageGeometry::new(mm_to_pt(w), mm_to_pt(h))
            }
        }
    }
}

/// Text fields and output settings for a catalog
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogOptions {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    pub paper_size: PaperSize,
    pub output_file_name: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            title: "Sock Design Catalog".to_string(),
            subtitle: "Automated design-board → catalog demo".to_string(),
            footer: "Sockrates • Florida, USA • sales@sockrates.com • (xxx) xxx-xxxx"
                .to_string(),
            paper_size: PaperSize::Letter,
            output_file_name: "catalog.pdf".to_string(),
        }
    }
}

impl CatalogOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Bundle these options with the images to render
    pub fn into_request(
        self,
        logo: Option<DynamicImage>,
        entries: Vec<CatalogEntry>,
        generated_on: NaiveDate,
    ) -> CatalogRequest {
        CatalogRequest {
            logo,
            entries,
            title: self.title,
            subtitle: self.subtitle,
            footer: self.footer,
            generated_on,
            paper_size: self.paper_size,
        }
    }
}

/// Everything the renderer needs for one document
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    pub logo: Option<DynamicImage>,
    pub entries: Vec<CatalogEntry>,
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    /// Printed on the cover as `Generated: YYYY-MM-DD`
    pub generated_on: NaiveDate,
    pub paper_size: PaperSize,
}

impl CatalogRequest {
    /// Number of pages the rendered document will have
    pub fn page_count(&self) -> usize {
        self.entries.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_geometry() {
        let page = PaperSize::Letter.geometry();
        assert_eq!(page.width_pt, 612.0);
        assert_eq!(page.height_pt, 792.0);
    }

    #[test]
    fn test_a4_geometry_from_mm() {
        let page = PaperSize::A4.geometry();
        assert!((page.width_pt - 595.276).abs() < 0.01);
        assert!((page.height_pt - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_into_request_carries_text() {
        let options = CatalogOptions {
            title: "T".to_string(),
            subtitle: "S".to_string(),
            footer: "F".to_string(),
            paper_size: PaperSize::A4,
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let request = options.into_request(None, Vec::new(), date);
        assert_eq!(request.title, "T");
        assert_eq!(request.subtitle, "S");
        assert_eq!(request.footer, "F");
        assert_eq!(request.paper_size, PaperSize::A4);
        assert_eq!(request.generated_on, date);
        assert_eq!(request.page_count(), 1);
        assert!(request.logo.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options: CatalogOptions =
            serde_json::from_str(r#"{ "title": "Spring Line", "paper_size": "A4" }"#).unwrap();
        assert_eq!(options.title, "Spring Line");
        assert_eq!(options.paper_size, PaperSize::A4);
        assert_eq!(options.footer, CatalogOptions::default().footer);
        assert_eq!(options.output_file_name, "catalog.pdf");
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let options = CatalogOptions {
            title: "Winter".to_string(),
            paper_size: PaperSize::Legal,
            ..Default::default()
        };
        options.save(&path).await.unwrap();

        let loaded = CatalogOptions::load(&path).await.unwrap();
        assert_eq!(loaded, options);
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn test_bad_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = CatalogOptions::load(&path).await.unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}

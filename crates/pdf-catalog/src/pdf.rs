//! Catalog rendering
//!
//! Builds the whole document in memory: a cover page followed by one page
//! per entry, in entry order. printpdf lays out the pages; text runs are then
//! re-encoded through lopdf so the builtin fonts see WinAnsi bytes.

use crate::composite::to_raw_image;
use crate::constants::*;
use crate::encoding::to_win_ansi;
use crate::layout::{PageGeometry, Rect, fit_centered};
use crate::options::{CatalogRequest, PaperSize};
use crate::types::{CatalogDocument, CatalogEntry, CatalogError, Result};
use chrono::NaiveDate;
use image::DynamicImage;
use lopdf::{Document, Object, ObjectId};
use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt,
    Rgb, TextItem, XObjectId, XObjectTransform,
};

/// Name used in errors for a degenerate logo
pub const LOGO_NAME: &str = "logo";

/// Render a catalog request to PDF bytes.
pub fn render(request: &CatalogRequest) -> Result<CatalogDocument> {
    CatalogSource {
        logo: request.logo.as_ref(),
        entries: &request.entries,
        title: &request.title,
        subtitle: &request.subtitle,
        footer: &request.footer,
        generated_on: request.generated_on,
        paper_size: request.paper_size,
    }
    .render()
}

/// Render a Letter-sized catalog from borrowed parts.
pub fn render_catalog(
    logo: Option<&DynamicImage>,
    entries: &[CatalogEntry],
    title: &str,
    subtitle: &str,
    footer: &str,
    generated_on: NaiveDate,
) -> Result<CatalogDocument> {
    CatalogSource {
        logo,
        entries,
        title,
        subtitle,
        footer,
        generated_on,
        paper_size: PaperSize::Letter,
    }
    .render()
}

struct CatalogSource<'a> {
    logo: Option<&'a DynamicImage>,
    entries: &'a [CatalogEntry],
    title: &'a str,
    subtitle: &'a str,
    footer: &'a str,
    generated_on: NaiveDate,
    paper_size: PaperSize,
}

/// An image already added to the document
struct Embedded {
    id: XObjectId,
    width_px: usize,
    height_px: usize,
}

impl CatalogSource<'_> {
    fn render(&self) -> Result<CatalogDocument> {
        self.validate()?;

        let page = self.paper_size.geometry();
        let mut doc = PdfDocument::new(self.title);

        let logo = self.logo.map(|logo| embed(&mut doc, logo));

        let mut pages = Vec::with_capacity(self.entries.len() + 1);
        pages.push(self.cover_page(&page, logo.as_ref()));

        for (index, entry) in self.entries.iter().enumerate() {
            log::debug!("Laying out page {} for {}", index + 2, entry.name);
            let image = embed(&mut doc, &entry.image);
            pages.push(self.entry_page(&page, index + 1, entry, &image, logo.as_ref())?);
        }

        let page_count = pages.len();
        doc.pages = pages;

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }
        let bytes = encode_text_runs(&bytes)?;

        log::info!(
            "Rendered catalog '{}' with {} page(s) on {} paper",
            self.title,
            page_count,
            self.paper_size.name()
        );

        Ok(CatalogDocument { bytes, page_count })
    }

    /// Fail before building anything if an image cannot be laid out
    fn validate(&self) -> Result<()> {
        if let Some(logo) = self.logo {
            check_dimensions(LOGO_NAME, logo)?;
        }
        for entry in self.entries {
            check_dimensions(&entry.name, &entry.image)?;
        }
        Ok(())
    }

    fn cover_page(&self, page: &PageGeometry, logo: Option<&Embedded>) -> PdfPage {
        let mut ops = Vec::new();
        let left = inch(TEXT_LEFT_IN);

        push_text(
            &mut ops,
            self.title,
            BuiltinFont::HelveticaBold,
            TITLE_FONT_SIZE,
            left,
            page.from_top(TITLE_FROM_TOP_IN),
        );
        push_text(
            &mut ops,
            self.subtitle,
            BuiltinFont::Helvetica,
            SUBTITLE_FONT_SIZE,
            left,
            page.from_top(SUBTITLE_FROM_TOP_IN),
        );
        push_text(
            &mut ops,
            &generated_line(self.generated_on),
            BuiltinFont::Helvetica,
            GENERATED_FONT_SIZE,
            left,
            page.from_top(GENERATED_FROM_TOP_IN),
        );

        if let Some(logo) = logo {
            ops.push(place_image(logo, &page.logo_rect(COVER_LOGO_SIZE_IN)));
        }

        let (start, end) = page.cover_rule();
        push_rule(&mut ops, start, end);

        self.push_footer(&mut ops);
        new_page(page, ops)
    }

    fn entry_page(
        &self,
        page: &PageGeometry,
        number: usize,
        entry: &CatalogEntry,
        image: &Embedded,
        logo: Option<&Embedded>,
    ) -> Result<PdfPage> {
        let mut ops = Vec::new();
        let left = inch(TEXT_LEFT_IN);

        push_text(
            &mut ops,
            &design_label(number),
            BuiltinFont::HelveticaBold,
            HEADER_FONT_SIZE,
            left,
            page.from_top(HEADER_FROM_TOP_IN),
        );
        push_text(
            &mut ops,
            &format!("Source: {}", entry.name),
            BuiltinFont::Helvetica,
            SOURCE_FONT_SIZE,
            left,
            page.from_top(SOURCE_FROM_TOP_IN),
        );

        if let Some(logo) = logo {
            ops.push(place_image(logo, &page.logo_rect(PAGE_LOGO_SIZE_IN)));
        }

        let placed = fit_centered(
            image.width_px as f32,
            image.height_px as f32,
            &page.content_box(),
        )
        .ok_or_else(|| CatalogError::InvalidImage {
            name: entry.name.clone(),
        })?;
        ops.push(place_image(image, &placed));

        self.push_footer(&mut ops);
        Ok(new_page(page, ops))
    }

    fn push_footer(&self, ops: &mut Vec<Op>) {
        push_text(
            ops,
            self.footer,
            BuiltinFont::Helvetica,
            FOOTER_FONT_SIZE,
            inch(TEXT_LEFT_IN),
            inch(FOOTER_FROM_BOTTOM_IN),
        );
    }
}

/// Header text for the `number`th entry page (1-based)
pub fn design_label(number: usize) -> String {
    format!("Design {:02}", number)
}

/// Cover line showing when the catalog was produced
pub fn generated_line(date: NaiveDate) -> String {
    format!("Generated: {}", date.format("%Y-%m-%d"))
}

fn check_dimensions(name: &str, image: &DynamicImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(CatalogError::InvalidImage {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn embed(doc: &mut PdfDocument, image: &DynamicImage) -> Embedded {
    let raw = to_raw_image(image);
    let (width_px, height_px) = (raw.width, raw.height);
    Embedded {
        id: doc.add_image(&raw),
        width_px,
        height_px,
    }
}

/// Draw an embedded image stretched to `rect`
fn place_image(image: &Embedded, rect: &Rect) -> Op {
    // At IMAGE_DPI one pixel is one point, so scale is points per pixel
    Op::UseXobject {
        id: image.id.clone(),
        transform: XObjectTransform {
            translate_x: Some(Pt(rect.x)),
            translate_y: Some(Pt(rect.y)),
            scale_x: Some(rect.width / image.width_px as f32),
            scale_y: Some(rect.height / image.height_px as f32),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    }
}

fn push_text(ops: &mut Vec<Op>, text: &str, font: BuiltinFont, size: f32, x: f32, y: f32) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font,
        size: Pt(size),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font,
    });
    ops.push(Op::EndTextSection);
}

fn push_rule(ops: &mut Vec<Op>, start: (f32, f32), end: (f32, f32)) {
    ops.push(Op::SetOutlineColor {
        col: Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
    });
    ops.push(Op::SetOutlineThickness {
        pt: Pt(RULE_WIDTH_PT),
    });
    ops.push(Op::DrawLine {
        line: Line {
            points: vec![
                LinePoint {
                    p: Point {
                        x: Pt(start.0),
                        y: Pt(start.1),
                    },
                    bezier: false,
                },
                LinePoint {
                    p: Point {
                        x: Pt(end.0),
                        y: Pt(end.1),
                    },
                    bezier: false,
                },
            ],
            is_closed: false,
        },
    });
}

/// Rewrite every `Tj`/`TJ` string as WinAnsi bytes.
///
/// printpdf writes builtin-font text as raw UTF-8 while declaring
/// `/WinAnsiEncoding`, which garbles anything outside ASCII.
fn encode_text_runs(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut doc = Document::load_mem(bytes)?;
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();

    for page_id in page_ids {
        let mut content = doc.get_and_decode_page_content(page_id)?;
        let mut changed = false;
        for op in &mut content.operations {
            if op.operator == "Tj" || op.operator == "TJ" {
                for operand in &mut op.operands {
                    changed |= reencode_string(operand);
                }
            }
        }
        if changed {
            doc.change_page_content(page_id, content.encode()?)?;
        }
    }

    doc.compress();
    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

fn reencode_string(operand: &mut Object) -> bool {
    match operand {
        Object::String(bytes, _) => {
            let encoded = match std::str::from_utf8(bytes) {
                Ok(text) if !text.is_ascii() => to_win_ansi(text),
                _ => return false,
            };
            *bytes = encoded;
            true
        }
        Object::Array(items) => items
            .iter_mut()
            .fold(false, |changed, item| reencode_string(item) || changed),
        _ => false,
    }
}

fn new_page(page: &PageGeometry, ops: Vec<Op>) -> PdfPage {
    PdfPage::new(
        Mm::from(Pt(page.width_pt)),
        Mm::from(Pt(page.height_pt)),
        ops,
    )
}

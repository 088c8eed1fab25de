//! Fixtures shared by the integration tests
#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::content::Content;
use lopdf::{Document, Object};
use pdf_catalog::encoding::from_win_ansi;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Opaque RGB image of the given size
pub fn opaque(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 40, 40])))
}

/// RGBA image whose left half is fully transparent
pub fn transparent(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([20, 90, 200, 255]));
    for y in 0..height {
        for x in 0..width / 2 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }
    DynamicImage::ImageRgba8(img)
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

pub fn png(image: &DynamicImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}

pub fn jpeg(image: &DynamicImage) -> Vec<u8> {
    encode(&DynamicImage::ImageRgb8(image.to_rgb8()), ImageFormat::Jpeg)
}

/// Build a zip archive in memory. Names ending in `/` become directories.
pub fn zip_archive(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, contents) in files {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// A text run and the `Td` origin it was drawn at
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub raw: Vec<u8>,
    pub x: f32,
    pub y: f32,
}

/// Where an image was painted: the unit square mapped through the CTM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRun {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// What a rendered page draws, read back from the PDF
#[derive(Debug, Clone, PartialEq)]
pub struct PageSummary {
    pub texts: Vec<TextRun>,
    pub images: Vec<ImageRun>,
    pub lines_stroked: usize,
}

impl PageSummary {
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text == needle)
    }

    pub fn text(&self, needle: &str) -> &TextRun {
        self.texts
            .iter()
            .find(|t| t.text == needle)
            .unwrap_or_else(|| panic!("no text run {needle:?} in {:?}", self.texts))
    }
}

pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.05
}

pub fn assert_at(run: &TextRun, x: f32, y: f32) {
    assert!(
        approx(run.x, x) && approx(run.y, y),
        "{:?} drawn at ({}, {}), expected ({x}, {y})",
        run.text,
        run.x,
        run.y
    );
}

pub fn assert_image(run: &ImageRun, x: f32, y: f32, width: f32, height: f32) {
    assert!(
        approx(run.x, x) && approx(run.y, y) && approx(run.width, width) && approx(run.height, height),
        "image at {run:?}, expected ({x}, {y}) {width}x{height}"
    );
}

type Matrix = [f32; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// `m` concatenated onto `ctm`, as the `cm` operator does
fn concat(m: &Matrix, ctm: &Matrix) -> Matrix {
    [
        m[0] * ctm[0] + m[1] * ctm[2],
        m[0] * ctm[1] + m[1] * ctm[3],
        m[2] * ctm[0] + m[3] * ctm[2],
        m[2] * ctm[1] + m[3] * ctm[3],
        m[4] * ctm[0] + m[5] * ctm[2] + ctm[4],
        m[4] * ctm[1] + m[5] * ctm[3] + ctm[5],
    ]
}

fn number(object: &Object) -> f32 {
    match object {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r as f32,
        other => panic!("expected a number, got {other:?}"),
    }
}

/// Parse PDF bytes and summarize every page in order
pub fn summarize(bytes: &[u8]) -> Vec<PageSummary> {
    let doc = Document::load_mem(bytes).expect("rendered PDF should parse");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content: Content = doc
                .get_and_decode_page_content(page_id)
                .expect("page content should decode");
            let mut summary = PageSummary {
                texts: Vec::new(),
                images: Vec::new(),
                lines_stroked: 0,
            };
            let mut ctm = IDENTITY;
            let mut saved = Vec::new();
            let mut origin = (0.0, 0.0);
            for op in &content.operations {
                match op.operator.as_str() {
                    "q" => saved.push(ctm),
                    "Q" => ctm = saved.pop().unwrap_or(IDENTITY),
                    "cm" => {
                        let m: Vec<f32> = op.operands.iter().map(number).collect();
                        ctm = concat(&[m[0], m[1], m[2], m[3], m[4], m[5]], &ctm);
                    }
                    "BT" => origin = (0.0, 0.0),
                    "Td" => {
                        origin = (
                            origin.0 + number(&op.operands[0]),
                            origin.1 + number(&op.operands[1]),
                        );
                    }
                    "Tm" => origin = (number(&op.operands[4]), number(&op.operands[5])),
                    "Tj" | "TJ" => {
                        let raw = raw_text(&op.operands);
                        summary.texts.push(TextRun {
                            text: from_win_ansi(&raw),
                            raw,
                            x: origin.0,
                            y: origin.1,
                        });
                    }
                    "Do" => summary.images.push(ImageRun {
                        x: ctm[4],
                        y: ctm[5],
                        width: ctm[0],
                        height: ctm[3],
                    }),
                    "S" => summary.lines_stroked += 1,
                    _ => {}
                }
            }
            summary
        })
        .collect()
}

fn raw_text(operands: &[Object]) -> Vec<u8> {
    let mut out = Vec::new();
    for operand in operands {
        match operand {
            Object::String(bytes, _) => out.extend_from_slice(bytes),
            Object::Array(items) => out.extend(raw_text(items)),
            _ => {}
        }
    }
    out
}

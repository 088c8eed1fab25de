//! Flattening images for embedding
//!
//! The catalog never embeds transparency: anything with an alpha channel is
//! blended onto opaque white first.

use image::{DynamicImage, Rgb, RgbImage};
use printpdf::{RawImage, RawImageData, RawImageFormat};

/// Produce an opaque RGB copy of `image`.
pub fn flatten_on_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        *dst = Rgb([blend(r, a), blend(g, a), blend(b, a)]);
    }
    out
}

/// Alpha-blend one channel against white
#[inline]
fn blend(channel: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    let value = channel as u32 * alpha + 255 * (255 - alpha);
    ((value + 127) / 255) as u8
}

/// Flatten `image` and wrap it as a printpdf raster.
pub fn to_raw_image(image: &DynamicImage) -> RawImage {
    let rgb = flatten_on_white(image);
    let (width, height) = rgb.dimensions();
    RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    }
}

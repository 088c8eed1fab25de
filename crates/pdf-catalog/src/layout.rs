//! Page geometry for the catalog
//!
//! All rectangles are in points with the origin at the bottom-left corner of
//! the page, matching PDF user space.

use crate::constants::*;

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside this rectangle, allowing for
    /// floating point error.
    pub fn contains(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.top() <= self.top() + EPSILON
    }
}

/// Fixed layout of a catalog page of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageGeometry {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }

    /// Baseline `inches` below the top edge
    pub fn from_top(&self, inches: f32) -> f32 {
        self.height_pt - inch(inches)
    }

    /// Region reserved for the fitted image on an entry page
    pub fn content_box(&self) -> Rect {
        Rect::new(
            inch(CONTENT_SIDE_MARGIN_IN),
            inch(CONTENT_BOTTOM_IN),
            self.width_pt - 2.0 * inch(CONTENT_SIDE_MARGIN_IN),
            self.height_pt - inch(CONTENT_VERTICAL_RESERVE_IN),
        )
    }

    /// Top-right logo slot of `size_in` (width, height) inches
    pub fn logo_rect(&self, size_in: (f32, f32)) -> Rect {
        let width = inch(size_in.0);
        let height = inch(size_in.1);
        Rect::new(
            self.width_pt - width - inch(LOGO_RIGHT_MARGIN_IN),
            self.height_pt - height - inch(LOGO_TOP_MARGIN_IN),
            width,
            height,
        )
    }

    /// End points of the horizontal rule under the cover text
    pub fn cover_rule(&self) -> ((f32, f32), (f32, f32)) {
        let y = self.from_top(RULE_FROM_TOP_IN);
        (
            (inch(RULE_SIDE_MARGIN_IN), y),
            (self.width_pt - inch(RULE_SIDE_MARGIN_IN), y),
        )
    }
}

/// Largest uniform scale that fits `src` inside `target` without distortion.
///
/// Returns `None` when either source dimension is zero.
pub fn fit_scale(
    src_width: f32,
    src_height: f32,
    target_width: f32,
    target_height: f32,
) -> Option<f32> {
    if src_width <= 0.0 || src_height <= 0.0 {
        return None;
    }
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    Some(scale_w.min(scale_h))
}

/// Scale `src` to fit inside `target` and center it on both axes.
pub fn fit_centered(src_width: f32, src_height: f32, target: &Rect) -> Option<Rect> {
    let scale = fit_scale(src_width, src_height, target.width, target.height)?;
    let width = src_width * scale;
    let height = src_height * scale;
    Some(Rect::new(
        target.x + (target.width - width) / 2.0,
        target.y + (target.height - height) / 2.0,
        width,
        height,
    ))
}

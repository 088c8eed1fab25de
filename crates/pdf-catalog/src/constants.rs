//! Shared constants for catalog layout
//!
//! Every position on the page is expressed in inches from the page edges and
//! converted to points once, so other paper sizes keep the same margins.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = POINTS_PER_INCH / 25.4;

/// Convert inches to points
#[inline]
pub fn inch(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Text
// =============================================================================

/// Left edge of every text line (inches)
pub const TEXT_LEFT_IN: f32 = 1.0;

pub const TITLE_FONT_SIZE: f32 = 26.0;
pub const SUBTITLE_FONT_SIZE: f32 = 14.0;
pub const GENERATED_FONT_SIZE: f32 = 11.0;
pub const HEADER_FONT_SIZE: f32 = 18.0;
pub const SOURCE_FONT_SIZE: f32 = 10.0;
pub const FOOTER_FONT_SIZE: f32 = 10.0;

/// Baselines measured down from the top edge (inches)
pub const TITLE_FROM_TOP_IN: f32 = 1.4;
pub const SUBTITLE_FROM_TOP_IN: f32 = 1.8;
pub const GENERATED_FROM_TOP_IN: f32 = 2.2;
pub const HEADER_FROM_TOP_IN: f32 = 1.0;
pub const SOURCE_FROM_TOP_IN: f32 = 1.25;

/// Footer baseline measured up from the bottom edge (inches)
pub const FOOTER_FROM_BOTTOM_IN: f32 = 0.8;

// =============================================================================
// Cover Rule
// =============================================================================

pub const RULE_FROM_TOP_IN: f32 = 2.5;
pub const RULE_SIDE_MARGIN_IN: f32 = 1.0;
pub const RULE_WIDTH_PT: f32 = 1.0;

// =============================================================================
// Logo
// =============================================================================

pub const COVER_LOGO_SIZE_IN: (f32, f32) = (1.6, 1.0);
pub const PAGE_LOGO_SIZE_IN: (f32, f32) = (1.2, 0.75);
pub const LOGO_RIGHT_MARGIN_IN: f32 = 0.8;
pub const LOGO_TOP_MARGIN_IN: f32 = 0.9;

// =============================================================================
// Content Box
// =============================================================================

/// Left and right margin around the fitted image (inches)
pub const CONTENT_SIDE_MARGIN_IN: f32 = 1.0;

/// Bottom edge of the content box (inches)
pub const CONTENT_BOTTOM_IN: f32 = 1.2;

/// Total vertical space not given to the content box (inches)
pub const CONTENT_VERTICAL_RESERVE_IN: f32 = 3.0;

// =============================================================================
// Embedded Images
// =============================================================================

/// One image pixel maps to one point at scale 1.0
pub const IMAGE_DPI: f32 = 72.0;

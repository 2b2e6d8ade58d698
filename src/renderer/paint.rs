//! Paint specification for the chrome background
//!
//! The visible chrome is a single filled rounded rectangle drawn on a
//! transparent surface. Deriving the rectangle from a [`BorderStyle`]
//! and a surface size is pure geometry, kept separate from the GPU
//! path so it can be tested without a device.

use crate::window::{BorderStyle, Color};

/// A filled rounded rectangle in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// Left edge, in pixels from the surface left.
    pub x: f32,
    /// Top edge, in pixels from the surface top.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Corner radius, already clamped to fit the rectangle.
    pub radius: f32,
    pub fill: Color,
}

/// Derive the paint rectangle for `style` on a `width` x `height` surface.
///
/// The rectangle is inset by half the border thickness on every side so
/// the stroke centerline sits fully inside the surface, matching how a
/// cosmetic pen of that width would land. The corner radius is clamped
/// so opposite corners never overlap.
pub fn rounded_rect_spec(
    style: &BorderStyle,
    width: u32,
    height: u32,
    fallback: Color,
) -> RoundedRect {
    let inset = style.thickness() as f32 / 2.0;
    let w = (width as f32 - 2.0 * inset).max(0.0);
    let h = (height as f32 - 2.0 * inset).max(0.0);
    let radius = (style.radius() as f32).min(w / 2.0).min(h / 2.0);

    RoundedRect {
        x: inset,
        y: inset,
        width: w,
        height: h,
        radius,
        fill: style.fill(fallback),
    }
}

//! Border hit-testing for frameless windows
//!
//! Classifies a cursor position against the window's resize borders.
//! The result is a small flag set over the four edges; corners are
//! unions of two adjacent edges. Classification is a pure function of
//! position, size, and border thickness, recomputed per pointer event.

use bitflags::bitflags;
use winit::window::{CursorIcon, ResizeDirection};

bitflags! {
    /// Edge or corner of the window under the cursor.
    ///
    /// An empty set means the position is in the window's interior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BorderFlags: u8 {
        const LEFT   = 0b0001;
        const RIGHT  = 0b0010;
        const TOP    = 0b0100;
        const BOTTOM = 0b1000;
    }
}

impl BorderFlags {
    pub const TOP_LEFT: Self = Self::TOP.union(Self::LEFT);
    pub const TOP_RIGHT: Self = Self::TOP.union(Self::RIGHT);
    pub const BOTTOM_LEFT: Self = Self::BOTTOM.union(Self::LEFT);
    pub const BOTTOM_RIGHT: Self = Self::BOTTOM.union(Self::RIGHT);

    /// Cursor shape to show while hovering this border.
    ///
    /// Two of the corners share each diagonal double-arrow shape.
    pub fn cursor_icon(self) -> CursorIcon {
        if self == Self::TOP || self == Self::BOTTOM {
            CursorIcon::NsResize
        } else if self == Self::LEFT || self == Self::RIGHT {
            CursorIcon::EwResize
        } else if self == Self::TOP_LEFT || self == Self::BOTTOM_RIGHT {
            CursorIcon::NwseResize
        } else if self == Self::TOP_RIGHT || self == Self::BOTTOM_LEFT {
            CursorIcon::NeswResize
        } else {
            CursorIcon::Default
        }
    }

    /// Direction for the platform's native interactive resize.
    pub fn resize_direction(self) -> Option<ResizeDirection> {
        if self == Self::TOP {
            Some(ResizeDirection::North)
        } else if self == Self::BOTTOM {
            Some(ResizeDirection::South)
        } else if self == Self::LEFT {
            Some(ResizeDirection::West)
        } else if self == Self::RIGHT {
            Some(ResizeDirection::East)
        } else if self == Self::TOP_LEFT {
            Some(ResizeDirection::NorthWest)
        } else if self == Self::TOP_RIGHT {
            Some(ResizeDirection::NorthEast)
        } else if self == Self::BOTTOM_LEFT {
            Some(ResizeDirection::SouthWest)
        } else if self == Self::BOTTOM_RIGHT {
            Some(ResizeDirection::SouthEast)
        } else {
            None
        }
    }
}

/// Classify a widget-local position against the resize borders.
///
/// `x <= thickness` selects LEFT, otherwise `x >= width - thickness`
/// selects RIGHT; positions beyond the widget still count as the far
/// edge to tolerate slightly-late pointer events. Symmetric for the
/// y-axis, and the two axes combine into corners. Thickness must be
/// at least 1 or the whole widget degenerately classifies as border;
/// callers enforce this via [`BorderStyle::MIN_THICKNESS`].
///
/// [`BorderStyle::MIN_THICKNESS`]: super::style::BorderStyle::MIN_THICKNESS
pub fn classify(x: f64, y: f64, width: f64, height: f64, thickness: f64) -> BorderFlags {
    let mut border = BorderFlags::empty();

    if x <= thickness {
        border |= BorderFlags::LEFT;
    } else if x >= width - thickness {
        border |= BorderFlags::RIGHT;
    }

    if y <= thickness {
        border |= BorderFlags::TOP;
    } else if y >= height - thickness {
        border |= BorderFlags::BOTTOM;
    }

    border
}

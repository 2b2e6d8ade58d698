//! Frameless window chrome for lyricpane
//!
//! This module implements everything the OS-native title bar would
//! otherwise provide: border hit-testing, interactive resize with a
//! native-gesture fast path and a manual fallback, interactive move,
//! and the rounded border style the paint surface draws. The pieces
//! are composed by [`chrome::WindowChrome`] and reach the underlying
//! window only through the narrow [`ChromeSurface`] capability trait.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::{CursorIcon, ResizeDirection, Window as WinitWindow};

pub mod border;
pub mod chrome;
pub mod drag;
pub mod resize;
pub mod style;

pub use border::{classify, BorderFlags};
pub use chrome::WindowChrome;
pub use style::{BorderStyle, Color};

/// Window geometry in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Capabilities the chrome needs from its embedding window.
///
/// The controllers never talk to the window system directly; they read
/// and mutate geometry, request cursor shapes, and ask for native
/// move/resize gestures through this trait. Native gestures may be
/// unsupported on a platform, in which case `begin_system_*` returns
/// false and the manual paths take over.
pub trait ChromeSurface {
    /// Current window geometry in screen coordinates.
    fn rect(&self) -> WindowRect;

    /// Apply new window geometry immediately.
    fn set_rect(&self, rect: WindowRect);

    /// Request a cursor shape.
    fn set_cursor(&self, icon: CursorIcon);

    /// Ask the OS to run an interactive move for the current press.
    fn begin_system_move(&self) -> bool;

    /// Ask the OS to run an interactive resize for the current press.
    fn begin_system_resize(&self, direction: ResizeDirection) -> bool;
}

impl ChromeSurface for WinitWindow {
    fn rect(&self) -> WindowRect {
        let position = self.outer_position().unwrap_or_default();
        let size = self.inner_size();
        WindowRect::new(position.x, position.y, size.width, size.height)
    }

    fn set_rect(&self, rect: WindowRect) {
        self.set_outer_position(PhysicalPosition::new(rect.x, rect.y));
        let _ = self.request_inner_size(PhysicalSize::new(rect.width, rect.height));
    }

    fn set_cursor(&self, icon: CursorIcon) {
        self.set_cursor(icon);
    }

    fn begin_system_move(&self) -> bool {
        self.drag_window().is_ok()
    }

    fn begin_system_resize(&self, direction: ResizeDirection) -> bool {
        self.drag_resize_window(direction).is_ok()
    }
}

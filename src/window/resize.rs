//! Resize controller for the frameless chrome
//!
//! Tracks the press/drag/release gesture against the resize borders.
//! A press on a border first asks the OS for a native interactive
//! resize; when that is unsupported or declined the controller falls
//! back to recomputing the window rectangle itself on every move.

use crate::window::border::BorderFlags;
use crate::window::{ChromeSurface, WindowRect};
use winit::window::CursorIcon;

/// Gesture state of the resize controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeState {
    /// No border under the cursor, no gesture in flight.
    Idle,
    /// Cursor is over a border; the matching resize cursor is shown.
    Hovering(BorderFlags),
    /// A press claimed this border. `native` means the OS accepted the
    /// interactive resize and the controller must not also recompute
    /// geometry for this gesture.
    Dragging { border: BorderFlags, native: bool },
}

/// Handler for window edge/corner resizing.
pub struct ResizeController {
    state: ResizeState,
    enabled: bool,
}

impl ResizeController {
    pub fn new() -> Self {
        Self {
            state: ResizeState::Idle,
            enabled: true,
        }
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ResizeState::Dragging { .. })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable border resizing. Disabling cancels any gesture.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = ResizeState::Idle;
        }
    }

    /// Primary-button press with `border` already classified.
    ///
    /// Returns true when the press claimed a resize gesture; the caller
    /// must then suppress the move claim for this same press.
    pub fn on_pointer_down(&mut self, border: BorderFlags, surface: &dyn ChromeSurface) -> bool {
        if !self.enabled || border.is_empty() {
            return false;
        }

        let native = border
            .resize_direction()
            .is_some_and(|direction| surface.begin_system_resize(direction));

        if native {
            log::debug!("native resize accepted for {:?}", border);
        }

        self.state = ResizeState::Dragging { border, native };
        true
    }

    /// Pointer move. `border` is the reclassification under the cursor,
    /// `global` the cursor position in screen coordinates.
    ///
    /// Returns true when the move belonged to an active drag.
    pub fn on_pointer_move(
        &mut self,
        border: BorderFlags,
        global: (f64, f64),
        surface: &dyn ChromeSurface,
    ) -> bool {
        match self.state {
            ResizeState::Dragging {
                border: offending,
                native,
            } => {
                // The OS owns a native gesture; avoid double-processing.
                if !native {
                    surface.set_rect(resize_rect(surface.rect(), offending, global));
                }
                true
            }
            ResizeState::Idle | ResizeState::Hovering(_) => {
                if !self.enabled || border.is_empty() {
                    // Unconditional: a drag that just ended may have left
                    // a resize cursor behind.
                    surface.set_cursor(CursorIcon::Default);
                    self.state = ResizeState::Idle;
                    false
                } else {
                    self.state = ResizeState::Hovering(border);
                    surface.set_cursor(border.cursor_icon());
                    true
                }
            }
        }
    }

    /// Primary-button release: the gesture ends, whatever state it was in.
    pub fn on_pointer_up(&mut self) {
        self.state = ResizeState::Idle;
    }

    /// Window (re)activation. A native drag can steal the release event,
    /// so any in-flight gesture is force-cancelled here.
    pub fn on_window_activated(&mut self) {
        if self.is_dragging() {
            self.state = ResizeState::Idle;
        }
    }
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Recompute the window rectangle for a manual drag.
///
/// Each edge named by `border` snaps to the cursor's global coordinate
/// on its axis; the opposite edges stay fixed. Width and height are
/// clamped to >= 0.
fn resize_rect(rect: WindowRect, border: BorderFlags, global: (f64, f64)) -> WindowRect {
    let (mut x1, mut y1) = (rect.x as f64, rect.y as f64);
    let (mut x2, mut y2) = (x1 + rect.width as f64, y1 + rect.height as f64);

    if border.contains(BorderFlags::TOP) {
        y1 = global.1;
    } else if border.contains(BorderFlags::BOTTOM) {
        y2 = global.1;
    }

    if border.contains(BorderFlags::LEFT) {
        x1 = global.0;
    } else if border.contains(BorderFlags::RIGHT) {
        x2 = global.0;
    }

    WindowRect::new(
        x1 as i32,
        y1 as i32,
        (x2 - x1).max(0.0) as u32,
        (y2 - y1).max(0.0) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Surface stub with scriptable native-gesture support.
    struct TestSurface {
        rect: Cell<WindowRect>,
        native_resize: bool,
        cursor: Cell<CursorIcon>,
        resize_requests: RefCell<Vec<winit::window::ResizeDirection>>,
    }

    impl TestSurface {
        fn new(rect: WindowRect, native_resize: bool) -> Self {
            Self {
                rect: Cell::new(rect),
                native_resize,
                cursor: Cell::new(CursorIcon::Default),
                resize_requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChromeSurface for TestSurface {
        fn rect(&self) -> WindowRect {
            self.rect.get()
        }

        fn set_rect(&self, rect: WindowRect) {
            self.rect.set(rect);
        }

        fn set_cursor(&self, icon: CursorIcon) {
            self.cursor.set(icon);
        }

        fn begin_system_move(&self) -> bool {
            false
        }

        fn begin_system_resize(&self, direction: winit::window::ResizeDirection) -> bool {
            self.resize_requests.borrow_mut().push(direction);
            self.native_resize
        }
    }

    const ALL_BORDERS: [BorderFlags; 8] = [
        BorderFlags::LEFT,
        BorderFlags::RIGHT,
        BorderFlags::TOP,
        BorderFlags::BOTTOM,
        BorderFlags::TOP_LEFT,
        BorderFlags::TOP_RIGHT,
        BorderFlags::BOTTOM_LEFT,
        BorderFlags::BOTTOM_RIGHT,
    ];

    fn start_rect() -> WindowRect {
        WindowRect::new(100, 100, 400, 180)
    }

    #[test]
    fn test_press_on_border_claims_gesture() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        assert!(controller.on_pointer_down(BorderFlags::LEFT, &surface));
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_press_in_interior_does_not_claim() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        assert!(!controller.on_pointer_down(BorderFlags::empty(), &surface));
        assert_eq!(controller.state(), ResizeState::Idle);
    }

    #[test]
    fn test_manual_drag_bottom_right_corner() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_down(BorderFlags::BOTTOM_RIGHT, &surface);
        controller.on_pointer_move(BorderFlags::BOTTOM_RIGHT, (520.0, 300.0), &surface);

        assert_eq!(surface.rect(), WindowRect::new(100, 100, 420, 200));
    }

    #[test]
    fn test_manual_drag_left_edge_moves_origin() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_down(BorderFlags::LEFT, &surface);
        controller.on_pointer_move(BorderFlags::LEFT, (80.0, 500.0), &surface);

        // x snaps to the cursor, width grows, y/height untouched.
        assert_eq!(surface.rect(), WindowRect::new(80, 100, 420, 180));
    }

    #[test]
    fn test_manual_drag_clamps_negative_size() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_down(BorderFlags::RIGHT, &surface);
        controller.on_pointer_move(BorderFlags::RIGHT, (50.0, 90.0), &surface);

        assert_eq!(surface.rect().width, 0);
    }

    #[test]
    fn test_native_accept_suppresses_manual_geometry() {
        let surface = TestSurface::new(start_rect(), true);
        let mut controller = ResizeController::new();

        assert!(controller.on_pointer_down(BorderFlags::BOTTOM_RIGHT, &surface));
        assert_eq!(surface.resize_requests.borrow().len(), 1);

        controller.on_pointer_move(BorderFlags::BOTTOM_RIGHT, (520.0, 300.0), &surface);
        assert_eq!(surface.rect(), start_rect());
    }

    #[test]
    fn test_native_decline_falls_back_to_manual() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_down(BorderFlags::BOTTOM, &surface);
        assert_eq!(surface.resize_requests.borrow().len(), 1);

        controller.on_pointer_move(BorderFlags::BOTTOM, (0.0, 300.0), &surface);
        assert_eq!(surface.rect(), WindowRect::new(100, 100, 400, 200));
    }

    #[test]
    fn test_release_returns_to_idle_for_every_border() {
        for border in ALL_BORDERS {
            let surface = TestSurface::new(start_rect(), false);
            let mut controller = ResizeController::new();

            controller.on_pointer_down(border, &surface);
            assert!(controller.is_dragging(), "{:?}", border);

            controller.on_pointer_up();
            assert_eq!(controller.state(), ResizeState::Idle, "{:?}", border);
        }
    }

    #[test]
    fn test_activation_cancels_stuck_drag() {
        for border in ALL_BORDERS {
            let surface = TestSurface::new(start_rect(), true);
            let mut controller = ResizeController::new();

            controller.on_pointer_down(border, &surface);
            controller.on_window_activated();
            assert_eq!(controller.state(), ResizeState::Idle, "{:?}", border);
        }
    }

    #[test]
    fn test_cursor_resets_on_first_interior_move_after_drag() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_move(BorderFlags::RIGHT, (498.0, 190.0), &surface);
        assert_eq!(surface.cursor.get(), CursorIcon::EwResize);

        controller.on_pointer_down(BorderFlags::RIGHT, &surface);
        controller.on_pointer_move(BorderFlags::RIGHT, (520.0, 190.0), &surface);
        controller.on_pointer_up();

        // Release goes Dragging -> Idle without passing through Hovering;
        // the next interior move must still clear the resize cursor.
        controller.on_pointer_move(BorderFlags::empty(), (300.0, 190.0), &surface);
        assert_eq!(surface.cursor.get(), CursorIcon::Default);
    }

    #[test]
    fn test_hover_updates_cursor() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_move(BorderFlags::TOP_LEFT, (102.0, 102.0), &surface);
        assert_eq!(controller.state(), ResizeState::Hovering(BorderFlags::TOP_LEFT));
        assert_eq!(surface.cursor.get(), CursorIcon::NwseResize);

        controller.on_pointer_move(BorderFlags::empty(), (300.0, 200.0), &surface);
        assert_eq!(controller.state(), ResizeState::Idle);
        assert_eq!(surface.cursor.get(), CursorIcon::Default);
    }

    #[test]
    fn test_move_without_press_never_drags() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();

        controller.on_pointer_move(BorderFlags::RIGHT, (520.0, 150.0), &surface);
        assert!(!controller.is_dragging());
        assert_eq!(surface.rect(), start_rect());
    }

    #[test]
    fn test_disabled_controller_ignores_borders() {
        let surface = TestSurface::new(start_rect(), false);
        let mut controller = ResizeController::new();
        controller.set_enabled(false);

        assert!(!controller.on_pointer_down(BorderFlags::LEFT, &surface));
        controller.on_pointer_move(BorderFlags::LEFT, (80.0, 150.0), &surface);
        assert_eq!(controller.state(), ResizeState::Idle);
        assert_eq!(surface.rect(), start_rect());
    }
}

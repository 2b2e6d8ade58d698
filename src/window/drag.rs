//! Move controller for the frameless chrome
//!
//! A primary-button press in the window's interior (not on a resize
//! border) hands the gesture to the OS's interactive move. The window
//! manager then owns the drag, so the matching release may never reach
//! us; window (re)activation clears the flag instead.

use crate::window::ChromeSurface;

/// Handler for window dragging via the native interactive move.
pub struct MoveController {
    move_active: bool,
}

impl MoveController {
    pub fn new() -> Self {
        Self { move_active: false }
    }

    pub fn is_move_active(&self) -> bool {
        self.move_active
    }

    /// Primary-button press. `resize_claimed` is true when the resize
    /// controller took this press; a resize claim always wins and the
    /// move must not start for the same gesture.
    ///
    /// Returns true when a native move was started.
    pub fn on_pointer_down(&mut self, resize_claimed: bool, surface: &dyn ChromeSurface) -> bool {
        if resize_claimed || self.move_active {
            return false;
        }

        if surface.begin_system_move() {
            self.move_active = true;
            true
        } else {
            false
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.move_active = false;
    }

    /// The OS can end the move without a release event reaching us.
    pub fn on_window_activated(&mut self) {
        self.move_active = false;
    }
}

impl Default for MoveController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowRect;
    use std::cell::Cell;
    use winit::window::{CursorIcon, ResizeDirection};

    struct TestSurface {
        supports_move: bool,
        move_requests: Cell<usize>,
    }

    impl TestSurface {
        fn new(supports_move: bool) -> Self {
            Self {
                supports_move,
                move_requests: Cell::new(0),
            }
        }
    }

    impl ChromeSurface for TestSurface {
        fn rect(&self) -> WindowRect {
            WindowRect::new(0, 0, 400, 180)
        }

        fn set_rect(&self, _rect: WindowRect) {}

        fn set_cursor(&self, _icon: CursorIcon) {}

        fn begin_system_move(&self) -> bool {
            self.move_requests.set(self.move_requests.get() + 1);
            self.supports_move
        }

        fn begin_system_resize(&self, _direction: ResizeDirection) -> bool {
            false
        }
    }

    #[test]
    fn test_interior_press_starts_move() {
        let surface = TestSurface::new(true);
        let mut controller = MoveController::new();

        assert!(controller.on_pointer_down(false, &surface));
        assert!(controller.is_move_active());
        assert_eq!(surface.move_requests.get(), 1);
    }

    #[test]
    fn test_resize_claim_suppresses_move() {
        let surface = TestSurface::new(true);
        let mut controller = MoveController::new();

        assert!(!controller.on_pointer_down(true, &surface));
        assert!(!controller.is_move_active());
        assert_eq!(surface.move_requests.get(), 0);
    }

    #[test]
    fn test_no_second_move_while_active() {
        let surface = TestSurface::new(true);
        let mut controller = MoveController::new();

        controller.on_pointer_down(false, &surface);
        assert!(!controller.on_pointer_down(false, &surface));
        assert_eq!(surface.move_requests.get(), 1);
    }

    #[test]
    fn test_declined_move_is_not_active() {
        let surface = TestSurface::new(false);
        let mut controller = MoveController::new();

        assert!(!controller.on_pointer_down(false, &surface));
        assert!(!controller.is_move_active());
    }

    #[test]
    fn test_activation_clears_move() {
        let surface = TestSurface::new(true);
        let mut controller = MoveController::new();

        controller.on_pointer_down(false, &surface);
        controller.on_window_activated();
        assert!(!controller.is_move_active());

        // A new press may claim a fresh gesture afterwards.
        assert!(controller.on_pointer_down(false, &surface));
    }

    #[test]
    fn test_release_clears_move() {
        let surface = TestSurface::new(true);
        let mut controller = MoveController::new();

        controller.on_pointer_down(false, &surface);
        controller.on_pointer_up();
        assert!(!controller.is_move_active());
    }
}

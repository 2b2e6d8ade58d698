//! Composed frameless window chrome
//!
//! `WindowChrome` is the piece concrete windows embed: it owns the
//! border style, the resize and move controllers, and the translation
//! from raw winit window events into gesture handling. Composition
//! replaces the widget-inheritance chains the chrome would otherwise
//! need; the embedding window is only reachable through
//! [`ChromeSurface`].

use crate::renderer::paint::{rounded_rect_spec, RoundedRect};
use crate::window::border::{classify, BorderFlags};
use crate::window::drag::MoveController;
use crate::window::resize::ResizeController;
use crate::window::style::{BorderStyle, Color};
use crate::window::ChromeSurface;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::CursorIcon;

/// Extra hover padding around the drawn border, in logical pixels.
/// Grabbing exactly a thin border is fiddly; the hit band is wider
/// than the stroke.
const HIT_SLOP: f64 = 3.0;

/// Frameless window chrome: border styling, hit-testing, and the
/// resize/move gesture controllers, composed behind one type.
pub struct WindowChrome {
    style: BorderStyle,
    resize: ResizeController,
    mover: MoveController,
    /// Last cursor position in window-local coordinates. Mouse button
    /// events carry no position, so this is tracked across moves.
    cursor_position: (f64, f64),
    fallback_fill: Color,
}

impl WindowChrome {
    /// Fill used when the style has no explicit color, a slightly
    /// lifted variant of the dark theme background.
    pub const DEFAULT_FILL: Color = Color::rgb(0.12, 0.12, 0.14);

    pub fn new(style: BorderStyle) -> Self {
        Self {
            style,
            resize: ResizeController::new(),
            mover: MoveController::new(),
            cursor_position: (0.0, 0.0),
            fallback_fill: Self::DEFAULT_FILL,
        }
    }

    pub fn with_fallback_fill(mut self, fill: Color) -> Self {
        self.fallback_fill = fill;
        self
    }

    pub fn style(&self) -> &BorderStyle {
        &self.style
    }

    /// Merge border-style overrides; `None` fields keep current values.
    pub fn set_border_style(
        &mut self,
        thickness: Option<u32>,
        radius: Option<u32>,
        color: Option<Color>,
    ) {
        self.style
            .apply(thickness, radius, color, Some(self.fallback_fill));
    }

    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize.set_enabled(enabled);
    }

    pub fn is_resize_enabled(&self) -> bool {
        self.resize.is_enabled()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.resize.is_dragging() || self.mover.is_move_active()
    }

    /// Paint parameters for the current style at the given surface size.
    pub fn paint_spec(&self, width: u32, height: u32) -> RoundedRect {
        rounded_rect_spec(&self.style, width, height, self.fallback_fill)
    }

    /// Translate a winit event into gesture handling.
    ///
    /// Returns true when the chrome consumed the event and the embedding
    /// window should not treat it as ordinary input.
    pub fn handle_event(&mut self, event: &WindowEvent, surface: &dyn ChromeSurface) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved((position.x, position.y), surface)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => self.on_pointer_pressed(surface),
                        ElementState::Released => self.on_pointer_released(),
                    }
                } else {
                    false
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.on_cursor_left(surface);
                false
            }
            WindowEvent::Focused(_) => {
                // (Re)activation recovers from releases the OS swallowed
                // during a native drag.
                self.on_window_activated();
                false
            }
            _ => false,
        }
    }

    /// Pointer moved to `position` (window-local coordinates).
    pub fn on_cursor_moved(&mut self, position: (f64, f64), surface: &dyn ChromeSurface) -> bool {
        self.cursor_position = position;

        let rect = surface.rect();
        let border = self.classify_local(position, rect.width, rect.height);
        let global = (rect.x as f64 + position.0, rect.y as f64 + position.1);

        self.resize.on_pointer_move(border, global, surface)
    }

    /// Primary button pressed at the last known cursor position.
    pub fn on_pointer_pressed(&mut self, surface: &dyn ChromeSurface) -> bool {
        let rect = surface.rect();
        let border = self.classify_local(self.cursor_position, rect.width, rect.height);

        let resize_claimed = self.resize.on_pointer_down(border, surface);

        // Only an interior press may start a move; a border press with
        // resizing disabled is neither.
        let move_started = if border.is_empty() {
            self.mover.on_pointer_down(resize_claimed, surface)
        } else {
            false
        };

        resize_claimed || move_started
    }

    /// Primary button released.
    pub fn on_pointer_released(&mut self) -> bool {
        let was_active = self.is_gesture_active();
        self.resize.on_pointer_up();
        self.mover.on_pointer_up();
        was_active
    }

    /// Cursor left the window; drop the hover cursor unless dragging.
    pub fn on_cursor_left(&mut self, surface: &dyn ChromeSurface) {
        if !self.resize.is_dragging() {
            surface.set_cursor(CursorIcon::Default);
        }
    }

    /// Window was (de/re)activated; cancel any in-flight gesture.
    pub fn on_window_activated(&mut self) {
        self.resize.on_window_activated();
        self.mover.on_window_activated();
    }

    fn classify_local(&self, position: (f64, f64), width: u32, height: u32) -> BorderFlags {
        classify(
            position.0,
            position.1,
            width as f64,
            height as f64,
            self.style.thickness() as f64 + HIT_SLOP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowRect;
    use std::cell::{Cell, RefCell};
    use winit::window::ResizeDirection;

    #[derive(Default)]
    struct Calls {
        moves: usize,
        resizes: Vec<ResizeDirection>,
    }

    struct TestSurface {
        rect: Cell<WindowRect>,
        native: bool,
        cursor: Cell<CursorIcon>,
        calls: RefCell<Calls>,
    }

    impl TestSurface {
        fn new(native: bool) -> Self {
            Self {
                rect: Cell::new(WindowRect::new(100, 100, 400, 180)),
                native,
                cursor: Cell::new(CursorIcon::Default),
                calls: RefCell::new(Calls::default()),
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
            self.calls.borrow_mut().moves += 1;
            self.native
        }

        fn begin_system_resize(&self, direction: ResizeDirection) -> bool {
            self.calls.borrow_mut().resizes.push(direction);
            self.native
        }
    }

    fn chrome() -> WindowChrome {
        WindowChrome::new(BorderStyle::new().with_thickness(5).with_radius(10))
    }

    #[test]
    fn test_border_press_claims_resize_not_move() {
        let surface = TestSurface::new(true);
        let mut chrome = chrome();

        chrome.on_cursor_moved((2.0, 90.0), &surface);
        assert!(chrome.on_pointer_pressed(&surface));

        let calls = surface.calls.borrow();
        assert_eq!(calls.resizes.as_slice(), &[ResizeDirection::West]);
        assert_eq!(calls.moves, 0);
    }

    #[test]
    fn test_interior_press_starts_move() {
        let surface = TestSurface::new(true);
        let mut chrome = chrome();

        chrome.on_cursor_moved((200.0, 90.0), &surface);
        assert!(chrome.on_pointer_pressed(&surface));

        let calls = surface.calls.borrow();
        assert!(calls.resizes.is_empty());
        assert_eq!(calls.moves, 1);
    }

    #[test]
    fn test_disabled_resize_keeps_border_press_inert() {
        let surface = TestSurface::new(true);
        let mut chrome = chrome();
        chrome.set_resize_enabled(false);

        chrome.on_cursor_moved((2.0, 90.0), &surface);
        assert!(!chrome.on_pointer_pressed(&surface));

        // Neither a resize nor a move may start from a border press.
        let calls = surface.calls.borrow();
        assert!(calls.resizes.is_empty());
        assert_eq!(calls.moves, 0);
    }

    #[test]
    fn test_corner_press_drag_release_cycle() {
        let surface = TestSurface::new(false);
        let mut chrome = chrome();

        chrome.on_cursor_moved((398.0, 178.0), &surface);
        assert!(chrome.on_pointer_pressed(&surface));
        assert!(chrome.is_gesture_active());

        // Cursor global (520, 300): local (420, 200) + origin (100, 100).
        chrome.on_cursor_moved((420.0, 200.0), &surface);
        assert_eq!(surface.rect.get(), WindowRect::new(100, 100, 420, 200));

        assert!(chrome.on_pointer_released());
        assert!(!chrome.is_gesture_active());
    }

    #[test]
    fn test_hover_sets_and_resets_cursor() {
        let surface = TestSurface::new(false);
        let mut chrome = chrome();

        chrome.on_cursor_moved((2.0, 2.0), &surface);
        assert_eq!(surface.cursor.get(), CursorIcon::NwseResize);

        chrome.on_cursor_moved((200.0, 90.0), &surface);
        assert_eq!(surface.cursor.get(), CursorIcon::Default);
    }

    #[test]
    fn test_activation_recovers_lost_release() {
        let surface = TestSurface::new(true);
        let mut chrome = chrome();

        chrome.on_cursor_moved((200.0, 90.0), &surface);
        chrome.on_pointer_pressed(&surface);
        assert!(chrome.is_gesture_active());

        // Native move ate the release; the next activation must unstick.
        chrome.on_window_activated();
        assert!(!chrome.is_gesture_active());
    }

    #[test]
    fn test_move_without_press_is_harmless() {
        let surface = TestSurface::new(false);
        let mut chrome = chrome();

        // No pointer-down was observed; hovering claims the cursor but
        // never the geometry.
        assert!(chrome.on_cursor_moved((2.0, 90.0), &surface));
        assert!(!chrome.is_gesture_active());
        assert_eq!(surface.rect.get(), WindowRect::new(100, 100, 400, 180));
    }

    #[test]
    fn test_paint_spec_uses_style() {
        let chrome = chrome();
        let spec = chrome.paint_spec(400, 180);
        assert_eq!(spec.radius, 10.0);
        assert_eq!(spec.fill, WindowChrome::DEFAULT_FILL);
    }
}

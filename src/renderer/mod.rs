//! Renderer module for LyricPane
//!
//! GPU rendering of the window chrome using wgpu. The visible chrome is
//! one antialiased rounded rectangle on a transparent surface; the paint
//! geometry lives in [`paint`] and the GPU path in [`wgpu_renderer`].

pub mod paint;
pub mod pipeline;
pub mod wgpu_renderer;

pub use paint::{rounded_rect_spec, RoundedRect};
pub use wgpu_renderer::ChromeRenderer;

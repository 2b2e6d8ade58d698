//! LyricPane - a frameless, transparent lyrics pane
//!
//! The crate is organized around the frameless window chrome:
//!
//! - [`window`] - border hit-testing, styling, and the resize/move
//!   gesture controllers behind the [`window::ChromeSurface`] trait
//! - [`renderer`] - wgpu rendering of the rounded chrome background
//! - [`lyrics`] - timed lyric storage and LRC parsing
//! - [`app`] - the winit application shell
//! - [`utils`] - error types and configuration

pub mod app;
pub mod lyrics;
pub mod renderer;
pub mod utils;
pub mod window;

//! Error types for lyricpane
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling.

use thiserror::Error;

/// Main error type for lyricpane
#[derive(Error, Debug)]
pub enum LyricPaneError {
    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Chrome rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Lyric parsing errors
    #[error("Lyrics error: {0}")]
    Lyrics(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),
}

/// Convenience type alias for Results in lyricpane
pub type Result<T> = std::result::Result<T, LyricPaneError>;

/// Extension trait for converting other errors to LyricPaneError
pub trait IntoPaneError<T> {
    /// Convert this error into a LyricPaneError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn render_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPaneError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| LyricPaneError::Window(format!("{}: {}", context, e)))
    }

    fn render_err(self, context: &str) -> Result<T> {
        self.map_err(|e| LyricPaneError::Render(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| LyricPaneError::Config(format!("{}: {}", context, e)))
    }
}

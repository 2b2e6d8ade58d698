//! Utility module for LyricPane
//!
//! Common utilities used throughout the application:
//! - Error handling with custom error types
//! - Configuration management

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{ChromeConfig, Config, GeneralConfig, WindowConfig};
pub use error::{IntoPaneError, LyricPaneError, Result};

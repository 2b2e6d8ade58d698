//! Configuration management for LyricPane
//!
//! Loads application configuration from the user config file and
//! environment variables, with validation before use.

use crate::utils::error::{IntoPaneError, LyricPaneError, Result};
use crate::window::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// Border chrome configuration
    pub chrome: ChromeConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width
    pub width: u32,

    /// Initial window height
    pub height: u32,

    /// Window title
    pub title: String,

    /// Keep the pane above other windows
    pub always_on_top: bool,
}

/// Border chrome configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Border thickness in pixels
    pub border_thickness: u32,

    /// Corner radius in pixels
    pub border_radius: u32,

    /// Border fill color (hex, e.g. "#1E1E24" or "#1E1E24E0");
    /// None uses the theme fallback
    pub border_color: Option<String>,

    /// Allow edge-drag resizing
    pub resizable: bool,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            chrome: ChromeConfig::default(),
            general: GeneralConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 180,
            title: "LyricPane".to_string(),
            always_on_top: true,
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            border_thickness: 5,
            border_radius: 10,
            border_color: None,
            resizable: true,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, later sources overriding earlier:
    /// 1. Default values
    /// 2. User config file (~/.config/lyricpane/config.toml on Linux)
    /// 3. Environment variables (LYRICPANE_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config = Self::from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).config_err("Failed to read config file")?;

        toml::from_str(&contents).config_err("Failed to parse config file")
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path().ok_or_else(|| {
            LyricPaneError::Config("Cannot determine user config path".to_string())
        })?;
        self.write_to(&path)
    }

    /// Write configuration to a specific TOML file, creating parent
    /// directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).config_err("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).config_err("Failed to serialize config")?;

        std::fs::write(path, toml).config_err("Failed to write config file")?;

        Ok(())
    }

    /// Parsed border color, if one is configured.
    pub fn border_color(&self) -> Option<Color> {
        self.chrome
            .border_color
            .as_deref()
            .and_then(Color::from_hex)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(width) = std::env::var("LYRICPANE_WINDOW_WIDTH") {
            self.window.width = width
                .parse()
                .map_err(|_| LyricPaneError::Config("Invalid LYRICPANE_WINDOW_WIDTH".to_string()))?;
        }

        if let Ok(height) = std::env::var("LYRICPANE_WINDOW_HEIGHT") {
            self.window.height = height.parse().map_err(|_| {
                LyricPaneError::Config("Invalid LYRICPANE_WINDOW_HEIGHT".to_string())
            })?;
        }

        if let Ok(thickness) = std::env::var("LYRICPANE_BORDER_THICKNESS") {
            self.chrome.border_thickness = thickness.parse().map_err(|_| {
                LyricPaneError::Config("Invalid LYRICPANE_BORDER_THICKNESS".to_string())
            })?;
        }

        if let Ok(color) = std::env::var("LYRICPANE_BORDER_COLOR") {
            self.chrome.border_color = Some(color);
        }

        if let Ok(log_level) = std::env::var("LYRICPANE_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(LyricPaneError::Config(
                "Window dimensions must be non-zero".to_string(),
            ));
        }

        if let Some(color) = &self.chrome.border_color {
            if Color::from_hex(color).is_none() {
                return Err(LyricPaneError::Config(format!(
                    "Invalid border color '{}'",
                    color
                )));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(LyricPaneError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lyricpane").join("config.toml"))
    }
}

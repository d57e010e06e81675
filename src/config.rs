//! Configuration management for scrollthumb
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH,
    DEFAULT_LOG_LEVEL, DEFAULT_THUMB_MIN_SIZE, DEFAULT_THUMB_SYMBOL, DEFAULT_TRACK_SYMBOL, LOCAL_CONFIG_FILE_NAME,
};
use crate::dom::Document;
use crate::scrollbar::{Offsets, ScrollbarThumb, TrackDirection};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub thumb: ThumbConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Thumb configuration, shared by both axes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbConfig {
    /// Minimum thumb size in pixels
    pub min_size: f64,
    /// Insets between the track edges and the thumb travel, in pixels
    pub offsets: Offsets,
}

/// Terminal rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pixel width of one terminal cell
    pub cell_width: f64,
    /// Pixel height of one terminal cell
    pub cell_height: f64,
    /// Symbol painted for thumb cells
    pub thumb_symbol: String,
    /// Symbol painted for vertical track cells
    pub track_symbol: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Mirror log entries to a file
    pub enabled: bool,
    /// Level filter: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_THUMB_MIN_SIZE,
            offsets: Offsets::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            thumb_symbol: DEFAULT_THUMB_SYMBOL.to_string(),
            track_symbol: DEFAULT_TRACK_SYMBOL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ThumbConfig {
    /// Build a thumb for one axis from this configuration
    pub fn build(&self, document: &mut Document, direction: TrackDirection) -> crate::error::Result<ScrollbarThumb> {
        ScrollbarThumb::new(document, direction, self.min_size, self.offsets)
    }
}

impl UiConfig {
    /// Pixel size of one cell along the given axis
    pub fn cell_size(&self, direction: TrackDirection) -> f64 {
        match direction {
            TrackDirection::Horizontal => self.cell_width,
            TrackDirection::Vertical => self.cell_height,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", self.level, e))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate thumb settings
        if !self.thumb.min_size.is_finite() || self.thumb.min_size < 0.0 {
            anyhow::bail!("min_size must be a non-negative number, got {}", self.thumb.min_size);
        }

        let offsets = &self.thumb.offsets;
        for (side, value) in [
            ("top", offsets.top),
            ("right", offsets.right),
            ("bottom", offsets.bottom),
            ("left", offsets.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("offsets.{} must be a non-negative number, got {}", side, value);
            }
        }

        // Validate UI settings
        for (name, value) in [("cell_width", self.ui.cell_width), ("cell_height", self.ui.cell_height)] {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{} must be a positive number, got {}", name, value);
            }
        }

        if self.ui.thumb_symbol.is_empty() {
            anyhow::bail!("thumb_symbol cannot be empty");
        }
        if self.ui.track_symbol.is_empty() {
            anyhow::bail!("track_symbol cannot be empty");
        }

        // Validate logging settings
        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# scrollthumb Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}

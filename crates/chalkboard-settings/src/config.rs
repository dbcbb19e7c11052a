//! Configuration and settings management for Chalkboard
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (size, background)
//! - Stroke defaults (color, width)
//! - Interaction settings (eraser radius, select tolerance, history depth)

use crate::error::{SettingsError, SettingsResult};
use chalkboard_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ERASER_RADIUS, DEFAULT_HISTORY_DEPTH,
    DEFAULT_STROKE_WIDTH, SELECT_TOLERANCE,
};
use chalkboard_core::{CanvasBounds, Color};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in canvas units
    pub width: f64,
    /// Canvas height in canvas units
    pub height: f64,
    /// Background color used when rasterizing the board
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: Color::WHITE,
        }
    }
}

/// Default stroke style for newly drawn shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    pub color: Color,
    pub width: f64,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Eraser hit radius in canvas units
    pub eraser_radius: f64,
    /// Outline distance within which a select click picks a shape
    pub select_tolerance: f64,
    /// Maximum number of history snapshots kept
    pub history_depth: usize,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            eraser_radius: DEFAULT_ERASER_RADIUS,
            select_tolerance: SELECT_TOLERANCE,
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Complete board configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub canvas: CanvasSettings,
    pub stroke: StrokeSettings,
    pub interaction: InteractionSettings,
}

impl Settings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(SettingsError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(SettingsError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.canvas.width.is_finite() && self.canvas.width > 0.0) {
            return Err(SettingsError::invalid("canvas.width", "must be > 0"));
        }
        if !(self.canvas.height.is_finite() && self.canvas.height > 0.0) {
            return Err(SettingsError::invalid("canvas.height", "must be > 0"));
        }
        if !(self.stroke.width.is_finite() && self.stroke.width > 0.0) {
            return Err(SettingsError::invalid("stroke.width", "must be > 0"));
        }
        if !(self.interaction.eraser_radius.is_finite() && self.interaction.eraser_radius > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.eraser_radius",
                "must be > 0",
            ));
        }
        if !(self.interaction.select_tolerance.is_finite()
            && self.interaction.select_tolerance >= 0.0)
        {
            return Err(SettingsError::invalid(
                "interaction.select_tolerance",
                "must be >= 0",
            ));
        }
        if self.interaction.history_depth == 0 {
            return Err(SettingsError::invalid(
                "interaction.history_depth",
                "must be > 0",
            ));
        }
        Ok(())
    }

    /// The canvas rectangle described by these settings
    pub fn canvas_bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas.width, self.canvas.height)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Default location of the settings file (`<config dir>/chalkboard/settings.toml`)
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("chalkboard").join("settings.toml"))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}

//! Chalkboard Settings Crate
//!
//! Handles board configuration: canvas size, default stroke style, eraser
//! radius, selection tolerance, and history depth.

pub mod config;
pub mod error;

pub use config::{default_config_path, CanvasSettings, InteractionSettings, Settings, StrokeSettings};
pub use error::{SettingsError, SettingsResult};

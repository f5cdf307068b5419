//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchboard/config.toml`.
//! Settings include drawing defaults, surface dimensions, and export
//! behavior.
//!
//! If no config file exists, sensible defaults are used automatically.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::draw::{Color, color};
use crate::export::ExportConfig;
use crate::util;

/// Color specification - either a palette color name or RGB values.
///
/// # Examples
/// ```toml
/// # Named palette color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: white, black, red, green, yellow, blue, pink, violet
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped through `util::name_to_color()`. Unknown
    /// names default to white with a warning. RGB arrays are converted from
    /// 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                color::WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the default stroke appearance when the engine starts. Users can
/// change these values at runtime through the tool/style controller.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke color - a palette name or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
        }
    }
}

/// Surface dimensions and background fill.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background fill color, reasserted on clear and full redraws
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Snapshot export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSection {
    /// Directory snapshots are saved to; defaults to `~/Pictures/Sketchboard`
    #[serde(default)]
    pub save_directory: Option<PathBuf>,

    /// Filename template with chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension (only "png" is supported)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            save_directory: None,
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

impl ExportSection {
    /// Resolves the section into runtime export settings.
    pub fn to_export_config(&self) -> ExportConfig {
        let defaults = ExportConfig::default();
        ExportConfig {
            save_directory: self
                .save_directory
                .clone()
                .unwrap_or(defaults.save_directory),
            filename_template: self.filename_template.clone(),
            format: self.format.clone(),
        }
    }
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "white"
/// default_thickness = 5.0
///
/// [surface]
/// width = 1280
/// height = 720
/// background = [26, 26, 26]
///
/// [export]
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// format = "png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing tool defaults (color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface dimensions and background
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Snapshot export settings
    #[serde(default)]
    pub export: ExportSection,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged, so a hand-edited config never prevents startup.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `width`/`height`: at least 1 pixel
    /// - `format`: "png"
    fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 20.0);
        }

        if self.surface.width < 1 {
            warn!(
                "Invalid surface width {}, falling back to {}",
                self.surface.width,
                default_width()
            );
            self.surface.width = default_width();
        }
        if self.surface.height < 1 {
            warn!(
                "Invalid surface height {}, falling back to {}",
                self.surface.height,
                default_height()
            );
            self.surface.height = default_height();
        }

        if self.export.format.to_lowercase() != "png" {
            warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = default_format();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(input)?;
        config.validate_and_clamp();
        Ok(config)
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_thickness() -> f64 {
    5.0
}

fn default_width() -> i32 {
    1280
}

fn default_height() -> i32 {
    720
}

fn default_background() -> ColorSpec {
    ColorSpec::Rgb([0x1A, 0x1A, 0x1A])
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

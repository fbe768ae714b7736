//! Configuration for the canvas and script interpreter.
//!
//! Values resolve in order: command-line flags, then `RASTER_KIT_*`
//! environment variables, then the YAML file, then built-in defaults.

use crate::color::Rgb;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the initial canvas width.
pub const ENV_CANVAS_WIDTH: &str = "RASTER_KIT_CANVAS_WIDTH";
/// Environment variable overriding the initial canvas height.
pub const ENV_CANVAS_HEIGHT: &str = "RASTER_KIT_CANVAS_HEIGHT";

/// Canvas settings used before the first `resetCanvas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Color the bitmap is cleared to before each render.
    #[serde(default)]
    pub background: Rgb,
}

fn default_canvas_size() -> u32 {
    1000
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: Rgb::BLACK,
        }
    }
}

/// Pen settings used before the first `setColor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PenConfig {
    /// Initial pen color.
    #[serde(default)]
    pub color: Rgb,
}

/// Image output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File extension appended to `saveCanvas` names.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "png".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { extension: default_extension() }
    }
}

/// Top-level YAML document. Every section may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pen settings.
    #[serde(default)]
    pub pen: PenConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            pen: PenConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Built-in defaults: a 1000x1000 black canvas and a black pen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, `<config dir>/raster-kit/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("raster-kit").join("config.yaml"))
    }

    /// Read and parse the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigNotFound`] if the file cannot be read,
    /// [`Error::ConfigParse`] if its contents are not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigParse`] carrying the 1-based line of the fault, or 0
    /// when the parser reports no location.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Like [`Config::load`], but any failure yields the defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`; unparsable or zero
    /// values are ignored.
    #[must_use]
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let size = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|&v| v > 0)
        };
        if let Some(width) = size(ENV_CANVAS_WIDTH) {
            self.canvas.width = width;
        }
        if let Some(height) = size(ENV_CANVAS_HEIGHT) {
            self.canvas.height = height;
        }
        self
    }
}

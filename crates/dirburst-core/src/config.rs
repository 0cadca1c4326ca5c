/// Configuration — scan options and chart constants, loadable from JSON.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "scan": { "excluded_names": [".git", "node_modules"] },
///   "chart": { "outer_radius": 400 } }
/// ```
use crate::scanner::ScanOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Drawing constants of the sunburst chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Radius of the outermost ring, in surface units.
    pub outer_radius: f64,
    /// Space around the chart; the canvas is `2 * outer_radius + margin` square.
    pub margin: f64,
    /// Arcs narrower than this (radians) carry no text label.
    pub label_min_angle: f64,
    /// HSL saturation of arc fills.
    pub saturation: f64,
    /// HSL lightness of arc fills.
    pub lightness: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            outer_radius: 300.0,
            margin: 20.0,
            label_min_angle: 0.10,
            saturation: 0.70,
            lightness: 0.50,
        }
    }
}

impl ChartConfig {
    /// Side length of the square canvas.
    pub fn canvas_size(&self) -> f64 {
        2.0 * self.outer_radius + self.margin
    }

    /// Offset of the chart centre from the canvas' top-left corner.
    pub fn center_offset(&self) -> f64 {
        self.outer_radius + 0.5 * self.margin
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanOptions,
    pub chart: ChartConfig,
}

/// Failure to read a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

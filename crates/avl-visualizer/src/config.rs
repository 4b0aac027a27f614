//! Visualizer configuration, loaded from JSON.
//!
//! Every field is optional in the file; missing ones keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::render::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0} must be positive")]
    NotPositive(&'static str),
    #[error("invalid config: {name} must be between {min} and {max}")]
    OutOfRange {
        name: &'static str,
        min: i32,
        max: i32,
    },
}

/// Largest accepted value for any layout dimension, in pixels.
pub const MAX_DIMENSION: i32 = 100_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub layout: LayoutConfig,
    pub theme: Theme,
}

impl VisualizerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        let checks = [
            ("layout.width", layout.width),
            ("layout.height", layout.height),
            ("layout.vertical_gap", layout.vertical_gap),
            ("layout.node_radius", layout.node_radius),
        ];
        for (name, value) in checks {
            if value <= 0 {
                return Err(ConfigError::NotPositive(name));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::OutOfRange {
                    name,
                    min: 1,
                    max: MAX_DIMENSION,
                });
            }
        }
        if !(0..=layout.height).contains(&layout.top_margin) {
            return Err(ConfigError::OutOfRange {
                name: "layout.top_margin",
                min: 0,
                max: layout.height,
            });
        }
        Ok(())
    }
}

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{nav::DEFAULT_SCROLL_THRESHOLD, Result};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub carousel: CarouselConfig,
    pub navbar: NavbarConfig,
}

impl AppConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration for the asset carousel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Starting slide; clamped into range when the carousel is built.
    pub initial_index: isize,
    /// Catalog file to show instead of the built-in event assets.
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scroll_threshold: f32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

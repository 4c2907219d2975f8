//! Grading configuration
//!
//! The pass threshold and the set of textual pass markers, externalized as a
//! TOML file instead of living as magic strings next to the classifier. The
//! defaults reproduce the grading scale the tool was written for: numeric
//! grades pass on strict greater-than 55, and the two Hebrew markers for
//! credit-by-exemption and pass-without-score count as passing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a grading config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Grade classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Numeric grades above this value pass; the value itself fails
    pub pass_threshold: u32,

    /// Substrings that make a non-numeric grade token count as passing
    pub pass_markers: Vec<String>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 55,
            pass_markers: vec!["פטור".to_string(), "עבר".to_string()],
        }
    }
}

impl GradingConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing keys take their default values, so a file overriding only
    /// `pass_threshold` keeps the default marker set.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the effective configuration
    ///
    /// An explicitly given path is always loaded and a broken file is an
    /// error. Without one, the per-user config file is loaded when it
    /// exists; otherwise the built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        Ok(Self::default())
    }

    /// Per-user config file location (`<config dir>/gradecheck/config.toml`)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gradecheck").join("config.toml"))
    }
}

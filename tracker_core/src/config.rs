//! Configuration file support for the tracker CLI.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/tracker/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Body measurements used by the calorie formulas
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Weight in kilograms
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    /// Height in meters
    #[serde(default = "default_height_m")]
    pub height_m: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            weight_kg: default_weight_kg(),
            height_m: default_height_m(),
        }
    }
}

// Default value functions
fn default_weight_kg() -> f64 {
    75.0
}

fn default_height_m() -> f64 {
    1.75
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            path => {
                tracing::info!("No config file found at {:?}, using defaults", path);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("tracker").join("config.toml"))
    }

    /// Reject profiles the calorie formulas cannot use
    pub fn validate(&self) -> Result<()> {
        if !(self.profile.weight_kg > 0.0) {
            return Err(Error::Config(format!(
                "profile.weight_kg must be positive, got {}",
                self.profile.weight_kg
            )));
        }
        if !(self.profile.height_m > 0.0) {
            return Err(Error::Config(format!(
                "profile.height_m must be positive, got {}",
                self.profile.height_m
            )));
        }
        Ok(())
    }
}

//! Configuration file handling for Inkboard
//!
//! Reads and writes the hit-testing tunables in JSON or TOML, picked by file
//! extension. Files live in the platform config directory by default:
//!
//! ```text
//! <config_dir>/inkboard/config.toml
//! ```
//!
//! Every section is optional in the file; missing keys take their defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use inkboard_geometry::HitTestOptions;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "inkboard";
const CONFIG_FILE: &str = "config.toml";

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Distance and hit-test tunables
    pub hit_testing: HitTestOptions,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded {} config from {}", format, path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved {} config to {}", format, path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let hit = &self.hit_testing;

        let lengths = [
            ("hit_testing.annotation_hit_radius", hit.annotation_hit_radius),
            (
                "hit_testing.annotation_local_hit_radius",
                hit.annotation_local_hit_radius,
            ),
            (
                "hit_testing.freedraw_simplify_tolerance",
                hit.freedraw_simplify_tolerance,
            ),
            ("hit_testing.hit_threshold", hit.hit_threshold),
        ];
        for (key, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        if hit.curve_samples == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "hit_testing.curve_samples".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if hit.ellipse_iterations == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "hit_testing.ellipse_iterations".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Default config file location under the platform config directory
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no config directory available".to_string()).into()
        })
}

//! Inkboard Settings Crate
//!
//! Loads, validates and saves the hit-testing tunables as JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, ConfigFormat};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

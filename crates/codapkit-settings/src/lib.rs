//! CodapKit Settings Crate
//!
//! Typed application configuration with JSON/TOML persistence and
//! validation.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CaseCardSettings, Config, HistorySettings, MapSettings, TextSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

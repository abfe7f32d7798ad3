//! Configuration and settings management for CodapKit
//!
//! Configuration is organized into sections:
//! - Undo history depth
//! - Map view defaults (fit padding, base layer, grid and zoom ranges)
//! - Case card summary formatting
//! - Note editor focus debouncing
//!
//! Files are JSON or TOML, chosen by extension.

use codapkit_cases::SummaryFormat;
use codapkit_map::{BaseMapLayer, MapViewOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Commands kept for undo
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

/// Map view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Pixels kept free around fitted data (horizontal, vertical)
    pub fit_padding: [f64; 2],
    pub default_base_layer: BaseMapLayer,
    pub grid_min: f64,
    pub grid_max: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            fit_padding: [10.0, 10.0],
            default_base_layer: BaseMapLayer::Topographic,
            grid_min: 0.1,
            grid_max: 2.0,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }
}

/// Case card settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseCardSettings {
    /// Decimal places in attribute summaries
    pub precision: usize,
    pub range_separator: String,
}

impl Default for CaseCardSettings {
    fn default() -> Self {
        let format = SummaryFormat::default();
        Self {
            precision: format.precision,
            range_separator: format.range_separator,
        }
    }
}

impl CaseCardSettings {
    pub fn summary_format(&self) -> SummaryFormat {
        SummaryFormat {
            precision: self.precision,
            range_separator: self.range_separator.clone(),
        }
    }
}

/// Note editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Quiet window before a focus change counts, in milliseconds
    pub focus_debounce_ms: u64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            focus_debounce_ms: 200,
        }
    }
}

impl TextSettings {
    pub fn focus_debounce(&self) -> Duration {
        Duration::from_millis(self.focus_debounce_ms)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub history: HistorySettings,
    pub map: MapSettings,
    pub case_card: CaseCardSettings,
    pub text: TextSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => {
                serde_json::from_str(&content).map_err(|e| SettingsError::parse(path, e))?
            }
            Format::Toml => toml::from_str(&content).map_err(|e| SettingsError::parse(path, e))?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|e| SettingsError::Serialize(e.to_string()))?,
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))?
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history.max_depth == 0 {
            return Err(ConfigError::out_of_range("history.max_depth", 0));
        }

        let map = &self.map;
        for (i, padding) in map.fit_padding.iter().enumerate() {
            if !padding.is_finite() || *padding < 0.0 {
                let key = format!("map.fit_padding[{}]", i);
                return Err(ConfigError::out_of_range(&key, padding));
            }
        }
        if !(map.grid_min > 0.0 && map.grid_min.is_finite()) {
            return Err(ConfigError::out_of_range("map.grid_min", map.grid_min));
        }
        if !(map.grid_max >= map.grid_min && map.grid_max.is_finite()) {
            return Err(ConfigError::out_of_range("map.grid_max", map.grid_max));
        }
        if !(map.min_zoom >= 0.0 && map.min_zoom.is_finite()) {
            return Err(ConfigError::out_of_range("map.min_zoom", map.min_zoom));
        }
        if !(map.max_zoom >= map.min_zoom && map.max_zoom.is_finite()) {
            return Err(ConfigError::out_of_range("map.max_zoom", map.max_zoom));
        }

        if self.case_card.precision > 15 {
            return Err(ConfigError::out_of_range(
                "case_card.precision",
                self.case_card.precision,
            ));
        }

        if self.text.focus_debounce_ms == 0 {
            return Err(ConfigError::out_of_range("text.focus_debounce_ms", 0));
        }

        Ok(())
    }

    /// Options for a map view built from these settings.
    pub fn map_view_options(&self) -> MapViewOptions {
        MapViewOptions {
            fit_padding: self.map.fit_padding,
            history_depth: self.history.max_depth,
            grid_range: (self.map.grid_min, self.map.grid_max),
        }
    }
}

/// Platform config location, e.g. `~/.config/codapkit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(SettingsError::NoConfigDirectory)?;
    path.push("codapkit");
    path.push("config.toml");
    Ok(path)
}

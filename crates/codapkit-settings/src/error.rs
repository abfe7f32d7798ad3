//! Settings errors.
//!
//! File errors carry the path involved; validation failures name the
//! offending key.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, saving or locating configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Cannot parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Cannot serialize settings: {0}")]
    Serialize(String),

    /// Neither a config nor a home directory is known.
    #[error("No configuration directory")]
    NoConfigDirectory,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn parse(path: &std::path::Path, message: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Validation and format errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` files are understood.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("{key} cannot be {value}")]
    ValueOutOfRange { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: impl ToString) -> Self {
        Self::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

//! Configuration loading and representation.
//!
//! Sources, lowest precedence first: built-in defaults, an optional JSON file
//! named by `PALLETRACK_CONFIG`, then individual `PALLETRACK_*` variables.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use palletrack_inventory::ViewMode;

pub const CONFIG_FILE_VAR: &str = "PALLETRACK_CONFIG";
pub const PALLET_PREFIX_VAR: &str = "PALLETRACK_PALLET_PREFIX";
pub const VIEW_VAR: &str = "PALLETRACK_VIEW";
pub const SEARCH_VAR: &str = "PALLETRACK_SEARCH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings for entering pallets and for the board on screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Prepended to the number typed into the entry form.
    pub pallet_prefix: String,
    pub view: ViewMode,
    /// Pallet-number search applied to the board; empty shows everything.
    pub search: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pallet_prefix: "PL-".to_string(),
            view: ViewMode::Active,
            search: String::new(),
        }
    }
}

impl TrackerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_FILE_VAR) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };

        if let Some(prefix) = lookup(PALLET_PREFIX_VAR) {
            config.pallet_prefix = prefix;
        }
        if let Some(view) = lookup(VIEW_VAR) {
            config.view = view.parse().map_err(|e| ConfigError::Invalid {
                key: VIEW_VAR,
                reason: format!("{e}"),
            })?;
        }
        if let Some(search) = lookup(SEARCH_VAR) {
            config.search = search.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pallet_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                key: PALLET_PREFIX_VAR,
                reason: "prefix cannot contain whitespace".to_string(),
            });
        }
        Ok(())
    }
}

//! Client configuration file.

use anyhow::{Context, Result};
use menagerie_sync::{ApiConfig, SessionConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "menagerie.toml";

/// Contents of `menagerie.toml`. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

impl ClientConfig {
    /// Loads `explicit` if given, else the default file if it exists,
    /// else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if token.is_some() {
            self.api.auth_token = token;
        }
        self
    }
}

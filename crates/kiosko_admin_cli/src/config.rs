//! Configuration for the Kiosko admin console.
//!
//! The console reads one TOML file: the API base URL and the location of
//! the session storage document. The file path defaults to
//! [`DEFAULT_CONFIG_FILENAME`] in the working directory and can be
//! overridden with `--config`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILENAME: &str = "kiosko.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Console configuration.
///
/// # Example TOML Configuration
///
/// ```toml
/// api_base_url = "https://admin-api.kiosko.example"
/// storage_path = ".kiosko/session.json"
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Kiosko admin API.
    pub api_base_url: String,

    /// Path of the JSON document holding session state.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".kiosko/session.json")
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file does not exist, cannot be
    /// read, or does not parse as the expected TOML structure.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }
}

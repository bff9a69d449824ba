//! Application configuration.
//!
//! Settings are read once at startup from a JSON file. The file is never
//! written by the application and no expense records are stored in it.
//!
//! # Configuration File Location
//!
//! Unless `--config` is given, the file is looked up at:
//! - Linux: `~/.config/expense-tracker/config.json`
//! - macOS: `~/Library/Application Support/expense-tracker/config.json`
//! - Windows: `%APPDATA%/expense-tracker/config.json`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_NOTIFICATION_SECS, MAX_AMOUNT};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "expense-tracker";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// User-adjustable presentation and validation settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Symbol printed in front of every amount in the table.
    pub currency_symbol: String,
    /// Inclusive upper bound for an expense amount.
    pub max_amount: Decimal,
    /// How long the deletion banner stays visible, in seconds.
    pub notification_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            max_amount: MAX_AMOUNT,
            notification_secs: DEFAULT_NOTIFICATION_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the default path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from `path`, or from the default location
    /// when `path` is `None`.
    ///
    /// A missing file silently yields the defaults. An unreadable or
    /// malformed file also yields the defaults, with a warning logged.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(err) => {
                    tracing::warn!("Config path unavailable, using defaults: {err}");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::try_load(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON content
    /// cannot be parsed.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// How long the deletion banner stays visible.
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}

// ============================================================================
// Tests
// ============================================================================

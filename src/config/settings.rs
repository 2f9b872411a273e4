//! Application settings loaded from config.toml
//!
//! Every section and key is optional; missing values fall back to the defaults
//! the app ships with. A missing file is not an error, a malformed one is.

use crate::core::warranty::WARNING_WITHIN_DAYS;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable overriding the settings file location.
pub const CONFIG_PATH_VAR: &str = "RECEIPT_VAULT_CONFIG";

/// Settings file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Warranty reminder settings
    pub reminders: ReminderSettings,
    /// Home summary settings
    pub home: HomeSettings,
    /// Vault listing settings
    pub vault: VaultSettings,
}

/// `[reminders]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReminderSettings {
    /// Days ahead the home screen looks for expiring warranties
    pub upcoming_window_days: i64,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            upcoming_window_days: WARNING_WITHIN_DAYS,
        }
    }
}

/// `[home]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeSettings {
    /// Number of recently recorded receipts shown on the home screen
    pub recent_limit: u64,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self { recent_limit: 3 }
    }
}

/// `[vault]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VaultSettings {
    /// Maximum receipts listed in one vault reply
    pub page_size: usize,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl Settings {
    /// Checks that every window and limit is positive.
    pub fn validate(&self) -> Result<()> {
        if self.reminders.upcoming_window_days <= 0 {
            return Err(Error::Config {
                message: format!(
                    "reminders.upcoming_window_days must be positive, got {}",
                    self.reminders.upcoming_window_days
                ),
            });
        }
        if self.home.recent_limit == 0 {
            return Err(Error::Config {
                message: "home.recent_limit must be positive".to_string(),
            });
        }
        if self.vault.page_size == 0 {
            return Err(Error::Config {
                message: "vault.page_size must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses and validates settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a TOML file, using defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, the TOML syntax is
/// invalid, or a value is out of range.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    debug!("Loading settings from {}", path.display());

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{} not found, using default settings", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read config file {}: {e}", path.display()),
            });
        }
    };

    parse_settings(&contents)
}

/// Loads settings from `$RECEIPT_VAULT_CONFIG`, or ./config.toml when unset.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_settings(path)
}

//! License configuration.
//!
//! The expected key is read from `license_key` in a TOML file, or from the
//! `MACHINEKEY_LICENSE_KEY` environment variable which takes precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LicenseError, LicenseResult};

/// Environment variable overriding the configured key.
pub const LICENSE_KEY_ENV: &str = "MACHINEKEY_LICENSE_KEY";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Configured license settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseConfig {
    /// The license key this machine is expected to derive.
    #[serde(default)]
    pub license_key: String,
}

impl LicenseConfig {
    /// Creates a config holding `license_key` as given.
    #[must_use]
    pub fn new(license_key: impl Into<String>) -> Self {
        Self {
            license_key: license_key.into(),
        }
    }

    fn trimmed(license_key: &str) -> Self {
        Self::new(license_key.trim())
    }

    /// Loads the config, preferring the environment over `path`, and `path`
    /// over [`default_path`](Self::default_path).
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Config`] if no non-empty key is found.
    pub fn load(path: Option<&Path>) -> LicenseResult<Self> {
        resolve(std::env::var(LICENSE_KEY_ENV).ok(), path)
    }

    /// Loads the config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds an
    /// empty key.
    pub fn load_from(path: &Path) -> LicenseResult<Self> {
        if !path.exists() {
            return Err(LicenseError::Config(format!(
                "no config file at {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        debug!("loaded license config from {}", path.display());
        Self::trimmed(&config.license_key).validated()
    }

    /// `<config dir>/machinekey/config.toml`, or `~/.machinekey/config.toml`
    /// when the platform has no config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("machinekey").join(CONFIG_FILE),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".machinekey")
                .join(CONFIG_FILE),
        }
    }

    fn validated(self) -> LicenseResult<Self> {
        if self.license_key.is_empty() {
            return Err(LicenseError::Config("license_key is empty".into()));
        }
        Ok(self)
    }
}

fn resolve(env_value: Option<String>, path: Option<&Path>) -> LicenseResult<LicenseConfig> {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        debug!("using license key from {LICENSE_KEY_ENV}");
        return Ok(LicenseConfig::trimmed(&value));
    }

    match path {
        Some(path) => LicenseConfig::load_from(path),
        None => LicenseConfig::load_from(&LicenseConfig::default_path()),
    }
}

//
//  gh-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the `ghr` settings file and turns it into client
//! [`Credentials`]. The token itself is never stored here; it comes from the
//! environment or the system keyring (see [`crate::auth`]).
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/ghr/config.toml`
//! - **macOS**: `~/Library/Application Support/ghr/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\ghr\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! base_url = "https://github.example.com/api/v3"
//! timeout_secs = 10
//! error_message = "GitHub request failed"
//! ```
//!
//! Every key is optional. Command-line flags override the file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gh_rest::api::GitHubClient;
//! use gh_rest::config::Config;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut config = Config::load()?;
//! config.set("timeout_secs", "5".to_string())?;
//! config.save()?;
//!
//! let client = GitHubClient::from_config(&config, "ghp_example")?;
//! # Ok(())
//! # }
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::auth::Credentials;

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: [&str; 3] = ["base_url", "timeout_secs", "error_message"];

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
}

/// The `[core]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// API endpoint; the public API when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Message used when a failed response carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of `config.toml` in the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.core.timeout_secs.map(Duration::from_secs)
    }

    /// Builds client credentials for `token` from the `[core]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when `token` is blank.
    pub fn credentials(&self, token: impl Into<String>) -> Result<Credentials, ApiError> {
        let mut credentials = Credentials::new(token)?;
        if let Some(base_url) = &self.core.base_url {
            credentials = credentials.with_base_url(base_url.as_str());
        }
        if let Some(timeout) = self.timeout() {
            credentials = credentials.with_timeout(timeout);
        }
        if let Some(message) = &self.core.error_message {
            credentials = credentials.with_error_message(message.as_str());
        }
        Ok(credentials)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base_url" => self.core.base_url.clone(),
            "timeout_secs" => self.core.timeout_secs.map(|t| t.to_string()),
            "error_message" => self.core.error_message.clone(),
            _ => None,
        }
    }

    /// Sets a `[core]` key from its string form.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys and on a `timeout_secs` that is not a positive
    /// integer.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "base_url" => self.core.base_url = Some(value),
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("timeout_secs must be a number, got '{}'", value))?;
                if secs == 0 {
                    bail!("timeout_secs must be greater than zero");
                }
                self.core.timeout_secs = Some(secs);
            }
            "error_message" => self.core.error_message = Some(value),
            _ => bail!(
                "Unknown configuration key '{}' (expected one of: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("base_url", "https://github.example.com/api/v3".to_string()).unwrap();
        config.set("timeout_secs", "10".to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("timeout_secs").as_deref(), Some("10"));
        assert_eq!(loaded.get("error_message"), None);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[core\nbase_url = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("timeout_secs", "soon".to_string()).is_err());
        assert!(config.set("timeout_secs", "0".to_string()).is_err());
        assert!(config.set("editor", "vim".to_string()).is_err());
    }

    #[test]
    fn test_credentials_from_core_section() {
        let config: Config = toml::from_str(
            r#"
            [core]
            base_url = "https://github.example.com/api/v3/"
            timeout_secs = 5
            error_message = "GitHub request failed"
            "#,
        )
        .unwrap();

        let credentials = config.credentials("abc123").unwrap();
        assert_eq!(credentials.base_url(), "https://github.example.com/api/v3");
        assert_eq!(credentials.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(credentials.error_message(), Some("GitHub request failed"));
    }

    #[test]
    fn test_credentials_defaults() {
        let credentials = Config::default().credentials("abc123").unwrap();
        assert_eq!(credentials.base_url(), crate::auth::DEFAULT_BASE_URL);
        assert_eq!(credentials.timeout(), None);
        assert!(Config::default().credentials(" ").is_err());
    }
}

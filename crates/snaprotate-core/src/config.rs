//! Application configuration management.
//!
//! Configuration comes from an optional JSON file at
//! `~/.config/snaprotate/config.json` (or the file named by
//! `SNAPROTATE_CONFIG`), with `SNAPROTATE_*` environment variables layered
//! on top. Credentials are validated once, before any request is made.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{API_BASE_URL, AUTH_URL, REQUEST_TIMEOUT_SECS};
use crate::auth::Credentials;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "snaprotate";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Log file name inside the cache directory
const LOG_FILE: &str = "snaprotate.log";

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "SNAPROTATE_CONFIG";

pub const CLIENT_ID_ENV: &str = "SNAPROTATE_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "SNAPROTATE_CLIENT_SECRET";
pub const API_USER_ENV: &str = "SNAPROTATE_API_USER";
pub const API_PASSWORD_ENV: &str = "SNAPROTATE_API_PASSWORD";
pub const AUTH_URL_ENV: &str = "SNAPROTATE_AUTH_URL";
pub const API_URL_ENV: &str = "SNAPROTATE_API_URL";
pub const TIMEOUT_ENV: &str = "SNAPROTATE_TIMEOUT_SECS";
pub const LOG_FILE_ENV: &str = "SNAPROTATE_LOG_FILE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing credentials: set {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Invalid request timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// No `Debug` derive: the struct carries the client secret and API password.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_user: Option<String>,
    pub api_password: Option<String>,
    pub auth_url: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    /// Raw `SNAPROTATE_TIMEOUT_SECS`, validated by `request_timeout`
    #[serde(skip)]
    timeout_env: Option<String>,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Overlay values from `lookup`, which maps an env var name to its value.
    /// Values are stored as given; `credentials` and `request_timeout` validate them.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |slot: &mut Option<String>, key: &str| {
            if let Some(value) = lookup(key) {
                *slot = Some(value);
            }
        };
        set(&mut self.client_id, CLIENT_ID_ENV);
        set(&mut self.client_secret, CLIENT_SECRET_ENV);
        set(&mut self.api_user, API_USER_ENV);
        set(&mut self.api_password, API_PASSWORD_ENV);
        set(&mut self.auth_url, AUTH_URL_ENV);
        set(&mut self.api_url, API_URL_ENV);
        set(&mut self.timeout_env, TIMEOUT_ENV);
        if let Some(path) = lookup(LOG_FILE_ENV) {
            self.log_file = Some(PathBuf::from(path));
        }
    }

    /// Validated credential set. Blank values count as missing.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }

        let fields = [
            (CLIENT_ID_ENV, present(&self.client_id)),
            (CLIENT_SECRET_ENV, present(&self.client_secret)),
            (API_USER_ENV, present(&self.api_user)),
            (API_PASSWORD_ENV, present(&self.api_password)),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect();

        match fields {
            [(_, Some(id)), (_, Some(secret)), (_, Some(user)), (_, Some(password))] => {
                Ok(Credentials::new(id, secret, user, password))
            }
            _ => Err(ConfigError::MissingCredentials(missing)),
        }
    }

    pub fn auth_url(&self) -> &str {
        self.auth_url.as_deref().unwrap_or(AUTH_URL)
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(API_BASE_URL)
    }

    /// Request timeout: env override, else file value, else the default
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        let secs = match self.timeout_env {
            Some(ref raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            None => self.timeout_secs,
        };
        match secs {
            Some(0) => Err(ConfigError::InvalidTimeout("0".to_string())),
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
        }
    }

    /// Log file location: configured path, else `<cache_dir>/snaprotate/snaprotate.log`
    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.log_file {
            return Ok(path.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join(LOG_FILE))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

//! Startup configuration for the bookey app.
//!
//! Values are resolved from defaults, then an optional `bookey.ron` in the
//! working directory, then the `BOOKEY_BACKEND_URL` environment variable.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bookey_engine::{ServiceError, ServiceSettings, DEFAULT_BASE_URL};
use bookey_logging::bookey_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "bookey.ron";
pub const BASE_URL_ENV: &str = "BOOKEY_BACKEND_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid service base url: {0}")]
    InvalidBaseUrl(#[from] ServiceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    /// Log to `./bookey.log` instead of the terminal.
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            log_to_file: true,
        }
    }
}

impl AppConfig {
    /// Loads `bookey.ron` from `dir` if present and applies the environment.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let file = read_config_file(&dir.join(CONFIG_FILENAME))?;
        Ok(Self::resolve(file, std::env::var(BASE_URL_ENV).ok()))
    }

    /// Empty values fall through to the next source.
    pub fn resolve(file: Option<AppConfig>, env_base_url: Option<String>) -> Self {
        let mut config = file.unwrap_or_default();
        if config.base_url.trim().is_empty() {
            config.base_url = DEFAULT_BASE_URL.to_string();
        }
        if let Some(base_url) = env_base_url.filter(|value| !value.trim().is_empty()) {
            bookey_info!("Using service base url from {}", BASE_URL_ENV);
            config.base_url = base_url;
        }
        config.base_url = config.base_url.trim().to_string();
        config
    }

    pub fn service_settings(&self) -> Result<ServiceSettings, ConfigError> {
        let mut settings = ServiceSettings::new(&self.base_url)?;
        settings.connect_timeout = Duration::from_millis(self.connect_timeout_ms);
        settings.request_timeout = Duration::from_millis(self.request_timeout_ms);
        Ok(settings)
    }
}

fn read_config_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    bookey_info!("Loaded configuration from {:?}", path);
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.log_to_file);
    }

    #[test]
    fn env_overrides_file() {
        let file = AppConfig {
            base_url: "http://file.example:8080".to_string(),
            ..AppConfig::default()
        };
        let config = AppConfig::resolve(Some(file), Some("https://env.example".to_string()));
        assert_eq!(config.base_url, "https://env.example");
    }

    #[test]
    fn empty_values_fall_back() {
        let file = AppConfig {
            base_url: "  ".to_string(),
            ..AppConfig::default()
        };
        let config = AppConfig::resolve(Some(file), Some(String::new()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "(base_url: \"http://127.0.0.1:4000\", request_timeout_ms: 500)",
        )
        .unwrap();

        let file = read_config_file(&dir.path().join(CONFIG_FILENAME))
            .unwrap()
            .expect("config file");
        assert_eq!(file.base_url, "http://127.0.0.1:4000");
        assert_eq!(file.request_timeout_ms, 500);
        assert_eq!(file.connect_timeout_ms, 10_000);

        let settings = file.service_settings().unwrap();
        assert_eq!(settings.request_timeout, Duration::from_millis(500));
        assert_eq!(settings.base_url.as_str(), "http://127.0.0.1:4000/");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config_file(&dir.path().join(CONFIG_FILENAME))
            .unwrap()
            .is_none());
    }

    #[test]
    fn broken_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(base_url: ").unwrap();
        assert!(matches!(
            read_config_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = AppConfig::resolve(None, Some("localhost 3000".to_string()));
        assert!(matches!(
            config.service_settings(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}

//! Application configuration.
//!
//! # Responsibility
//! - Carry app metadata, feature flags, API settings, and storage limits
//!   with their built-in defaults.
//! - Load overrides from a TOML file when one exists.
//!
//! # Invariants
//! - A missing config file means defaults, not an error.
//! - Every section may be given partially; omitted fields keep defaults.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;

/// Configuration error for file loading and TOML parsing.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read config file: {err}"),
            Self::Toml(err) => write!(f, "invalid config TOML: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Toml(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppInfo,
    pub features: Features,
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(raw.as_str()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// App metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "Personal AI Assistant".to_owned(),
            version: "1.0.0".to_owned(),
            description: "A professional-grade personal AI assistant mobile app".to_owned(),
        }
    }
}

/// Feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub ai_chat: bool,
    pub task_management: bool,
    pub calendar: bool,
    pub reminders: bool,
    pub offline_mode: bool,
    /// Not yet implemented.
    pub push_notifications: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            ai_chat: true,
            task_management: true,
            calendar: true,
            reminders: true,
            offline_mode: true,
            push_notifications: false,
        }
    }
}

/// Backend API settings, declared for future integration; no in-process
/// consumer yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: 30_000,
        }
    }
}

/// Local storage limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub enable_encryption: bool,
    pub max_cache_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enable_encryption: false,
            max_cache_size_bytes: 50 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};

    #[test]
    fn defaults_match_shipped_values() {
        let config = AppConfig::default();

        assert_eq!(config.app.name, "Personal AI Assistant");
        assert_eq!(config.app.version, "1.0.0");
        assert!(config.features.ai_chat);
        assert!(!config.features.push_notifications);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.timeout_ms, 30_000);
        assert!(!config.storage.enable_encryption);
        assert_eq!(config.storage.max_cache_size_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_omitted_fields() {
        let raw = r#"
            [app]
            name = "Daymate Dev"

            [features]
            push_notifications = true
        "#;

        let config = AppConfig::from_toml(raw).unwrap();
        assert_eq!(config.app.name, "Daymate Dev");
        assert_eq!(config.app.version, "1.0.0");
        assert!(config.features.push_notifications);
        assert!(config.features.offline_mode);
        assert_eq!(config.api.timeout_ms, 30_000);
    }

    #[test]
    fn invalid_toml_is_reported() {
        match AppConfig::from_toml("app = ") {
            Err(ConfigError::Toml(_)) => {}
            other => panic!("expected Toml error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("definitely/missing/daymate.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}

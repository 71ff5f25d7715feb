use crate::{TaskdashError, TaskdashResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_IMPORT_DELAY_MS: u64 = 1000;

pub const API_URL_ENV: &str = "TASKDASH_API_URL";
pub const SETTINGS_ENV: &str = "TASKDASH_SETTINGS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the REST backend, including the `/api` path.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Location of the local settings file.
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Simulated latency of the ticket import "Test Connection" check.
    #[serde(default)]
    pub import_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskdash/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskdash/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskdash\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config file (if any) and applies environment overrides.
    ///
    /// A malformed config file is logged and ignored rather than aborting startup.
    pub fn load() -> Self {
        let base = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn load_from(path: &Path) -> TaskdashResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TaskdashError::Config(e.to_string()))
    }

    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|s| !s.trim().is_empty()) {
            self.api_url = Some(url);
        }
        if let Some(path) = lookup(SETTINGS_ENV).filter(|s| !s.trim().is_empty()) {
            self.settings_path = Some(PathBuf::from(path));
        }
        self
    }

    pub fn effective_api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn effective_settings_path(&self) -> Option<PathBuf> {
        self.settings_path
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("taskdash").join("settings.json")))
    }

    pub fn effective_request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn effective_import_delay_ms(&self) -> u64 {
        self.import_delay_ms.unwrap_or(DEFAULT_IMPORT_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_api_url(), DEFAULT_API_URL);
        assert_eq!(config.effective_request_timeout_secs(), 15);
        assert_eq!(config.effective_import_delay_ms(), 1000);
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"http://tasks.internal:9000/api\"\nrequest_timeout_secs = 3\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.effective_api_url(), "http://tasks.internal:9000/api");
        assert_eq!(config.effective_request_timeout_secs(), 3);
        assert!(config.settings_path.is_none());
    }

    #[test]
    fn test_load_from_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, TaskdashError::Config(_)));
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = [
            (API_URL_ENV, "http://override/api"),
            (SETTINGS_ENV, "/tmp/settings.json"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig {
            api_url: Some("http://file/api".to_string()),
            ..Default::default()
        }
        .with_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.effective_api_url(), "http://override/api");
        assert_eq!(
            config.effective_settings_path(),
            Some(PathBuf::from("/tmp/settings.json"))
        );
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = AppConfig::default().with_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.effective_api_url(), DEFAULT_API_URL);
    }
}

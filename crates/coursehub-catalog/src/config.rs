//! # CourseHub Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     COURSEHUB_API_URL=http://10.0.0.5:3005                             │
//! │     COURSEHUB_TIMEOUT_SECS=10                                          │
//! │     COURSEHUB_IN_PROGRESS_COUNT=6                                      │
//! │     COURSEHUB_ALLOW_DUPLICATES=false                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/coursehub/coursehub.toml (Linux)                         │
//! │     ~/Library/Application Support/com.coursehub.app/coursehub.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "http://192.168.202.132:3005"
//! timeout_secs = 30
//! in_progress_count = 6
//!
//! [cart]
//! allow_duplicates = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use coursehub_core::CartConfig;

use crate::error::{CatalogError, CatalogResult};

/// Path of the course list, appended to `base_url`.
pub const COURSES_PATH: &str = "/api/courses";

// =============================================================================
// Catalog Settings
// =============================================================================

/// Where and how to fetch the course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Scheme, host and port of the course API, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// How many leading courses the home screen shows as "Course in progress".
    #[serde(default = "default_in_progress_count")]
    pub in_progress_count: usize,
}

fn default_base_url() -> String {
    "http://192.168.202.132:3005".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_in_progress_count() -> usize {
    6
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            in_progress_count: default_in_progress_count(),
        }
    }
}

impl CatalogSettings {
    /// Full URL of the course list.
    pub fn courses_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), COURSES_PATH)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseHubConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub cart: CartConfig,
}

impl CourseHubConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (coursehub.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let url = &self.catalog.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("COURSEHUB_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.catalog.base_url = url;
        }

        if let Ok(timeout) = std::env::var("COURSEHUB_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(t) => self.catalog.timeout_secs = t,
                Err(_) => warn!(value = %timeout, "Ignoring invalid COURSEHUB_TIMEOUT_SECS"),
            }
        }

        if let Ok(count) = std::env::var("COURSEHUB_IN_PROGRESS_COUNT") {
            match count.parse::<usize>() {
                Ok(c) => self.catalog.in_progress_count = c,
                Err(_) => warn!(value = %count, "Ignoring invalid COURSEHUB_IN_PROGRESS_COUNT"),
            }
        }

        if let Ok(flag) = std::env::var("COURSEHUB_ALLOW_DUPLICATES") {
            match flag.to_lowercase().as_str() {
                "true" | "1" | "yes" => self.cart.allow_duplicates = true,
                "false" | "0" | "no" => self.cart.allow_duplicates = false,
                _ => warn!(value = %flag, "Unknown COURSEHUB_ALLOW_DUPLICATES value"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "coursehub", "app")
            .map(|dirs| dirs.config_dir().join("coursehub.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CourseHubConfig::default();
        assert_eq!(config.catalog.base_url, "http://192.168.202.132:3005");
        assert_eq!(config.catalog.in_progress_count, 6);
        assert_eq!(config.catalog.timeout_secs, 30);
        assert!(config.cart.allow_duplicates);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_courses_url() {
        let mut settings = CatalogSettings::default();
        settings.base_url = "http://localhost:3005/".to_string();
        assert_eq!(settings.courses_url(), "http://localhost:3005/api/courses");
    }

    #[test]
    fn test_config_validation() {
        let mut config = CourseHubConfig::default();

        config.catalog.base_url = "ftp://nope".to_string();
        assert!(config.validate().is_err());

        config.catalog.base_url = "https://api.example.com".to_string();
        config.catalog.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.catalog.timeout_secs = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CourseHubConfig = toml::from_str(
            r#"
            [cart]
            allow_duplicates = false
            "#,
        )
        .unwrap();

        assert!(!config.cart.allow_duplicates);
        assert_eq!(config.catalog, CatalogSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[catalog]\nbase_url = \"http://127.0.0.1:9999\"\nin_progress_count = 3"
        )
        .unwrap();

        let config = CourseHubConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.catalog.in_progress_count, 3);
        assert_eq!(config.catalog.timeout_secs, 30);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog\nbase_url = ").unwrap();

        let err = CourseHubConfig::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigLoad(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CourseHubConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[cart]"));
    }
}

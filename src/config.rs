/// Centralized configuration for the contact form client
/// Single source of truth for endpoints, limits and feature flags

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Production contact endpoint
pub const PRODUCTION_API_URL: &str =
    "https://9rau1nnkg3.execute-api.us-east-1.amazonaws.com/prod/contact";

/// Development contact endpoint (dev backend stack)
pub const DEVELOPMENT_API_URL: &str =
    "https://cdmwb9tdlj.execute-api.us-east-1.amazonaws.com/prod/contact";

/// Default auto-dismiss delay for notifications, in milliseconds
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 5000;

/// Default submission deadline, in milliseconds
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 30000;

/// App name
pub const APP_NAME: &str = "folio-contact";

/// Env var that overrides the data directory
pub const DATA_DIR_ENV: &str = "FOLIO_CONTACT_DATA_DIR";

/// Deployment environment tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Form validation limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FormLimits {
    pub min_message_length: usize,
    pub max_message_length: usize,
    pub max_name_length: usize,
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

fn default_required_fields() -> Vec<String> {
    vec!["name".to_string(), "email".to_string(), "message".to_string()]
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            min_message_length: 10,
            max_message_length: 1000,
            max_name_length: 100,
            required_fields: default_required_fields(),
        }
    }
}

/// Environment-specific settings consumed by the form controller.
///
/// Field names serialize to the upper-snake keys used by the site's
/// `config.js` files, so a dumped browser config loads as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub contact_api_url: String,
    pub environment: Environment,
    #[serde(default)]
    pub enable_analytics: bool,
    #[serde(default = "default_true")]
    pub enable_error_logging: bool,
    #[serde(default)]
    pub enable_debug_mode: bool,
    #[serde(default)]
    pub contact_form: FormLimits,
    #[serde(default = "default_notification_timeout")]
    pub notification_timeout: u64,
    #[serde(default = "default_submit_timeout")]
    pub form_submit_timeout: u64,
    #[serde(default, rename = "GOOGLE_ANALYTICS_ID")]
    pub analytics_id: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_notification_timeout() -> u64 {
    DEFAULT_NOTIFICATION_TIMEOUT_MS
}

fn default_submit_timeout() -> u64 {
    DEFAULT_SUBMIT_TIMEOUT_MS
}

impl Config {
    /// Settings shipped with the production site
    pub fn production() -> Self {
        Self {
            contact_api_url: PRODUCTION_API_URL.to_string(),
            environment: Environment::Production,
            enable_analytics: true,
            enable_error_logging: true,
            enable_debug_mode: false,
            contact_form: FormLimits::default(),
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            form_submit_timeout: DEFAULT_SUBMIT_TIMEOUT_MS,
            analytics_id: None,
        }
    }

    /// Settings for the dev backend: analytics off, debug logging on
    pub fn development() -> Self {
        Self {
            contact_api_url: DEVELOPMENT_API_URL.to_string(),
            environment: Environment::Development,
            enable_analytics: false,
            enable_debug_mode: true,
            ..Self::production()
        }
    }

    /// Staging talks to the production endpoint without analytics
    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            enable_analytics: false,
            ..Self::production()
        }
    }

    /// Hardcoded record used when no configuration was supplied
    pub fn fallback() -> Self {
        Self::production()
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Staging => Self::staging(),
            Environment::Production => Self::production(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.form_submit_timeout)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Get the app data directory
pub fn get_app_data_dir() -> Result<PathBuf, ConfigError> {
    // Check if custom data dir is set via environment variable
    if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(ConfigError::DataDir)
}

/// Location of the persisted config file
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_app_data_dir()?.join("config.json"))
}

/// Load config from disk
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save config to disk, creating the parent directory if needed
pub fn save_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_where_expected() {
        let prod = Config::production();
        let dev = Config::development();

        assert!(prod.is_production());
        assert!(dev.is_development());
        assert!(prod.enable_analytics);
        assert!(!dev.enable_analytics);
        assert!(dev.enable_debug_mode);
        assert_ne!(prod.contact_api_url, dev.contact_api_url);
        assert_eq!(prod.contact_form, dev.contact_form);
        assert_eq!(prod.form_submit_timeout, dev.form_submit_timeout);
    }

    #[test]
    fn test_fallback_shape() {
        let cfg = Config::fallback();
        assert_eq!(cfg.contact_api_url, PRODUCTION_API_URL);
        assert_eq!(cfg.contact_form.min_message_length, 10);
        assert_eq!(cfg.contact_form.max_message_length, 1000);
        assert_eq!(cfg.contact_form.max_name_length, 100);
        assert_eq!(cfg.submit_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.notification_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("Staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert!(matches!(
            "qa".parse::<Environment>(),
            Err(ConfigError::UnknownEnvironment(s)) if s == "qa"
        ));
    }

    #[test]
    fn test_parses_browser_config_keys() {
        let json = r#"{
            "CONTACT_API_URL": "https://example.test/contact",
            "ENVIRONMENT": "staging",
            "ENABLE_ANALYTICS": false,
            "CONTACT_FORM": {
                "MIN_MESSAGE_LENGTH": 5,
                "MAX_MESSAGE_LENGTH": 50,
                "MAX_NAME_LENGTH": 20,
                "REQUIRED_FIELDS": ["name", "email", "message"]
            },
            "FORM_SUBMIT_TIMEOUT": 1500,
            "GOOGLE_ANALYTICS_ID": null
        }"#;

        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.environment, Environment::Staging);
        assert_eq!(cfg.contact_form.max_name_length, 20);
        assert_eq!(cfg.submit_timeout(), Duration::from_millis(1500));
        // Omitted keys take their defaults
        assert_eq!(cfg.notification_timeout, DEFAULT_NOTIFICATION_TIMEOUT_MS);
        assert!(cfg.enable_error_logging);
        assert!(cfg.analytics_id.is_none());
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let cfg = Config::development();
        save_config(&path, &cfg).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

use anyhow::{Context, Result};
use fedsaml_client::ClientOptions;
use fedsaml_core::{Catalog, TranslationDictionary, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `fedsaml` configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Admin API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Display strings
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Where the admin backend lives and how to reach it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the admin backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional bearer token for the admin API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// License status endpoint
    #[serde(default = "default_license_path")]
    pub license_path: String,
}

/// Locale selection and string overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default = "default_locale")]
    pub locale: String,

    /// locale -> key -> string, merged over the built-in strings
    #[serde(default)]
    pub overrides: HashMap<String, TranslationDictionary>,
}

fn default_base_url() -> String {
    ClientOptions::default().base_url
}

fn default_timeout_secs() -> u64 {
    ClientOptions::default().timeout_secs
}

fn default_license_path() -> String {
    ClientOptions::default().license_path
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
            license_path: default_license_path(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            overrides: HashMap::new(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            auth_token: self.auth_token.clone(),
            license_path: self.license_path.clone(),
        }
    }
}

impl I18nConfig {
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.locale.clone()).with_overrides(self.overrides.clone())
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default locations in order:
    /// 1. ./fedsaml.toml (current directory)
    /// 2. /etc/fedsaml/config.toml (system-wide)
    /// 3. Built-in defaults
    pub fn load_default() -> Result<Self> {
        let paths = vec![
            PathBuf::from("./fedsaml.toml"),
            PathBuf::from("/etc/fedsaml/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        tracing::info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Render the default configuration as TOML
    pub fn example() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize example config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedsaml_core::Translator;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5225");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.i18n.locale, "en");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://jackson.example.com"
auth_token = "s3cret"

[i18n]
locale = "de"

[i18n.overrides.de]
create_app = "App erstellen"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://jackson.example.com");
        assert_eq!(config.api.auth_token.as_deref(), Some("s3cret"));
        assert_eq!(config.api.license_path, "/api/admin/license");

        let options = config.api.client_options();
        assert_eq!(options.timeout_secs, 30);

        let catalog = config.i18n.catalog();
        assert_eq!(catalog.translate("create_app"), "App erstellen");
        assert_eq!(catalog.translate("back"), "Back");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_example_round_trips() {
        let example = Config::example().unwrap();
        assert!(example.contains("base_url"));
        let parsed: Config = toml::from_str(&example).unwrap();
        assert_eq!(parsed.api.timeout_secs, 30);
    }
}

//! Server configuration
//!
//! Read from the process environment (after loading `.env` if present).
//! The standalone API binary can override values with CLI flags.

use std::time::Duration;

use thiserror::Error;

use crate::i18n::Locale;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be an http(s) URL, got '{value}'")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote REST API, without trailing slash
    pub backend_api_url: String,
    /// Add `Secure` to the auth cookie (enable behind HTTPS)
    pub cookie_secure: bool,
    /// Locale used when negotiation finds nothing supported
    pub default_locale: Locale,
    pub request_timeout: Duration,
    /// Listening port of the standalone API binary
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_api_url: DEFAULT_BACKEND_URL.to_string(),
            cookie_secure: false,
            default_locale: Locale::En,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(url) = lookup("BACKEND_API_URL") {
            config.backend_api_url = normalize_base_url("BACKEND_API_URL", &url)?;
        }

        if let Some(value) = lookup("COOKIE_SECURE") {
            config.cookie_secure = parse_bool("COOKIE_SECURE", &value)?;
        }

        if let Some(value) = lookup("DEFAULT_LOCALE") {
            config.default_locale = Locale::from_tag(&value).ok_or(ConfigError::InvalidValue {
                key: "DEFAULT_LOCALE",
                value,
            })?;
        }

        if let Some(value) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidValue { key: "REQUEST_TIMEOUT_SECS", value })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?;
        }

        Ok(config)
    }

    pub fn with_backend_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.backend_api_url = normalize_base_url("BACKEND_API_URL", url)?;
        Ok(self)
    }
}

fn normalize_base_url(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { key, value: value.to_string() })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BACKEND_API_URL", "https://api.medilink.health/v1/"),
            ("COOKIE_SECURE", "true"),
            ("DEFAULT_LOCALE", "fr-FR"),
            ("REQUEST_TIMEOUT_SECS", "10"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.backend_api_url, "https://api.medilink.health/v1");
        assert!(config.cookie_secure);
        assert_eq!(config.default_locale, Locale::Fr);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("BACKEND_API_URL", "ftp://x")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("COOKIE_SECURE", "maybe")])),
            Err(ConfigError::InvalidValue { key: "COOKIE_SECURE", .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidValue { key: "REQUEST_TIMEOUT_SECS", .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("DEFAULT_LOCALE", "de")])),
            Err(ConfigError::InvalidValue { key: "DEFAULT_LOCALE", .. })
        ));
    }
}

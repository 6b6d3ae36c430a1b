/*
 * Responsibility
 * - 環境変数からの設定読み込み (PORT, APP_ENV, token extraction options, HTTP limits)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::extract::{ExtractOptions, KeySetting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Transport limits applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct HttpPolicy {
    pub body_limit_bytes: usize,
    pub timeout: Duration,
}

impl Default for HttpPolicy {
    fn default() -> Self {
        Self {
            body_limit_bytes: 1024 * 1024,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub extract_options: ExtractOptions,
    // Reject requests that carry no token at all.
    pub token_required: bool,

    pub http: HttpPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key → value source (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let mut extract_options = match lookup("TOKEN_OPTIONS") {
            Some(json) => serde_json::from_str::<ExtractOptions>(&json)
                .map_err(|_| ConfigError::Invalid("TOKEN_OPTIONS"))?,
            None => ExtractOptions::default(),
        };
        if let Some(raw) = lookup("TOKEN_URL_KEY") {
            extract_options.url_key = KeySetting::from_env_value(&raw);
        }
        if let Some(raw) = lookup("TOKEN_HEADER_KEY") {
            extract_options.header_key = KeySetting::from_env_value(&raw);
        }
        if let Some(raw) = lookup("TOKEN_COOKIE_KEY") {
            extract_options.cookie_key = KeySetting::from_env_value(&raw);
        }
        if let Some(token_type) = lookup("TOKEN_TYPE") {
            extract_options.token_type = Some(token_type);
        }

        let token_required = parse_or(&lookup, "TOKEN_REQUIRED", false)?;

        let defaults = HttpPolicy::default();
        let body_limit_bytes = parse_or(&lookup, "HTTP_BODY_LIMIT_BYTES", defaults.body_limit_bytes)?;
        let timeout_seconds = parse_or(&lookup, "HTTP_TIMEOUT_SECONDS", defaults.timeout.as_secs())?;
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"));
        }

        Ok(Self {
            addr,
            app_env,
            extract_options,
            token_required,
            http: HttpPolicy {
                body_limit_bytes,
                timeout: Duration::from_secs(timeout_seconds),
            },
        })
    }
}

// Unset → default, set but unparsable → Invalid.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.extract_options, ExtractOptions::default());
        assert!(!config.token_required);
        assert_eq!(config.http.body_limit_bytes, 1024 * 1024);
        assert_eq!(config.http.timeout, Duration::from_secs(30));
    }

    #[test]
    fn token_keys_from_env() {
        let config = config_from(&[
            ("TOKEN_URL_KEY", "false"),
            ("TOKEN_HEADER_KEY", "x-access-token"),
            ("TOKEN_TYPE", "Bearer"),
            ("TOKEN_REQUIRED", "true"),
        ])
        .unwrap();

        assert_eq!(config.extract_options.url_key(), None);
        assert_eq!(config.extract_options.header_key(), Some("x-access-token"));
        assert_eq!(config.extract_options.cookie_key(), Some("token"));
        assert_eq!(config.extract_options.token_type.as_deref(), Some("Bearer"));
        assert!(config.token_required);
    }

    #[test]
    fn individual_variables_override_json_options() {
        let config = config_from(&[
            ("TOKEN_OPTIONS", r#"{"cookieKey": false, "urlKey": "jwt"}"#),
            ("TOKEN_URL_KEY", "access_token"),
        ])
        .unwrap();

        assert_eq!(config.extract_options.url_key(), Some("access_token"));
        assert_eq!(config.extract_options.cookie_key(), None);
    }

    #[test]
    fn production_env() {
        let config = config_from(&[("APP_ENV", "PROD")]).unwrap();
        assert!(config.app_env.is_production());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::Invalid("PORT"))
        ));
        assert!(matches!(
            config_from(&[("TOKEN_REQUIRED", "yes")]),
            Err(ConfigError::Invalid("TOKEN_REQUIRED"))
        ));
        assert!(matches!(
            config_from(&[("TOKEN_OPTIONS", "{not json")]),
            Err(ConfigError::Invalid("TOKEN_OPTIONS"))
        ));
        assert!(matches!(
            config_from(&[("HTTP_TIMEOUT_SECONDS", "0")]),
            Err(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"))
        ));
    }
}

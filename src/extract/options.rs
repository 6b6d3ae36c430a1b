/*
 * Responsibility
 * - Extraction options supplied once at startup (keys per source + token type)
 * - Accepts loosely typed JSON the same way the key resolver does
 */
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::key::KeySetting;

pub const DEFAULT_URL_KEY: &str = "token";
pub const DEFAULT_HEADER_KEY: &str = "authorization";
pub const DEFAULT_COOKIE_KEY: &str = "token";

// Only a JSON string is a token type; anything else means "no token type".
fn deserialize_token_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Options controlling where a token is looked up.
///
/// ```
/// use token_extract::extract::{ExtractOptions, KeySetting};
///
/// let options: ExtractOptions =
///     serde_json::from_str(r#"{"urlKey": false, "tokenType": "Bearer"}"#).unwrap();
/// assert_eq!(options.url_key, KeySetting::Disabled);
/// assert_eq!(options.token_type.as_deref(), Some("Bearer"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    pub url_key: KeySetting,
    pub header_key: KeySetting,
    pub cookie_key: KeySetting,
    #[serde(deserialize_with = "deserialize_token_type")]
    pub token_type: Option<String>,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url_key(mut self, key: KeySetting) -> Self {
        self.url_key = key;
        self
    }

    pub fn with_header_key(mut self, key: KeySetting) -> Self {
        self.header_key = key;
        self
    }

    pub fn with_cookie_key(mut self, key: KeySetting) -> Self {
        self.cookie_key = key;
        self
    }

    /// Require the header value to start with `<token_type>` followed by whitespace.
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }

    pub fn url_key(&self) -> Option<&str> {
        self.url_key.resolve(DEFAULT_URL_KEY)
    }

    pub fn header_key(&self) -> Option<&str> {
        self.header_key.resolve(DEFAULT_HEADER_KEY)
    }

    pub fn cookie_key(&self) -> Option<&str> {
        self.cookie_key.resolve(DEFAULT_COOKIE_KEY)
    }
}

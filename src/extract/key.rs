/*
 * Responsibility
 * - query / header / cookie の各 key 設定を 3 値で表す (Disabled / Custom / Default)
 * - 設定値 (JSON, env) から KeySetting への寛容な変換
 */
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Where a token source looks, or whether it looks at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeySetting {
    /// Configured as `false`: the source is skipped.
    Disabled,
    /// Configured as a string: look under this name.
    Custom(String),
    /// Not configured (or configured with a meaningless value).
    #[default]
    Default,
}

impl KeySetting {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Loose conversion from a configuration value.
    ///
    /// `false` disables, a string overrides, everything else falls back to the default.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(false) => Self::Disabled,
            Value::String(s) => Self::Custom(s.clone()),
            _ => Self::Default,
        }
    }

    /// Conversion from an environment variable value. Only the literal `false` disables.
    pub fn from_env_value(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("false") {
            Self::Disabled
        } else {
            Self::Custom(raw.to_string())
        }
    }

    /// Resolve the effective key name. `None` means the source is disabled.
    pub fn resolve<'a>(&'a self, default_name: &'a str) -> Option<&'a str> {
        match self {
            Self::Disabled => None,
            Self::Custom(name) => Some(name.as_str()),
            Self::Default => Some(default_name),
        }
    }
}

impl<'de> Deserialize<'de> for KeySetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn false_disables_the_source() {
        let setting = KeySetting::from_value(&json!(false));
        assert_eq!(setting, KeySetting::Disabled);
        assert_eq!(setting.resolve("token"), None);
    }

    #[test]
    fn string_overrides_the_default_name() {
        let setting = KeySetting::from_value(&json!("access_token"));
        assert_eq!(setting.resolve("token"), Some("access_token"));
    }

    #[test]
    fn other_values_fall_back_to_the_default_name() {
        for value in [json!(true), json!(null), json!(42), json!({"a": 1}), json!(["x"])] {
            let setting = KeySetting::from_value(&value);
            assert_eq!(setting, KeySetting::Default, "value: {value}");
            assert_eq!(setting.resolve("authorization"), Some("authorization"));
        }
    }

    #[test]
    fn env_values() {
        assert_eq!(KeySetting::from_env_value("false"), KeySetting::Disabled);
        assert_eq!(KeySetting::from_env_value(" FALSE "), KeySetting::Disabled);
        assert_eq!(
            KeySetting::from_env_value("jwt"),
            KeySetting::custom("jwt")
        );
    }
}

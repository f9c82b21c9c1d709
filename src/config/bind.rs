//! Credentials for the initial bind on a connection.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// DN and password used to bind. Both `None` means an anonymous bind.
///
/// Deserialization applies the same checks as [`BindConfig::from_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindConfig {
    pub dn: Option<String>,
    pub password: Option<String>,
}

impl BindConfig {
    pub const KEYS: [&'static str; 2] = ["dn", "password"];

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(dn: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            dn: Some(dn.into()),
            password: Some(password.into()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.dn.is_none()
    }

    /// Read a bind configuration object.
    ///
    /// Both `dn` and `password` must be present; each may be a string or
    /// `null`.
    pub fn from_value(config: &Value) -> ConfigResult<Self> {
        let object = config
            .as_object()
            .ok_or_else(|| ConfigError::invalid_value("bind", "object", config))?;

        for key in Self::KEYS {
            if !object.contains_key(key) {
                return Err(ConfigError::missing_key(key));
            }
        }

        Ok(Self {
            dn: optional_string(object, "dn")?,
            password: optional_string(object, "password")?,
        })
    }
}

impl<'de> Deserialize<'de> for BindConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn optional_string(
    object: &serde_json::Map<String, Value>,
    key: &str,
) -> ConfigResult<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::invalid_value(key, "string", other)),
    }
}

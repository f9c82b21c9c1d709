//! Settings for one directory server connection.

use super::bind::BindConfig;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 389;

/// Where a server lives, which part of the DIT it serves and how to bind.
///
/// Deserialization applies the same checks as [`ConnectionConfig::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionConfig {
    /// Hostname, or an LDAP URL for clients that accept one
    pub hostname: String,
    pub port: u16,
    /// DN considered the root of this server
    pub root: String,
    pub bind: BindConfig,
}

impl ConnectionConfig {
    pub fn new(hostname: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: DEFAULT_PORT,
            root: root.into(),
            bind: BindConfig::anonymous(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_bind(mut self, bind: BindConfig) -> Self {
        self.bind = bind;
        self
    }

    /// Read a connection object.
    ///
    /// Required keys: `hostname`, `root` (strings). Optional: `port` (a
    /// positive integer, default 389) and `bind` (an object, default
    /// anonymous).
    pub fn from_value(config: &Value) -> ConfigResult<Self> {
        let object = config
            .as_object()
            .ok_or_else(|| ConfigError::invalid_value("connection", "object", config))?;

        for key in ["hostname", "root"] {
            if !object.contains_key(key) {
                return Err(ConfigError::missing_key(key));
            }
        }

        let mut connection = Self::new(
            required_string(object, "hostname")?,
            required_string(object, "root")?,
        );

        if let Some(port) = object.get("port").filter(|v| !v.is_null()) {
            connection.port = port
                .as_u64()
                .filter(|&p| p > 0)
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| ConfigError::invalid_value("port", "positive integer", port))?;
        }

        if let Some(bind) = object.get("bind").filter(|v| !v.is_null()) {
            if !bind.is_object() {
                return Err(ConfigError::invalid_value("bind", "object", bind));
            }
            connection.bind = BindConfig::from_value(bind)?;
        }

        Ok(connection)
    }
}

impl<'de> Deserialize<'de> for ConnectionConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn required_string(object: &Map<String, Value>, key: &str) -> ConfigResult<String> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ConfigError::invalid_value(key, "string", other)),
        None => Err(ConfigError::missing_key(key)),
    }
}

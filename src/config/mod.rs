//! Configuration for directory connections and schema sources.
//!
//! Configuration is read from JSON documents. Every reader reports a missing
//! key with [`ConfigError::MissingKey`] and a value of the wrong shape with
//! [`ConfigError::InvalidValue`], including the type and rendering of what
//! was given.
//!
//! ```rust
//! use ldap_schema::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config: Config = r#"{
//!         "connections": {
//!             "main": {"hostname": "ldap.example.com", "root": "dc=example,dc=com"}
//!         },
//!         "schemas": [{"oid": "2.5.6.0", "names": "'top'"}]
//!     }"#.parse()?;
//!
//!     assert_eq!(config.connection("main")?.port, 389);
//!     assert_eq!(config.load_schema()?.len(), 1);
//!     Ok(())
//! }
//! ```

mod bind;
mod connection;

pub use bind::BindConfig;
pub use connection::{ConnectionConfig, DEFAULT_PORT};

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{SchemaLoader, SchemaModel};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Top-level configuration: named connections and schema definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub connections: BTreeMap<String, ConnectionConfig>,
    /// Raw schema element definitions, see [`crate::schema::definition`]
    pub schemas: Vec<Value>,
}

impl Config {
    /// Read a configuration object. Both keys are optional.
    pub fn from_value(config: &Value) -> ConfigResult<Self> {
        let object = config
            .as_object()
            .ok_or_else(|| ConfigError::invalid_value("config", "object", config))?;

        let mut connections = BTreeMap::new();
        if let Some(value) = object.get("connections").filter(|v| !v.is_null()) {
            let named = value
                .as_object()
                .ok_or_else(|| ConfigError::invalid_value("connections", "object", value))?;
            for (name, connection) in named {
                debug!("Reading configuration for connection '{}'", name);
                connections.insert(name.clone(), ConnectionConfig::from_value(connection)?);
            }
        }

        let schemas = match object.get("schemas").filter(|v| !v.is_null()) {
            None => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => return Err(ConfigError::invalid_value("schemas", "array", other)),
        };

        Ok(Self {
            connections,
            schemas,
        })
    }

    /// The configuration of the connection called `name`.
    pub fn connection(&self, name: &str) -> ConfigResult<&ConnectionConfig> {
        self.connections
            .get(name)
            .ok_or_else(|| ConfigError::UnknownConnection {
                name: name.to_string(),
            })
    }

    /// Name of the connection whose root DN is `root`, compared
    /// case-insensitively.
    pub fn connection_for_root(&self, root: &str) -> Option<&str> {
        self.connections
            .iter()
            .find(|(_, c)| c.root.eq_ignore_ascii_case(root))
            .map(|(name, _)| name.as_str())
    }

    /// Load the configured schema definitions into a model.
    ///
    /// Definitions that fail validation, or clash with an earlier one, are
    /// logged and skipped.
    pub fn load_schema(&self) -> ConfigResult<SchemaModel> {
        let report = SchemaLoader::new().load(&Value::Array(self.schemas.clone()))?;
        let (model, conflicts) = SchemaModel::from_report(report);
        if !conflicts.is_empty() {
            warn!("{} schema element(s) conflicted and were skipped", conflicts.len());
        }
        Ok(model)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

//! Loading batches of schema element definitions.
//!
//! A malformed definition aborts only its own element: the failure is
//! recorded with its position and loading carries on with the next one.

use super::element::NamedSchemaElement;
use crate::error::{SchemaError, SchemaResult};
use log::{info, warn};
use serde_json::Value;

/// A definition that could not be turned into a schema element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedElement {
    /// Position of the definition in the input array
    pub index: usize,
    pub error: SchemaError,
}

/// Outcome of loading a batch of definitions.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: Vec<NamedSchemaElement>,
    pub rejected: Vec<RejectedElement>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn total(&self) -> usize {
        self.loaded.len() + self.rejected.len()
    }
}

/// Loads arrays of JSON element definitions.
///
/// ```rust
/// use ldap_schema::schema::SchemaLoader;
/// use serde_json::json;
///
/// let report = SchemaLoader::new().load(&json!([
///     {"oid": "2.5.6.0", "names": "'top'"},
///     {"oid": "2.5.06.1", "names": "'alias'"},
/// ])).unwrap();
///
/// assert_eq!(report.loaded.len(), 1);
/// assert_eq!(report.rejected[0].index, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaLoader {
    stop_on_error: bool,
}

impl SchemaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at the first rejected definition instead of continuing.
    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    /// Load every definition in `definitions`, which must be a JSON array.
    pub fn load(&self, definitions: &Value) -> SchemaResult<LoadReport> {
        let entries = definitions.as_array().ok_or_else(|| {
            SchemaError::invalid_type("definitions", "array of element definitions", definitions)
        })?;
        Ok(self.load_all(entries))
    }

    /// Load definitions from JSON text.
    pub fn load_str(&self, content: &str) -> crate::LdapResult<LoadReport> {
        let definitions: Value = serde_json::from_str(content)?;
        Ok(self.load(&definitions)?)
    }

    fn load_all(&self, entries: &[Value]) -> LoadReport {
        let mut report = LoadReport::default();
        for (index, definition) in entries.iter().enumerate() {
            match NamedSchemaElement::from_json(definition) {
                Ok(element) => report.loaded.push(element),
                Err(error) => {
                    warn!("Rejected schema element definition #{}: {}", index, error);
                    report.rejected.push(RejectedElement { index, error });
                    if self.stop_on_error {
                        break;
                    }
                }
            }
        }
        info!(
            "Loaded {} schema element(s), rejected {}",
            report.loaded.len(),
            report.rejected.len()
        );
        report
    }
}

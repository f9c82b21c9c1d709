//! Building schema elements from JSON element definitions.
//!
//! A definition is the already-extracted field text of one RFC 4512 record:
//!
//! ```json
//! { "oid": "2.5.4.3", "names": "('cn' 'commonName')", "description": "common name" }
//! ```
//!
//! `names` may also be an array of bare descriptors. Fields are checked in
//! the order `oid`, `names`, `description`, and the first failure is
//! returned.

use super::element::{Descriptors, NamedSchemaElement};
use crate::error::{SchemaError, SchemaResult, value_type_name};
use log::debug;
use serde_json::Value;

pub const OID_FIELD: &str = "oid";
pub const NAMES_FIELD: &str = "names";
pub const DESCRIPTION_FIELD: &str = "description";

impl NamedSchemaElement {
    /// Build an element from a JSON definition object.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::NotAnObject`] - the definition is not an object
    /// * [`SchemaError::MissingField`] - `oid` is absent
    /// * [`SchemaError::InvalidType`] - a field has the wrong JSON type
    /// * [`SchemaError::Syntax`] - a field fails its grammar production
    pub fn from_json(definition: &Value) -> SchemaResult<Self> {
        let object = definition.as_object().ok_or_else(|| SchemaError::NotAnObject {
            actual_type: value_type_name(definition),
            rendered: definition.to_string(),
        })?;

        let oid = object
            .get(OID_FIELD)
            .ok_or(SchemaError::MissingField { field: OID_FIELD })?;
        let oid = oid
            .as_str()
            .ok_or_else(|| SchemaError::invalid_type(OID_FIELD, "numericoid string", oid))?;

        let mut element = NamedSchemaElement::new(oid)?;

        if let Some(names) = object.get(NAMES_FIELD).filter(|v| !v.is_null()) {
            element.set_descriptors(Descriptors::from_value(names)?)?;
        }

        if let Some(description) = object.get(DESCRIPTION_FIELD) {
            element.element_mut().set_description_value(description)?;
        }

        debug!(
            "Built schema element {} with names {}",
            element.oid(),
            element.descriptors()
        );
        Ok(element)
    }
}

//! Schema elements: the OID and description every RFC 4512 definition
//! carries, plus the descriptor set of elements that can be named.
//!
//! Both types are plain value holders. They are never partially built: the
//! OID is validated before a value exists, and descriptor replacement either
//! succeeds entirely or leaves the previous set untouched. Concurrent
//! mutation of one instance must be serialized by the caller; once loading
//! is done the elements are treated as read-only and can be shared freely.

use super::descriptor_set::DescriptorSet;
use super::oid::Numericoid;
use crate::abnf::qdescrs;
use crate::error::{SchemaError, SchemaResult};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields common to every schema element.
///
/// The OID can only be supplied at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaElement {
    oid: Numericoid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SchemaElement {
    /// Create an element from OID text.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Syntax`] naming the `oid` field when `oid` is not a
    /// `numericoid`.
    pub fn new(oid: &str) -> SchemaResult<Self> {
        let oid = Numericoid::new(oid.to_string())
            .map_err(|source| SchemaError::syntax("oid", oid, source))?;
        Ok(Self {
            oid,
            description: None,
        })
    }

    /// Create an element with the OID of another one.
    ///
    /// The text is validated again rather than trusted.
    pub fn from_oid(oid: &Numericoid) -> SchemaResult<Self> {
        Self::new(oid.as_str())
    }

    /// Create an element from a dynamically typed OID value.
    pub fn from_oid_value(oid: &Value) -> SchemaResult<Self> {
        let text = oid
            .as_str()
            .ok_or_else(|| SchemaError::invalid_type("oid", "numericoid string", oid))?;
        Self::new(text)
    }

    /// The OID, guaranteed to be in `numericoid` form.
    pub fn oid(&self) -> &Numericoid {
        &self.oid
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description as plain UTF-8 text, without `qdstring` quoting or
    /// escapes.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn clear_description(&mut self) -> &mut Self {
        self.description = None;
        self
    }

    /// Set the description from a dynamic value; `null` clears it and any
    /// other non-string value is rejected.
    pub fn set_description_value(&mut self, description: &Value) -> SchemaResult<&mut Self> {
        match description {
            Value::String(text) => Ok(self.set_description(text.clone())),
            Value::Null => Ok(self.clear_description()),
            other => Err(SchemaError::invalid_type(
                "description",
                "UTF-8 encoded string",
                other,
            )),
        }
    }
}

/// Input accepted when replacing an element's descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptors {
    /// Bare descriptors, e.g. `["cn", "commonName"]`
    List(Vec<String>),
    /// Text in `qdescrs` form, e.g. `('cn' 'commonName')`
    Qdescrs(String),
}

impl Descriptors {
    /// Interpret a dynamic value: a string is `qdescrs` text and an array
    /// must contain only strings.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        const EXPECTED: &str = "array of descriptors or a qdescrs string";
        match value {
            Value::String(text) => Ok(Self::Qdescrs(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| SchemaError::invalid_type("names", EXPECTED, item))
                })
                .collect::<SchemaResult<Vec<_>>>()
                .map(Self::List),
            other => Err(SchemaError::invalid_type("names", EXPECTED, other)),
        }
    }

    /// Resolve to a validated descriptor set.
    fn into_set(self) -> SchemaResult<DescriptorSet> {
        match self {
            Descriptors::List(names) => DescriptorSet::try_from_names(&names)
                .map_err(|source| SchemaError::syntax("names", names.join(" "), source)),
            Descriptors::Qdescrs(text) => {
                let names = qdescrs::decompose(&text)
                    .map_err(|source| SchemaError::syntax("names", text.as_str(), source))?;
                DescriptorSet::try_from_names(names)
                    .map_err(|source| SchemaError::syntax("names", text.as_str(), source))
            }
        }
    }
}

impl From<Vec<String>> for Descriptors {
    fn from(names: Vec<String>) -> Self {
        Self::List(names)
    }
}

impl From<Vec<&str>> for Descriptors {
    fn from(names: Vec<&str>) -> Self {
        Self::List(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&str> for Descriptors {
    fn from(qdescrs: &str) -> Self {
        Self::Qdescrs(qdescrs.to_string())
    }
}

impl From<String> for Descriptors {
    fn from(qdescrs: String) -> Self {
        Self::Qdescrs(qdescrs)
    }
}

/// A schema element that can be named by descriptors, such as an attribute
/// type or object class.
///
/// ```rust
/// use ldap_schema::schema::NamedSchemaElement;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let element = NamedSchemaElement::with_descriptors("2.5.6.0", "('top' 'alias')")?;
///     assert_eq!(element.oid().as_str(), "2.5.6.0");
///     assert_eq!(element.names().collect::<Vec<_>>(), vec!["top", "alias"]);
///
///     // An OID with a leading zero is rejected before the element exists
///     assert!(NamedSchemaElement::new("01").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSchemaElement {
    #[serde(flatten)]
    element: SchemaElement,
    #[serde(default)]
    names: DescriptorSet,
}

impl NamedSchemaElement {
    /// Create an unnamed element from OID text.
    pub fn new(oid: &str) -> SchemaResult<Self> {
        Ok(Self {
            element: SchemaElement::new(oid)?,
            names: DescriptorSet::new(),
        })
    }

    /// Create an element and set its descriptors in one step.
    pub fn with_descriptors(oid: &str, descriptors: impl Into<Descriptors>) -> SchemaResult<Self> {
        let mut element = Self::new(oid)?;
        element.set_descriptors(descriptors)?;
        Ok(element)
    }

    pub fn element(&self) -> &SchemaElement {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut SchemaElement {
        &mut self.element
    }

    pub fn oid(&self) -> &Numericoid {
        self.element.oid()
    }

    pub fn description(&self) -> Option<&str> {
        self.element.description()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.element.set_description(description);
        self
    }

    pub fn descriptors(&self) -> &DescriptorSet {
        &self.names
    }

    /// Descriptors in the order they were added, lowercased.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter()
    }

    pub fn primary_name(&self) -> Option<&str> {
        self.names.first()
    }

    pub fn has_name(&self, descr: &str) -> bool {
        self.names.contains(descr)
    }

    /// Add one bare descriptor; adding a name already present is a no-op.
    pub fn add_descriptor(&mut self, descr: &str) -> SchemaResult<&mut Self> {
        self.names
            .insert(descr)
            .map_err(|source| SchemaError::syntax("names", descr, source))?;
        Ok(self)
    }

    /// Remove every case-insensitive match of `descr`, if any.
    pub fn remove_descriptor(&mut self, descr: &str) -> &mut Self {
        self.names.remove(descr);
        self
    }

    /// Replace all descriptors.
    ///
    /// Every new descriptor is validated before the current set is touched,
    /// so on error the element keeps its previous names.
    pub fn set_descriptors(&mut self, descriptors: impl Into<Descriptors>) -> SchemaResult<&mut Self> {
        let names = descriptors.into().into_set()?;
        debug!(
            "Replacing descriptors of schema element {} with {}",
            self.oid(),
            names
        );
        self.names = names;
        Ok(self)
    }

    /// Replace all descriptors from a dynamic value: a `qdescrs` string or
    /// an array of bare descriptor strings.
    pub fn set_descriptors_value(&mut self, descriptors: &Value) -> SchemaResult<&mut Self> {
        let descriptors = Descriptors::from_value(descriptors)?;
        self.set_descriptors(descriptors)
    }
}

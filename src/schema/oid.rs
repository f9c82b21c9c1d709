//! Numericoid value object for schema element identifiers.
//!
//! This module provides a type-safe wrapper around object identifiers in
//! dotted-decimal form. An OID is kept as the original text; its segments are
//! never converted to integers since they may exceed any native range.

use crate::abnf::numericoid;
use crate::error::{GrammarError, GrammarResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated numeric object identifier, e.g. `2.5.4.3`.
///
/// Equality and hashing use the dotted text, so `"1.2"` and `"1.2"` are equal
/// but no numeric normalization ever happens.
///
/// ## Examples
///
/// ```rust
/// use ldap_schema::schema::Numericoid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let oid = Numericoid::new("2.5.4.3".to_string())?;
///     assert_eq!(oid.segments(), vec!["2", "5", "4", "3"]);
///
///     // Leading zeros are not allowed in any segment
///     assert!(Numericoid::new("2.05.4.3".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Numericoid(String);

impl Numericoid {
    /// Create a new Numericoid with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(Numericoid)` - If the value conforms to `numericoid`
    /// * `Err(GrammarError::NotNumericoid)` - Otherwise
    pub fn new(value: String) -> GrammarResult<Self> {
        numericoid::validate(&value)?;
        Ok(Self(value))
    }

    /// Get the dotted string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned dotted string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The number segments of the OID, in order.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split(numericoid::SEPARATOR).collect()
    }

    /// Whether `self` lies under `arc`, e.g. `1.3.6.1.4.1.1466` is under
    /// `1.3.6.1`.
    pub fn is_descendant_of(&self, arc: &Numericoid) -> bool {
        self.0
            .strip_prefix(arc.as_str())
            .is_some_and(|rest| rest.starts_with(numericoid::SEPARATOR))
    }
}

impl fmt::Display for Numericoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Numericoid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Numericoid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Numericoid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for Numericoid {
    type Error = GrammarError;

    fn try_from(value: String) -> GrammarResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Numericoid {
    type Error = GrammarError;

    fn try_from(value: &str) -> GrammarResult<Self> {
        Self::new(value.to_string())
    }
}

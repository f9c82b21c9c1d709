//! Ordered, case-insensitive set of descriptors (short names).
//!
//! Descriptors are case-insensitive in LDAP, so members are stored folded to
//! lowercase and inserting a name that is already present in any case is a
//! no-op. Insertion order is kept so a definition written as
//! `NAME ( 'cn' 'commonName' )` reports `cn` as its primary name.

use crate::abnf::keystring;
use crate::error::{GrammarError, GrammarResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered set of lowercase keystrings.
///
/// Every member is a valid keystring at all times: [`DescriptorSet::insert`]
/// validates before storing, and deserialization goes through `insert`.
///
/// ```rust
/// use ldap_schema::schema::DescriptorSet;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut names = DescriptorSet::new();
///     assert!(names.insert("commonName")?);
///     assert!(!names.insert("COMMONNAME")?);
///     assert_eq!(names.as_slice(), ["commonname"]);
///
///     assert!(names.insert("not valid").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DescriptorSet {
    names: Vec<String>,
}

impl DescriptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from bare descriptors, rejecting the whole batch if any
    /// one of them is not a keystring.
    pub fn try_from_names<I, S>(names: I) -> GrammarResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name.as_ref())?;
        }
        Ok(set)
    }

    /// Add a bare (unquoted) descriptor.
    ///
    /// Returns `Ok(true)` if it was added and `Ok(false)` if an equal name in
    /// any letter case was already present.
    pub fn insert(&mut self, descr: &str) -> GrammarResult<bool> {
        keystring::validate(descr)?;
        if self.contains(descr) {
            return Ok(false);
        }
        self.names.push(descr.to_ascii_lowercase());
        Ok(true)
    }

    /// Remove every case-insensitive match of `descr`.
    ///
    /// Returns whether anything was removed; removing an absent name is not
    /// an error.
    pub fn remove(&mut self, descr: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|name| !name.eq_ignore_ascii_case(descr));
        self.names.len() != before
    }

    pub fn contains(&self, descr: &str) -> bool {
        self.names.iter().any(|name| name.eq_ignore_ascii_case(descr))
    }

    /// The first name added, which LDAP tools treat as the primary name.
    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Render in `qdescrs` form: `'a'` for one name, `('a' 'b')` for more.
    ///
    /// Returns `None` for an empty set, which has no `qdescrs` encoding.
    pub fn to_qdescrs(&self) -> Option<String> {
        match self.names.as_slice() {
            [] => None,
            [single] => Some(format!("'{}'", single)),
            names => {
                let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
                Some(format!("({})", quoted.join(" ")))
            }
        }
    }
}

impl fmt::Display for DescriptorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qdescrs().unwrap_or_default())
    }
}

impl<'a> IntoIterator for &'a DescriptorSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl TryFrom<Vec<String>> for DescriptorSet {
    type Error = GrammarError;

    fn try_from(names: Vec<String>) -> GrammarResult<Self> {
        Self::try_from_names(names)
    }
}

impl Serialize for DescriptorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DescriptorSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Self::try_from_names(names).map_err(serde::de::Error::custom)
    }
}

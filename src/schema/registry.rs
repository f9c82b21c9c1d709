//! In-memory schema model holding loaded schema elements.
//!
//! Elements are keyed by OID and can also be looked up by any of their
//! descriptors. Only fully validated [`NamedSchemaElement`]s can be added, so
//! nothing in the model ever carries an unvalidated OID.

use super::element::NamedSchemaElement;
use super::loader::LoadReport;
use super::oid::Numericoid;
use crate::error::{SchemaError, SchemaResult};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};

/// Registry of schema elements with OID and name lookup.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    elements: BTreeMap<Numericoid, NamedSchemaElement>,
    // lowercase descriptor -> owning OID
    names: HashMap<String, Numericoid>,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from the accepted elements of a load.
    ///
    /// Elements that clash with an earlier one (same OID or a shared name)
    /// are skipped and returned alongside the model.
    pub fn from_report(report: LoadReport) -> (Self, Vec<SchemaError>) {
        let mut model = Self::new();
        let mut conflicts = Vec::new();
        for element in report.loaded {
            if let Err(e) = model.add(element) {
                warn!("Skipping schema element: {}", e);
                conflicts.push(e);
            }
        }
        (model, conflicts)
    }

    /// Add an element.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::DuplicateOid`] - an element with this OID exists
    /// * [`SchemaError::DuplicateName`] - one of its names is taken
    ///
    /// On error the model is unchanged.
    pub fn add(&mut self, element: NamedSchemaElement) -> SchemaResult<()> {
        if self.elements.contains_key(element.oid()) {
            return Err(SchemaError::DuplicateOid {
                oid: element.oid().to_string(),
            });
        }

        if let Some((name, owner)) = element
            .names()
            .find_map(|name| self.names.get(name).map(|owner| (name, owner)))
        {
            return Err(SchemaError::DuplicateName {
                name: name.to_string(),
                oid: owner.to_string(),
            });
        }

        for name in element.names() {
            self.names.insert(name.to_string(), element.oid().clone());
        }
        debug!("Registered schema element {}", element.oid());
        self.elements.insert(element.oid().clone(), element);
        Ok(())
    }

    /// Remove and return the element with this OID.
    pub fn remove(&mut self, oid: &str) -> Option<NamedSchemaElement> {
        let oid = Numericoid::try_from(oid).ok()?;
        let element = self.elements.remove(&oid)?;
        for name in element.names() {
            self.names.remove(name);
        }
        Some(element)
    }

    pub fn get_by_oid(&self, oid: &str) -> Option<&NamedSchemaElement> {
        let oid = Numericoid::try_from(oid).ok()?;
        self.elements.get(&oid)
    }

    /// Case-insensitive lookup by descriptor.
    pub fn get_by_name(&self, descr: &str) -> Option<&NamedSchemaElement> {
        let oid = self.names.get(&descr.to_ascii_lowercase())?;
        self.elements.get(oid)
    }

    /// Look up by OID text if it is one, otherwise by name.
    pub fn resolve(&self, oid_or_name: &str) -> Option<&NamedSchemaElement> {
        self.get_by_oid(oid_or_name)
            .or_else(|| self.get_by_name(oid_or_name))
    }

    /// Elements ordered by OID text.
    pub fn iter(&self) -> impl Iterator<Item = &NamedSchemaElement> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

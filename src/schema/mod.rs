//! Schema elements and the in-memory schema model.
//!
//! This module turns raw field text into validated schema elements:
//!
//! - [`Numericoid`] - validated object identifier
//! - [`DescriptorSet`] - ordered, case-insensitive set of short names
//! - [`SchemaElement`] / [`NamedSchemaElement`] - OID, description and names
//! - [`SchemaLoader`] - builds elements from JSON definitions, one failure at
//!   a time
//! - [`SchemaModel`] - registry of loaded elements with OID and name lookup
//!
//! All grammar checks go through [`crate::abnf`]; nothing here re-implements
//! a production.

pub mod definition;
pub mod descriptor_set;
pub mod element;
pub mod loader;
pub mod oid;
pub mod registry;

pub use descriptor_set::DescriptorSet;
pub use element::{Descriptors, NamedSchemaElement, SchemaElement};
pub use loader::{LoadReport, RejectedElement, SchemaLoader};
pub use oid::Numericoid;
pub use registry::SchemaModel;

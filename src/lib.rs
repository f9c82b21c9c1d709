//! LDAP schema element validation for Rust.
//!
//! Checks the textual fields of RFC 4512 schema definitions (object
//! identifiers and descriptors) against their ABNF productions and turns them
//! into validated, strongly typed schema elements. Malformed input is rejected
//! with an error naming the field and the production that failed; nothing is
//! truncated or partially accepted.
//!
//! # Core Components
//!
//! - [`abnf`] - the `number`, `numericoid`, `keystring`, `qdescr`,
//!   `qdescrlist` and `qdescrs` productions
//! - [`schema`] - [`NamedSchemaElement`], [`DescriptorSet`], the loader and
//!   the in-memory [`SchemaModel`]
//! - [`config`] - connection and schema source configuration
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema::{NamedSchemaElement, Production};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Production::Qdescrs.validate("('cn' 'commonName')")?;
//!
//!     let element = NamedSchemaElement::with_descriptors("2.5.4.3", "('cn' 'commonName')")?;
//!     assert_eq!(element.oid().as_str(), "2.5.4.3");
//!     assert_eq!(element.primary_name(), Some("cn"));
//!     Ok(())
//! }
//! ```
//!
//! The crate logs through the [`log`] facade; install any backend to see
//! load diagnostics.

pub mod abnf;
pub mod config;
pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use abnf::Production;
pub use config::{BindConfig, Config, ConnectionConfig};
pub use error::{
    ConfigError, ConfigResult, GrammarError, GrammarResult, LdapError, LdapResult, SchemaError,
    SchemaResult,
};
pub use schema::{
    DescriptorSet, Descriptors, LoadReport, NamedSchemaElement, Numericoid, SchemaElement,
    SchemaLoader, SchemaModel,
};

//! Error types for LDAP schema validation.
//!
//! Errors are layered the same way the validation is: grammar productions
//! raise [`GrammarError`], schema elements wrap those in [`SchemaError`]
//! naming the offending field, and configuration parsing raises
//! [`ConfigError`]. [`LdapError`] gathers all of them for callers that only
//! want a single error type.

use crate::abnf::Production;
use serde_json::Value;

/// Main error type for the crate.
///
/// Every lower-level error converts into this one, so `?` can be used freely
/// in code that mixes configuration parsing and schema loading.
#[derive(Debug, thiserror::Error)]
pub enum LdapError {
    /// A value failed an ABNF production check
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// A schema element field was rejected
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Configuration was missing a key or had a malformed value
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while reading definition or configuration files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single ABNF production from RFC 4512.
///
/// There is one violation variant per production, each carrying the literal
/// value that was rejected. [`GrammarError::WrongInputType`] is kept apart so
/// that a programming mistake (handing a number to a string rule) reads
/// differently from malformed text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// The value handed to the production was not a string at all
    #[error(
        "The given value cannot conform to the ABNF production '{production}' because it is not a string; ({actual_type}) {rendered} given"
    )]
    WrongInputType {
        production: Production,
        actual_type: &'static str,
        rendered: String,
    },

    #[error("The string '{value}' does not conform to the ABNF production 'number'")]
    NotNumber { value: String },

    #[error("The string '{value}' does not conform to the ABNF production 'numericoid'")]
    NotNumericoid { value: String },

    #[error("The string '{value}' does not conform to the ABNF production 'keystring'")]
    NotKeystring { value: String },

    #[error("The string '{value}' does not conform to the ABNF production 'qdescr'")]
    NotQdescr { value: String },

    #[error("The string '{value}' does not conform to the ABNF production 'qdescrlist'")]
    NotQdescrlist { value: String },

    #[error("The string '{value}' does not conform to the ABNF production 'qdescrs'")]
    NotQdescrs { value: String },
}

impl GrammarError {
    /// Build the violation variant belonging to `production`.
    pub fn violation(production: Production, value: impl Into<String>) -> Self {
        let value = value.into();
        match production {
            Production::Number => Self::NotNumber { value },
            Production::Numericoid => Self::NotNumericoid { value },
            Production::Keystring => Self::NotKeystring { value },
            Production::Qdescr => Self::NotQdescr { value },
            Production::Qdescrlist => Self::NotQdescrlist { value },
            Production::Qdescrs => Self::NotQdescrs { value },
        }
    }

    pub fn wrong_input_type(production: Production, value: &Value) -> Self {
        Self::WrongInputType {
            production,
            actual_type: value_type_name(value),
            rendered: value.to_string(),
        }
    }

    /// The production that failed.
    pub fn production(&self) -> Production {
        match self {
            Self::WrongInputType { production, .. } => *production,
            Self::NotNumber { .. } => Production::Number,
            Self::NotNumericoid { .. } => Production::Numericoid,
            Self::NotKeystring { .. } => Production::Keystring,
            Self::NotQdescr { .. } => Production::Qdescr,
            Self::NotQdescrlist { .. } => Production::Qdescrlist,
            Self::NotQdescrs { .. } => Production::Qdescrs,
        }
    }

    /// The rejected literal, or `None` when the input was not a string.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::WrongInputType { .. } => None,
            Self::NotNumber { value }
            | Self::NotNumericoid { value }
            | Self::NotKeystring { value }
            | Self::NotQdescr { value }
            | Self::NotQdescrlist { value }
            | Self::NotQdescrs { value } => Some(value),
        }
    }

    pub fn is_wrong_input_type(&self) -> bool {
        matches!(self, Self::WrongInputType { .. })
    }
}

/// Errors raised by schema elements and the schema model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A field value did not satisfy its grammar production
    #[error("Invalid value '{value}' for schema field '{field}': {source}")]
    Syntax {
        field: &'static str,
        value: String,
        #[source]
        source: GrammarError,
    },

    /// A field received a value of a type it cannot accept
    #[error("Schema field '{field}' expects {expected}; ({actual_type}) {rendered} given")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        actual_type: &'static str,
        rendered: String,
    },

    /// A required field is absent from an element definition
    #[error("Schema element definition is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// An element definition was not a JSON object
    #[error("Schema element definition must be an object; ({actual_type}) {rendered} given")]
    NotAnObject {
        actual_type: &'static str,
        rendered: String,
    },

    /// Another element with the same OID is already registered
    #[error("A schema element with OID '{oid}' is already registered")]
    DuplicateOid { oid: String },

    /// Another element already uses this descriptor
    #[error("The descriptor '{name}' is already used by schema element '{oid}'")]
    DuplicateName { name: String, oid: String },
}

impl SchemaError {
    pub fn syntax(field: &'static str, value: impl Into<String>, source: GrammarError) -> Self {
        Self::Syntax {
            field,
            value: value.into(),
            source,
        }
    }

    pub fn invalid_type(field: &'static str, expected: &'static str, value: &Value) -> Self {
        Self::InvalidType {
            field,
            expected,
            actual_type: value_type_name(value),
            rendered: value.to_string(),
        }
    }

    /// The grammar failure underneath a [`SchemaError::Syntax`].
    pub fn grammar_error(&self) -> Option<&GrammarError> {
        match self {
            Self::Syntax { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The element field this error is about, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Syntax { field, .. }
            | Self::InvalidType { field, .. }
            | Self::MissingField { field } => Some(field),
            _ => None,
        }
    }
}

/// Errors raised while reading connection configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required configuration key is absent
    #[error("Missing required configuration key '{key}'")]
    MissingKey { key: String },

    /// A configuration key holds a value of the wrong shape
    #[error(
        "Invalid value for configuration key '{key}' provided. A {expected} was expected. Given: ({actual_type}) {rendered}"
    )]
    InvalidValue {
        key: String,
        expected: &'static str,
        actual_type: &'static str,
        rendered: String,
    },

    /// No connection is configured under this name
    #[error("No connection named '{name}' is configured")]
    UnknownConnection { name: String },

    /// Schema definitions embedded in the configuration were rejected
    #[error("Schema definition error: {0}")]
    Schema(#[from] SchemaError),

    /// Configuration text was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn invalid_value(key: impl Into<String>, expected: &'static str, value: &Value) -> Self {
        Self::InvalidValue {
            key: key.into(),
            expected,
            actual_type: value_type_name(value),
            rendered: value.to_string(),
        }
    }
}

/// Get the type name of a JSON value for error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "decimal",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Result type aliases for convenience
pub type LdapResult<T> = Result<T, LdapError>;
pub type GrammarResult<T> = Result<T, GrammarError>;
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

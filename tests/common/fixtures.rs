//! Schema definitions taken from RFC 4512 and RFC 4519.

use serde_json::{Value, json};

/// A small, valid core schema
pub fn core_definitions() -> Value {
    json!([
        {
            "oid": "2.5.6.0",
            "names": "'top'",
            "description": "top of the superclass chain"
        },
        {
            "oid": "2.5.6.1",
            "names": "'alias'"
        },
        {
            "oid": "2.5.4.3",
            "names": "('cn' 'commonName')",
            "description": "RFC4519: common name(s) for which the entity is known by"
        },
        {
            "oid": "2.5.4.4",
            "names": ["sn", "surname"]
        },
        {
            "oid": "2.5.4.0",
            "names": "'objectClass'"
        }
    ])
}

/// Definitions that each fail in a different way, in this order:
/// bad OID, missing OID, unparenthesized list, non-string names,
/// space inside parentheses
pub fn broken_definitions() -> Value {
    json!([
        {"oid": "01", "names": "'broken'"},
        {"names": "'nameless'"},
        {"oid": "2.5.4.41", "names": "'name' 'other'"},
        {"oid": "2.5.4.42", "names": 42},
        {"oid": "2.5.4.43", "names": "( 'givenName')"}
    ])
}

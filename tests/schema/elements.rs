//! OID and descriptor handling on schema elements.

use ldap_schema::{
    Descriptors, GrammarError, NamedSchemaElement, Production, SchemaElement, SchemaError,
};
use serde_json::json;

#[test]
fn test_end_to_end_construction() {
    let element = NamedSchemaElement::with_descriptors("1.2.3.4", "('top' 'alias')").unwrap();
    assert_eq!(element.oid().as_str(), "1.2.3.4");
    assert_eq!(element.names().collect::<Vec<_>>(), vec!["top", "alias"]);
}

#[test]
fn test_invalid_oid_names_numericoid() {
    let error = NamedSchemaElement::with_descriptors("01", "('top' 'alias')").unwrap_err();
    match &error {
        SchemaError::Syntax { field, value, source } => {
            assert_eq!(*field, "oid");
            assert_eq!(value, "01");
            assert_eq!(source.production(), Production::Numericoid);
        }
        other => panic!("Expected Syntax error, got: {:?}", other),
    }
    assert!(error.to_string().contains("numericoid"));
}

#[test]
fn test_add_descriptor_twice_keeps_one() {
    let mut element = NamedSchemaElement::new("2.5.4.3").unwrap();
    element.add_descriptor("Foo").unwrap();
    element.add_descriptor("Foo").unwrap();
    assert_eq!(element.descriptors().as_slice(), ["foo"]);
}

#[test]
fn test_descriptor_members_stay_valid_keystrings() {
    let mut element = NamedSchemaElement::new("2.5.4.3").unwrap();
    for candidate in ["cn", "Common-Name2"] {
        assert!(element.add_descriptor(candidate).is_ok(), "{}", candidate);
    }
    for candidate in ["bad name", "-x", "'q'", "9lives"] {
        let error = element.add_descriptor(candidate).unwrap_err();
        assert_eq!(error.field(), Some("names"), "{}", candidate);
    }
    for name in element.names() {
        assert!(Production::Keystring.conforms(name), "{}", name);
    }
    assert_eq!(element.names().collect::<Vec<_>>(), vec!["cn", "common-name2"]);
}

#[test]
fn test_set_descriptors_replaces_entire_set() {
    let mut element = NamedSchemaElement::with_descriptors("2.5.4.3", "('a' 'b')").unwrap();
    element.set_descriptors(Descriptors::from(vec!["c"])).unwrap();
    assert_eq!(element.names().collect::<Vec<_>>(), vec!["c"]);

    element
        .set_descriptors_value(&json!("('d' 'D' 'e')"))
        .unwrap();
    assert_eq!(element.names().collect::<Vec<_>>(), vec!["d", "e"]);
}

#[test]
fn test_set_descriptors_rejects_other_types() {
    let mut element = NamedSchemaElement::new("2.5.4.3").unwrap();
    let error = element.set_descriptors_value(&json!(3.5)).unwrap_err();
    assert!(matches!(error, SchemaError::InvalidType { field: "names", .. }));
    assert!(error.to_string().contains("decimal"));
}

#[test]
fn test_qdescrs_strictness_reaches_elements() {
    let mut element = NamedSchemaElement::new("2.5.4.3").unwrap();
    let error = element.set_descriptors("( 'cn')").unwrap_err();
    assert_eq!(
        error.grammar_error(),
        Some(&GrammarError::NotQdescrs {
            value: "( 'cn')".to_string()
        })
    );
}

#[test]
fn test_oid_is_never_reassigned() {
    let mut element = NamedSchemaElement::with_descriptors("2.5.4.3", "'cn'").unwrap();
    element.set_description("common name");
    element.remove_descriptor("cn");
    assert_eq!(element.oid().as_str(), "2.5.4.3");

    let copy = SchemaElement::from_oid(element.oid()).unwrap();
    assert_eq!(copy.oid(), element.oid());
}

#[test]
fn test_shared_read_only_after_load() {
    let element = std::sync::Arc::new(
        NamedSchemaElement::with_descriptors("2.5.4.3", "('cn' 'commonName')").unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let element = std::sync::Arc::clone(&element);
            std::thread::spawn(move || element.has_name("COMMONNAME"))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

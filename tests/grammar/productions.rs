//! Accepted and rejected inputs for each ABNF production.

use ldap_schema::Production;
use ldap_schema::abnf::{keystring, number, numericoid, qdescr, qdescrlist, qdescrs};
use serde_json::json;

#[test]
fn test_number() {
    for value in ["0", "1", "10", "11"] {
        assert!(number::validate(value).is_ok(), "{}", value);
    }
    for value in ["01", "", " 1", "1 ", "a", "01a", " ", " 10", "10 "] {
        assert_violation!(number::validate(value), Production::Number);
    }
}

#[test]
fn test_number_rejects_non_string_input_distinctly() {
    for value in [json!(10), json!(null)] {
        let error = Production::Number.validate_value(&value).unwrap_err();
        assert!(error.is_wrong_input_type());
        assert_eq!(error.production(), Production::Number);
    }
    assert_error_message_contains!(
        Production::Number.validate_value(&json!(10)),
        "not a string"
    );
}

#[test]
fn test_numericoid() {
    for value in ["1", "1.2.3.4.5"] {
        assert!(numericoid::validate(value).is_ok(), "{}", value);
    }
    for value in [".", "alpha", "1.a", "a.1"] {
        assert_violation!(numericoid::validate(value), Production::Numericoid);
    }
}

#[test]
fn test_keystring() {
    for value in ["alpha", "ALPHA", "mIxEdcASe", "a123-1-123ab1", "a-"] {
        assert!(keystring::validate(value).is_ok(), "{}", value);
    }
    for value in ["1", "1a", "1-a", "with whitespace", " whsp", "whsp ", "-a", "$a"] {
        assert_violation!(keystring::validate(value), Production::Keystring);
    }
}

#[test]
fn test_qdescr() {
    for value in ["'descr'", "'a123'", "'a-a123-1-123ab'"] {
        assert!(qdescr::validate(value).is_ok(), "{}", value);
    }
    for value in ["descr", "'123'", "'-a'", "'a$'", "''"] {
        assert_violation!(qdescr::validate(value), Production::Qdescr);
    }
}

#[test]
fn test_qdescrlist() {
    for value in [
        "'one'",
        "'one' 'two-2'",
        "'one'    'two-2'",
        "'one-2-three'",
        "'one' 'two'  'three'",
    ] {
        assert!(qdescrlist::validate(value).is_ok(), "{}", value);
    }
    for value in [
        "\"wrong-quotes\"",
        "'invalid descr'",
        "no quotes",
        "no-quotes",
        "'quotes' missing",
        "  'leading-space'",
    ] {
        assert_violation!(qdescrlist::validate(value), Production::Qdescrlist);
    }
}

#[test]
fn test_qdescrs() {
    for value in [
        "'qdescr'",
        "'qdescr-2-abc123'",
        "('qdescr' 'qdescr-2'  'qdescr-3')",
        "('single-qdescr')",
    ] {
        assert!(qdescrs::validate(value).is_ok(), "{}", value);
    }
    for value in [
        "not-quoted",
        "'-invalid-qdescr'",
        "(unqouted list)",
        "('unquoted' item)",
        "'qdescr' ('qdescr' 'list')",
        "( 'a')",
    ] {
        assert_violation!(qdescrs::validate(value), Production::Qdescrs);
    }
}

#[test]
fn test_qdescrs_decompose() {
    assert_eq!(qdescrs::decompose("'single'").unwrap(), vec!["single"]);
    assert_eq!(
        qdescrs::decompose("('a' 'b'  'c')").unwrap(),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_validation_does_not_consume_input() {
    let input = String::from("('cn' 'commonName')");
    let names = qdescrs::decompose(&input).unwrap();
    assert_eq!(names, vec!["cn", "commonName"]);
    assert_eq!(input, "('cn' 'commonName')");
}

#[test]
fn test_productions_are_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let oid = format!("1.3.6.1.4.1.{}", i);
                Production::ALL
                    .iter()
                    .filter(|p| p.conforms(&oid))
                    .count()
            })
        })
        .collect();

    for handle in handles {
        // only numericoid accepts a dotted OID
        assert_eq!(handle.join().unwrap(), 1);
    }
}

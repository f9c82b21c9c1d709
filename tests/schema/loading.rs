//! Loader, schema model and configuration working together.

use crate::common::{fixtures, init_logging};
use ldap_schema::{Config, ConfigError, Production, SchemaError, SchemaLoader, SchemaModel};
use serde_json::json;

#[test]
fn test_core_definitions_load_cleanly() {
    init_logging();
    let report = SchemaLoader::new().load(&fixtures::core_definitions()).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.loaded.len(), 5);

    let (model, conflicts) = SchemaModel::from_report(report);
    assert!(conflicts.is_empty());
    assert_eq!(model.get_by_name("commonName").unwrap().oid().as_str(), "2.5.4.3");
    assert_eq!(model.get_by_name("SURNAME").unwrap().oid().as_str(), "2.5.4.4");
    assert_eq!(
        model.get_by_oid("2.5.6.0").unwrap().description(),
        Some("top of the superclass chain")
    );
}

#[test]
fn test_each_broken_definition_reports_its_field() {
    init_logging();
    let report = SchemaLoader::new().load(&fixtures::broken_definitions()).unwrap();
    assert!(report.loaded.is_empty());
    assert_eq!(report.rejected.len(), 5);

    let errors: Vec<&SchemaError> = report.rejected.iter().map(|r| &r.error).collect();

    assert_eq!(
        errors[0].grammar_error().map(|e| e.production()),
        Some(Production::Numericoid)
    );
    assert_eq!(errors[1], &SchemaError::MissingField { field: "oid" });
    assert_eq!(
        errors[2].grammar_error().map(|e| e.production()),
        Some(Production::Qdescrs)
    );
    assert!(matches!(errors[3], SchemaError::InvalidType { field: "names", .. }));
    assert_eq!(errors[4].field(), Some("names"));
}

#[test]
fn test_bad_elements_do_not_stop_good_ones() {
    init_logging();
    let mut definitions = fixtures::broken_definitions().as_array().unwrap().clone();
    definitions.extend(fixtures::core_definitions().as_array().unwrap().iter().cloned());

    let report = SchemaLoader::new().load(&json!(definitions)).unwrap();
    assert_eq!(report.loaded.len(), 5);
    assert_eq!(report.rejected.len(), 5);
    assert!(report.rejected.iter().all(|r| r.index < 5));
}

#[test]
fn test_config_drives_schema_loading() {
    init_logging();
    let config = Config::from_value(&json!({
        "connections": {
            "main": {
                "hostname": "ldap.example.com",
                "root": "dc=example,dc=com",
                "bind": {"dn": "cn=admin,dc=example,dc=com", "password": "secret"}
            }
        },
        "schemas": fixtures::core_definitions()
    }))
    .unwrap();

    let model = config.load_schema().unwrap();
    assert_eq!(model.len(), 5);
    assert!(model.resolve("objectclass").is_some());
    assert_eq!(config.connection("main").unwrap().port, 389);
}

#[test]
fn test_config_errors_wrap_schema_errors() {
    let error = ConfigError::from(SchemaError::MissingField { field: "oid" });
    assert_error_message_contains!(Err::<(), _>(error), "'oid'");
}

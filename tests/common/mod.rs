//! Common test utilities: assertion macros and fixtures.

pub mod fixtures;

/// Assert that a result failed with the violation of a given production
#[macro_export]
macro_rules! assert_violation {
    ($result:expr, $production:expr) => {
        match $result {
            Err(err) => {
                let err: ldap_schema::GrammarError = err;
                assert!(
                    !err.is_wrong_input_type(),
                    "Expected a {} violation, got a type error: {}",
                    $production,
                    err
                );
                assert_eq!(err.production(), $production, "Unexpected error: {}", err);
            }
            Ok(_) => panic!(
                "Expected a {} violation, but validation passed",
                $production
            ),
        }
    };
}

/// Assert that an error message contains a substring
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err.to_string(),
                $substring
            ),
            Ok(_) => panic!(
                "Expected error containing '{}', but validation passed",
                $substring
            ),
        }
    };
}

/// Install a test logger once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

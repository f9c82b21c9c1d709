//! The `number` production: a non-negative decimal integer without leading
//! zeros.
//!
//! ```text
//! number  = DIGIT / ( LDIGIT 1*DIGIT )
//! DIGIT   = %x30 / LDIGIT       ; "0"-"9"
//! LDIGIT  = %x31-39             ; "1"-"9"
//! ```
//!
//! The value is never converted to an integer; segments of an OID routinely
//! exceed native integer ranges.

use super::Production;
use crate::error::GrammarResult;

/// Check that `value` is `"0"` or a digit sequence starting with 1-9.
pub fn validate(value: &str) -> GrammarResult<()> {
    if is_number(value) {
        Ok(())
    } else {
        Err(Production::Number.violation(value))
    }
}

pub(crate) fn is_number(value: &str) -> bool {
    match value.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

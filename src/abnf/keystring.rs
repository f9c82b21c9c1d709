//! The `keystring` production, which is also the `descr` form of a short
//! name.
//!
//! ```text
//! keystring   = leadkeychar *keychar
//! leadkeychar = ALPHA
//! keychar     = ALPHA / DIGIT / HYPHEN
//! ```

use super::Production;
use crate::error::GrammarResult;

/// Check that `value` is an ASCII letter followed by letters, digits or
/// hyphens.
pub fn validate(value: &str) -> GrammarResult<()> {
    if is_keystring(value) {
        Ok(())
    } else {
        Err(Production::Keystring.violation(value))
    }
}

pub(crate) fn is_keystring(value: &str) -> bool {
    match value.as_bytes() {
        [lead, rest @ ..] => lead.is_ascii_alphabetic() && rest.iter().all(|&c| is_keychar(c)),
        [] => false,
    }
}

fn is_keychar(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

//! The `qdescr` production: a descriptor in single quotes, e.g. `'cn'`.

use super::{Production, keystring};
use crate::error::GrammarResult;

pub const QUOTE: char = '\'';

/// Check that `value` is a keystring wrapped in single quotes.
///
/// Quotes inside the body are never treated as escapes; a quote is not a
/// keystring character, so any interior quote fails the body check.
pub fn validate(value: &str) -> GrammarResult<()> {
    match body(value) {
        Some(descr) if keystring::is_keystring(descr) => Ok(()),
        _ => Err(Production::Qdescr.violation(value)),
    }
}

/// Validate `value` and return the descriptor with its quotes stripped.
pub fn unwrap(value: &str) -> GrammarResult<&str> {
    validate(value)?;
    // validate guarantees both delimiters are present
    Ok(&value[1..value.len() - 1])
}

/// The text strictly between the delimiting quotes, if `value` has them and
/// the body is non-empty.
fn body(value: &str) -> Option<&str> {
    value
        .strip_prefix(QUOTE)?
        .strip_suffix(QUOTE)
        .filter(|descr| !descr.is_empty())
}

pub(crate) fn is_qdescr(value: &str) -> bool {
    validate(value).is_ok()
}

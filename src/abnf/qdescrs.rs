//! The `qdescrs` production: either a bare `qdescr`, or a `qdescrlist` in
//! parentheses.
//!
//! The bare form is tried first. Only if it fails is the parenthesized form
//! attempted, and exactly the two boundary characters are stripped: no
//! whitespace is trimmed inside the parentheses, so `"( 'a')"` is rejected.
//! Callers that want lenient whitespace must normalize first.

use super::{Production, qdescr, qdescrlist};
use crate::error::GrammarResult;

/// Check that `value` is a `qdescr` or a parenthesized `qdescrlist`.
pub fn validate(value: &str) -> GrammarResult<()> {
    decompose(value).map(|_| ())
}

/// Validate `value` and return its descriptors, unquoted and in order.
///
/// The result always has at least one entry.
pub fn decompose(value: &str) -> GrammarResult<Vec<&str>> {
    if let Ok(descr) = qdescr::unwrap(value) {
        return Ok(vec![descr]);
    }

    parenthesized(value)
        .and_then(|list| qdescrlist::decompose(list).ok())
        .ok_or_else(|| Production::Qdescrs.violation(value))
}

fn parenthesized(value: &str) -> Option<&str> {
    value.strip_prefix('(')?.strip_suffix(')')
}

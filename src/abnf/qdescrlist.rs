//! The `qdescrlist` production: one or more `qdescr` separated by spaces.
//!
//! Only the space character separates entries; runs of spaces between
//! entries are allowed, but a leading or trailing space produces an empty
//! entry and therefore fails.

use super::{Production, qdescr};
use crate::error::GrammarResult;

/// Check that every space-separated entry of `value` is a `qdescr`.
pub fn validate(value: &str) -> GrammarResult<()> {
    if split_entries(value).into_iter().all(qdescr::is_qdescr) {
        Ok(())
    } else {
        Err(Production::Qdescrlist.violation(value))
    }
}

/// Validate `value` and return the unquoted descriptors in their original
/// order.
///
/// Duplicates are kept; removing them is the job of
/// [`DescriptorSet`](crate::schema::DescriptorSet).
pub fn decompose(value: &str) -> GrammarResult<Vec<&str>> {
    validate(value)?;
    split_entries(value)
        .into_iter()
        .map(qdescr::unwrap)
        .collect::<Result<_, _>>()
        .map_err(|_| Production::Qdescrlist.violation(value))
}

/// Split on runs of spaces. A leading or trailing run yields an empty first
/// or last entry, and the empty string yields a single empty entry.
fn split_entries(value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut rest = value;
    while let Some(at) = rest.find(' ') {
        entries.push(&rest[..at]);
        rest = rest[at..].trim_start_matches(' ');
    }
    entries.push(rest);
    entries
}

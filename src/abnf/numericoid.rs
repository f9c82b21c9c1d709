//! The `numericoid` production: dot-separated numbers.
//!
//! RFC 4512 requires at least two numbers; a single bare number is accepted
//! here as well so small integers can serve as identifiers while schemas are
//! being assembled.

use super::{Production, number};
use crate::error::GrammarResult;

pub const SEPARATOR: char = '.';

/// Check that every `.`-separated segment of `value` is a `number`.
///
/// Leading, trailing or doubled dots produce an empty segment, which is not
/// a number, so they are rejected.
pub fn validate(value: &str) -> GrammarResult<()> {
    if value.split(SEPARATOR).all(number::is_number) {
        Ok(())
    } else {
        Err(Production::Numericoid.violation(value))
    }
}

/// Validate `value` and split it into its number segments, in order.
pub fn decompose(value: &str) -> GrammarResult<Vec<&str>> {
    validate(value)?;
    Ok(value.split(SEPARATOR).collect())
}

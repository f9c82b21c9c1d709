//! Grammar production tests.

pub mod productions;

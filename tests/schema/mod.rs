//! Schema element and loading tests.

pub mod elements;
pub mod loading;

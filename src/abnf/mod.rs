//! ABNF productions from RFC 4512 used by schema element definitions.
//!
//! Each production lives in its own submodule and exposes free functions
//! (`validate`, and where the production has structure, `decompose` or
//! `unwrap`). The [`Production`] enum is the closed set of all productions and
//! dispatches to those functions, so callers that pick a rule at run time
//! (configuration, CLI, error reporting) do not need a registry.
//!
//! Productions only ever delegate to productions listed before them:
//!
//! ```text
//! number      = DIGIT / ( LDIGIT 1*DIGIT )
//! numericoid  = number 1*( DOT number )        ; a single number is accepted
//! keystring   = leadkeychar *keychar
//! qdescr      = SQUOTE descr SQUOTE
//! qdescrlist  = [ qdescr *( SP qdescr ) ]       ; non-empty, no outer spaces
//! qdescrs     = qdescr / ( LPAREN WSP qdescrlist WSP RPAREN )
//! ```
//!
//! All functions are pure and hold no state, so they may be called from any
//! number of threads at once.
//!
//! ## Usage
//!
//! ```rust
//! use ldap_schema::abnf::{Production, qdescrs};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Production::Numericoid.validate("1.3.6.1.4.1.1466.115.121.1.15")?;
//!
//!     let names = qdescrs::decompose("('cn' 'commonName')")?;
//!     assert_eq!(names, vec!["cn", "commonName"]);
//!     Ok(())
//! }
//! ```

pub mod keystring;
pub mod number;
pub mod numericoid;
pub mod qdescr;
pub mod qdescrlist;
pub mod qdescrs;

use crate::error::{GrammarError, GrammarResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A named ABNF production.
///
/// The name returned by [`Production::name`] is the lowercase rule name from
/// RFC 4512 and is used verbatim in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Production {
    Number,
    Numericoid,
    Keystring,
    Qdescr,
    Qdescrlist,
    Qdescrs,
}

impl Production {
    /// Every production, leaf rules first.
    pub const ALL: [Production; 6] = [
        Production::Number,
        Production::Numericoid,
        Production::Keystring,
        Production::Qdescr,
        Production::Qdescrlist,
        Production::Qdescrs,
    ];

    /// The rule name as written in RFC 4512.
    pub fn name(self) -> &'static str {
        match self {
            Production::Number => "number",
            Production::Numericoid => "numericoid",
            Production::Keystring => "keystring",
            Production::Qdescr => "qdescr",
            Production::Qdescrlist => "qdescrlist",
            Production::Qdescrs => "qdescrs",
        }
    }

    /// Check that `value` conforms to this production.
    pub fn validate(self, value: &str) -> GrammarResult<()> {
        match self {
            Production::Number => number::validate(value),
            Production::Numericoid => numericoid::validate(value),
            Production::Keystring => keystring::validate(value),
            Production::Qdescr => qdescr::validate(value),
            Production::Qdescrlist => qdescrlist::validate(value),
            Production::Qdescrs => qdescrs::validate(value),
        }
    }

    /// Check a dynamically typed value against this production.
    ///
    /// Anything other than a JSON string is rejected with
    /// [`GrammarError::WrongInputType`] before the grammar is consulted.
    /// On success the borrowed string is returned.
    pub fn validate_value(self, value: &Value) -> GrammarResult<&str> {
        let text = value
            .as_str()
            .ok_or_else(|| GrammarError::wrong_input_type(self, value))?;
        self.validate(text)?;
        Ok(text)
    }

    pub fn conforms(self, value: &str) -> bool {
        self.validate(value).is_ok()
    }

    pub(crate) fn violation(self, value: &str) -> GrammarError {
        GrammarError::violation(self, value)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Production {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Production::ALL
            .into_iter()
            .find(|production| production.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown ABNF production '{}'", s))
    }
}

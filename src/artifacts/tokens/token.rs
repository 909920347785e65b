//! Token value type
//!
//! A token is the contents of one `[...]` region split on `:`.
//! The first field is the token's kind, e.g. `TILE` in `[TILE:5:GRASS]`.
//!
//! ## Limitations
//!
//! Fields cannot contain a literal `:`. Joining the fields back with `:`
//! reproduces the original bracket contents for every other input.

use crate::artifacts::tokens::FIELD_SEPARATOR;
use std::fmt::Display;

/// An ordered tuple of string fields parsed from a bracketed region
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    fields: Vec<String>,
}

impl Token {
    /// Parse the raw contents of a bracket (without the brackets themselves)
    ///
    /// An empty region yields a single empty field.
    pub fn parse(raw: &str) -> Self {
        Token {
            fields: raw.split(FIELD_SEPARATOR).map(String::from).collect(),
        }
    }

    /// The token kind (field 0)
    pub fn kind(&self) -> &str {
        // split always yields at least one item, so fields is never empty
        &self.fields[0]
    }

    /// All fields, kind included
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Reconstruct the bracket contents by joining the fields with `:`
    pub fn raw(&self) -> String {
        self.fields.join(FIELD_SEPARATOR)
    }
}

impl<S: Into<String>> FromIterator<S> for Token {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let fields = iter.into_iter().map(Into::into).collect::<Vec<String>>();

        if fields.is_empty() {
            return Token {
                fields: vec![String::new()],
            };
        }

        Token { fields }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.raw())
    }
}

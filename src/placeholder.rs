//! Named placeholder parsing.
//!
//! A message references caller-supplied values through `{{name}}` tokens.
//! Whitespace around the name is insignificant, so `{{ name }}` and
//! `{{name}}` name the same placeholder.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opening delimiter of a placeholder.
pub const PREFIX: &str = "{{";

/// Closing delimiter of a placeholder.
pub const SUFFIX: &str = "}}";

/// A named placeholder found in a translation message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Intermediate(String);

impl Intermediate {
    pub fn new(name: impl Into<String>) -> Self {
        Intermediate(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The literal token substituted at render time, e.g. `{{name}}`.
    pub fn token(&self) -> String {
        format!("{}{}{}", PREFIX, self.0, SUFFIX)
    }
}

impl Display for Intermediate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Malformed placeholder delimiters in a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("invalid format of intermediates: {open} opening but {close} closing delimiters")]
    Unbalanced { open: usize, close: usize },

    #[error("invalid format of intermediates, must end with a closing delimiter")]
    Unterminated,

    #[error("empty intermediate")]
    Empty,
}

/// Extracts the placeholders of `message` in occurrence order.
///
/// Duplicates are preserved. Fails when the delimiter counts differ, when an
/// opened placeholder is never closed, or when a name is blank.
pub fn parse_intermediates(message: &str) -> Result<Vec<Intermediate>, PlaceholderError> {
    let open = message.matches(PREFIX).count();
    let close = message.matches(SUFFIX).count();
    if open != close {
        return Err(PlaceholderError::Unbalanced { open, close });
    }

    // The text before the first prefix never holds a placeholder.
    message
        .split(PREFIX)
        .skip(1)
        .map(|part| {
            let end = part.find(SUFFIX).ok_or(PlaceholderError::Unterminated)?;
            let name = part[..end].trim();
            if name.is_empty() {
                return Err(PlaceholderError::Empty);
            }
            Ok(Intermediate::new(name))
        })
        .collect()
}

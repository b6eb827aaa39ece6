use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Separator joining the fragments of a [`Key`].
pub const SEPARATOR: char = '.';

/// Dot-delimited path identifying a translation across nesting levels.
///
/// Keys are built fragment by fragment with [`Key::append`]; a nested file
/// entry `{"tyson": {"defeated": "..."}}` ends up under `tyson.defeated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Returns a new key with `fragment` appended.
    ///
    /// Leading and trailing dots are trimmed from the fragment. A fragment that
    /// is empty after trimming leaves the key unchanged.
    pub fn append(&self, fragment: &str) -> Key {
        let fragment = fragment.trim_matches(SEPARATOR);
        if fragment.is_empty() {
            return self.clone();
        }

        if self.0.is_empty() {
            Key(fragment.to_string())
        } else {
            Key(format!("{}{}{}", self.0, SEPARATOR, fragment))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key(value)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

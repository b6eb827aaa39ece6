//! Two-letter language codes.

use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

lazy_static! {
    /// Exactly two characters of the Unicode letter category.
    static ref TWO_LETTERS: Regex = Regex::new(r"^\p{L}{2}$").unwrap();
}

/// The code abbreviation of a language, e.g. `en` or `de`.
///
/// Construction never validates; use [`Language::is_valid`] or parse through
/// [`FromStr`] to reject malformed codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Language(code.into())
    }

    /// Derives a language code from a file name without extension, lower-cased.
    pub fn from_file_stem(stem: &str) -> Self {
        Language(stem.to_lowercase())
    }

    /// True iff the code consists of exactly two letters (general category L).
    pub fn is_valid(&self) -> bool {
        TWO_LETTERS.is_match(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the code as a BCP 47 language identifier.
    pub fn to_identifier(&self) -> Option<LanguageIdentifier> {
        self.0.parse().ok()
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Language::new(value)
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language(value)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = Language::new(s);
        if language.is_valid() {
            Ok(language)
        } else {
            Err(Error::InvalidLanguage(language))
        }
    }
}

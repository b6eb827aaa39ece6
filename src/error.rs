//! All error types for the langcatalog crate.
//!
//! Load-time errors abort the whole load; render-time errors are per call and
//! leave the catalog untouched.

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    key::Key,
    language::Language,
    placeholder::{Intermediate, PlaceholderError},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid default language `{0}`, must follow two letter code")]
    InvalidDefaultLanguage(Language),

    #[error("invalid language `{0}`, must follow two letter code")]
    InvalidLanguage(Language),

    #[error(
        "invalid file naming scheme `{}`, allowed are only two letter codes",
        .0.display()
    )]
    InvalidFileName(PathBuf),

    #[error("failed to read `{}`: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("parse error: {source} for `{language}`")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid translation for `{key}` in `{language}`")]
    EmptyObject { language: Language, key: Key },

    #[error("invalid key under `{parent}` in `{language}`, should not be empty")]
    EmptyKey { language: Language, parent: Key },

    #[error("duplicate key `{key}` in `{language}`")]
    DuplicateKey { language: Language, key: Key },

    #[error("no translations found for `{0}`")]
    EmptyStore(Language),

    #[error(
        "invalid type {found} for `{key}` in `{language}`, only string or objects as values allowed"
    )]
    InvalidValueType {
        language: Language,
        key: Key,
        found: &'static str,
    },

    #[error("{source} with key `{key}` for `{language}`")]
    Format {
        language: Language,
        key: Key,
        #[source]
        source: PlaceholderError,
    },

    #[error("no translations found for default language `{0}`")]
    MissingDefaultLanguage(Language),

    #[error("unknown language `{0}`")]
    UnknownLanguage(Language),

    #[error("unknown key `{0}`")]
    UnknownKey(Key),

    #[error("invalid parameter list, expected name/value pairs but got {0} values")]
    OddParameterCount(usize),

    #[error("parameter name at position {0} must be a string")]
    NonStringParameterName(usize),

    #[error("parameter required for intermediate in translation `{key}`: `{intermediate}`")]
    MissingParameter { key: Key, intermediate: Intermediate },
}

impl Error {
    /// True for errors raised while loading a catalog.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDefaultLanguage(_)
                | Error::InvalidFileName(_)
                | Error::Read { .. }
                | Error::Walk(_)
                | Error::Parse { .. }
                | Error::EmptyObject { .. }
                | Error::EmptyKey { .. }
                | Error::DuplicateKey { .. }
                | Error::EmptyStore(_)
                | Error::InvalidValueType { .. }
                | Error::Format { .. }
                | Error::MissingDefaultLanguage(_)
        )
    }

    /// True for unknown language or key at render time.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Error::UnknownLanguage(_) | Error::UnknownKey(_))
    }

    /// True for malformed or missing render parameters.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::OddParameterCount(_)
                | Error::NonStringParameterName(_)
                | Error::MissingParameter { .. }
        )
    }
}

//! Core loaded types: translations and per-language stores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    key::Key,
    placeholder::{Intermediate, PlaceholderError, parse_intermediates},
};

/// A single message together with the placeholders it references.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Translation {
    /// The raw message as authored, placeholders included.
    pub message: String,

    /// Placeholders in occurrence order; repeated names appear repeatedly.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub intermediates: Vec<Intermediate>,
}

impl Translation {
    /// Parses the placeholders of `message`.
    pub fn parse(message: impl Into<String>) -> Result<Self, PlaceholderError> {
        let message = message.into();
        let intermediates = parse_intermediates(&message)?;
        Ok(Translation {
            message,
            intermediates,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn intermediates(&self) -> &[Intermediate] {
        &self.intermediates
    }

    /// Placeholders with repeats removed, first occurrence wins.
    pub fn unique_intermediates(&self) -> Vec<&Intermediate> {
        let mut seen = Vec::with_capacity(self.intermediates.len());
        for intermediate in &self.intermediates {
            if !seen.contains(&intermediate) {
                seen.push(intermediate);
            }
        }
        seen
    }
}

/// One language's flat key to translation mapping.
pub type Store = HashMap<Key, Translation>;

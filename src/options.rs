//! Options controlling how a catalog is loaded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Load behavior for [`crate::Catalog`].
///
/// Derives serde so hosts can embed it in their own configuration files;
/// only `directory` and `default_language` are required there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoadOptions {
    /// Root directory scanned recursively for translation files.
    pub directory: PathBuf,

    /// Language that must be present after loading and that renderers fall
    /// back to.
    pub default_language: Language,

    /// Extension of translation files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether symbolic links are followed during the directory walk.
    #[serde(default)]
    pub follow_links: bool,

    /// Maximum recursion depth below `directory`; unlimited when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

fn default_extension() -> String {
    "json".to_string()
}

impl LoadOptions {
    /// Creates options with default extension and walk settings.
    pub fn new(directory: impl Into<PathBuf>, default_language: impl Into<Language>) -> Self {
        Self {
            directory: directory.into(),
            default_language: default_language.into(),
            extension: default_extension(),
            follow_links: false,
            max_depth: None,
        }
    }

    /// Sets the translation file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enables/disables following symbolic links.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Limits how deep below the root directory files are picked up.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

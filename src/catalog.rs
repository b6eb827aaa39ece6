//! The loaded set of per-language translation stores.
//!
//! A catalog is configured first and populated wholesale by [`Catalog::load`],
//! which returns a new instance and never touches the one it was called on.
//! Once loaded it is read-only, so shared references may render concurrently.
//!
//! ```rust,no_run
//! use langcatalog::{Catalog, Params, Translate};
//!
//! let catalog = Catalog::new("locales", "en").load()?;
//! let text = catalog.translate("greeting", &Params::new().with("name", "Ada"))?;
//!
//! let german = catalog.renderer_for("de");
//! let text = german.translate("greeting", &Params::new().with("name", "Ada"))?;
//! # Ok::<(), langcatalog::Error>(())
//! ```

use std::{collections::HashMap, path::Path};

use log::info;

use crate::{
    error::Error,
    key::Key,
    language::Language,
    loader::load_directory,
    options::LoadOptions,
    renderer::{DynamicRenderer, FixedRenderer, LanguageResolver, SafeHtml, render},
    types::{Store, Translation},
    value::{Params, Value},
};

#[derive(Debug, Clone)]
pub struct Catalog {
    options: LoadOptions,
    translations: HashMap<Language, Store>,
}

impl Catalog {
    /// Creates an unloaded catalog for `directory` with the given default
    /// language.
    pub fn new(directory: impl AsRef<Path>, default_language: impl Into<Language>) -> Self {
        Self::with_options(LoadOptions::new(
            directory.as_ref().to_path_buf(),
            default_language,
        ))
    }

    /// Creates an unloaded catalog from explicit options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            options,
            translations: HashMap::new(),
        }
    }

    /// Loads every translation file of the configured directory.
    ///
    /// The default language is validated before the directory is touched.
    /// Any failure aborts the whole load and no partial catalog is returned.
    pub fn load(&self) -> Result<Catalog, Error> {
        let default_language = &self.options.default_language;
        if !default_language.is_valid() {
            return Err(Error::InvalidDefaultLanguage(default_language.clone()));
        }

        let translations = load_directory(&self.options)?;

        if !translations.contains_key(default_language) {
            return Err(Error::MissingDefaultLanguage(default_language.clone()));
        }

        info!(
            "loaded {} language(s) from {}",
            translations.len(),
            self.options.directory.display()
        );

        Ok(Catalog {
            options: self.options.clone(),
            translations,
        })
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn directory(&self) -> &Path {
        &self.options.directory
    }

    pub fn default_language(&self) -> &Language {
        &self.options.default_language
    }

    /// Languages present in the catalog, sorted.
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.translations.keys().collect();
        languages.sort();
        languages
    }

    pub fn store(&self, language: &Language) -> Option<&Store> {
        self.translations.get(language)
    }

    pub fn get(&self, language: &Language, key: &str) -> Option<&Translation> {
        self.store(language)?.get(&Key::from(key))
    }

    pub fn contains(&self, language: &Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Keys of `language`, sorted; empty when the language is not loaded.
    pub fn keys(&self, language: &Language) -> Vec<&Key> {
        let mut keys: Vec<&Key> = self
            .store(language)
            .map(|store| store.keys().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Number of loaded languages.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Keys of the default language that `language` does not translate, sorted.
    pub fn missing_keys(&self, language: &Language) -> Vec<&Key> {
        let target = self.store(language);
        self.keys(self.default_language())
            .into_iter()
            .filter(|key| target.is_none_or(|store| !store.contains_key(*key)))
            .collect()
    }

    /// Renders `key` in the default language.
    pub fn translate(&self, key: &str, params: &Params) -> Result<SafeHtml, Error> {
        render(self, self.default_language(), key, params)
    }

    /// Renders `key` in the default language with alternating name/value
    /// arguments.
    pub fn translate_args(&self, key: &str, args: &[Value]) -> Result<SafeHtml, Error> {
        let params = Params::from_alternating(args)?;
        self.translate(key, &params)
    }

    /// A renderer that asks `resolver` for the language on every call.
    pub fn renderer<R: LanguageResolver>(&self, resolver: R) -> DynamicRenderer<'_, R> {
        DynamicRenderer::new(self, resolver)
    }

    /// A renderer bound to `language`, see [`FixedRenderer::new`].
    pub fn renderer_for(&self, language: impl Into<Language>) -> FixedRenderer<'_> {
        FixedRenderer::new(self, language)
    }
}

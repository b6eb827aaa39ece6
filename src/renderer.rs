//! Rendering translations with escaped placeholder values.
//!
//! Only injected values are escaped. Message text itself is authored by
//! translators and passed through as trusted HTML, which is why every render
//! returns a [`SafeHtml`].

use std::fmt::Display;

use serde::Serialize;

use crate::{
    catalog::Catalog,
    error::Error,
    key::Key,
    language::Language,
    value::{Params, Value},
};

/// Rendered text that is already escaped and may be embedded as raw HTML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for SafeHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(value: SafeHtml) -> Self {
        value.0
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for safe embedding in HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Supplies the language of the current request, once per render call.
pub trait LanguageResolver {
    fn resolve(&self) -> String;
}

impl<F> LanguageResolver for F
where
    F: Fn() -> String,
{
    fn resolve(&self) -> String {
        self()
    }
}

/// Common rendering interface of all renderers.
pub trait Translate {
    /// Renders `key`, substituting placeholders from `params`.
    fn translate(&self, key: &str, params: &Params) -> Result<SafeHtml, Error>;

    /// Renders `key` with alternating name/value arguments.
    fn translate_args(&self, key: &str, args: &[Value]) -> Result<SafeHtml, Error> {
        let params = Params::from_alternating(args)?;
        self.translate(key, &params)
    }
}

/// Resolves the target language on every call, falling back to the default
/// language when the resolver yields an invalid code.
pub struct DynamicRenderer<'a, R> {
    catalog: &'a Catalog,
    resolver: R,
}

impl<'a, R: LanguageResolver> DynamicRenderer<'a, R> {
    pub fn new(catalog: &'a Catalog, resolver: R) -> Self {
        Self { catalog, resolver }
    }

    fn current_language(&self) -> Language {
        let candidate = Language::new(self.resolver.resolve());
        if candidate.is_valid() {
            candidate
        } else {
            self.catalog.default_language().clone()
        }
    }
}

impl<R: LanguageResolver> Translate for DynamicRenderer<'_, R> {
    fn translate(&self, key: &str, params: &Params) -> Result<SafeHtml, Error> {
        render(self.catalog, &self.current_language(), key, params)
    }
}

/// Bound to a single language for its whole lifetime.
pub struct FixedRenderer<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> FixedRenderer<'a> {
    /// Binds to `language`, or to the default language when `language` is
    /// invalid or has no loaded translations.
    pub fn new(catalog: &'a Catalog, language: impl Into<Language>) -> Self {
        let language = language.into();
        let language = if language.is_valid() && catalog.store(&language).is_some() {
            language
        } else {
            catalog.default_language().clone()
        };
        Self { catalog, language }
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}

impl Translate for FixedRenderer<'_> {
    fn translate(&self, key: &str, params: &Params) -> Result<SafeHtml, Error> {
        render(self.catalog, &self.language, key, params)
    }
}

/// Looks up `key` in `language` and substitutes every placeholder token.
pub(crate) fn render(
    catalog: &Catalog,
    language: &Language,
    key: &str,
    params: &Params,
) -> Result<SafeHtml, Error> {
    let key = Key::from(key);
    let store = catalog
        .store(language)
        .ok_or_else(|| Error::UnknownLanguage(language.clone()))?;
    let translation = store
        .get(&key)
        .ok_or_else(|| Error::UnknownKey(key.clone()))?;

    let mut message = translation.message.clone();
    for intermediate in &translation.intermediates {
        let value = params
            .get(intermediate)
            .ok_or_else(|| Error::MissingParameter {
                key: key.clone(),
                intermediate: intermediate.clone(),
            })?;

        let escaped = escape_html(&value.to_string());
        message = message.replace(&intermediate.token(), &escaped);
    }

    Ok(SafeHtml(message))
}

#![forbid(unsafe_code)]
//! Nested JSON translation catalogs for Rust.
//!
//! Loads one `<code>.json` file per language from a directory tree, flattens
//! nested objects into dotted keys, and renders translations by substituting
//! `{{name}}` placeholders with HTML-escaped values.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langcatalog::{Catalog, Params, Translate};
//!
//! // locales/en.json: {"user": {"greeting": "Hello <b>{{name}}</b>"}}
//! let catalog = Catalog::new("locales", "en").load()?;
//!
//! let html = catalog.translate("user.greeting", &Params::new().with("name", "<Ada>"))?;
//! assert_eq!(html.as_str(), "Hello <b>&lt;Ada&gt;</b>");
//!
//! // Pick the language per request.
//! let renderer = catalog.renderer(|| "de".to_string());
//! let html = renderer.translate_args("user.greeting", &["name".into(), "Ada".into()])?;
//! # Ok::<(), langcatalog::Error>(())
//! ```
//!
//! # File format
//!
//! - Values are strings (translations) or nested objects (grouping levels).
//! - Numbers, booleans, arrays, `null`, empty objects and empty keys are
//!   rejected when loading.
//! - Files whose names are not two-letter codes abort the load; files with
//!   other extensions are ignored.

pub mod catalog;
pub mod error;
pub mod key;
pub mod language;
mod loader;
pub mod options;
pub mod placeholder;
pub mod renderer;
pub mod types;
pub mod value;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::Catalog,
    error::Error,
    key::Key,
    language::Language,
    options::LoadOptions,
    placeholder::{Intermediate, PlaceholderError, parse_intermediates},
    renderer::{
        DynamicRenderer, FixedRenderer, LanguageResolver, SafeHtml, Translate, escape_html,
    },
    types::{Store, Translation},
    value::{Params, Value},
};

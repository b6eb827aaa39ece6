//! Directory walking and flattening of nested translation files.
//!
//! Each `<code>.json` file below the root directory contributes one language.
//! Nested objects are collapsed into dotted keys, following the i18next
//! convention, so `{"tyson": {"defeated": "..."}}` yields `tyson.defeated`.

use std::{collections::HashMap, fs, path::Path};

use log::{debug, trace, warn};
use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::{
    error::Error,
    key::Key,
    language::Language,
    options::LoadOptions,
    types::{Store, Translation},
};

/// Walks the configured directory and builds one store per language.
///
/// Files are visited in file name order. When several files map onto the same
/// language code, their entries are merged and later files win on overlapping
/// keys.
pub(crate) fn load_directory(options: &LoadOptions) -> Result<HashMap<Language, Store>, Error> {
    let mut walker = WalkDir::new(&options.directory)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut translations: HashMap<Language, Store> = HashMap::new();

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let Some(stem) = translation_stem(path, &options.extension) else {
            trace!("skipping non-translation file {}", path.display());
            continue;
        };

        let language = language_from_stem(&stem, path)?;
        let store = load_file(path, &language)?;
        debug!(
            "loaded {} translations for `{}` from {}",
            store.len(),
            language,
            path.display()
        );

        match translations.get_mut(&language) {
            Some(existing) => {
                warn!(
                    "{} maps onto already loaded language `{}`, overlapping keys are replaced",
                    path.display(),
                    language
                );
                existing.extend(store);
            }
            None => {
                translations.insert(language, store);
            }
        }
    }

    Ok(translations)
}

/// The file name without its `.{extension}` suffix, or `None` for files of
/// another type. A bare `.json` yields an empty stem.
fn translation_stem(path: &Path, extension: &str) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let suffix = format!(".{}", extension);
    name.strip_suffix(suffix.as_str()).map(str::to_string)
}

/// Derives the lower-cased language code from a stem such as `EN`.
fn language_from_stem(stem: &str, path: &Path) -> Result<Language, Error> {
    let language = Language::from_file_stem(stem);
    if !language.is_valid() {
        return Err(Error::InvalidFileName(path.to_path_buf()));
    }
    Ok(language)
}

/// Reads and flattens a single translation file.
pub(crate) fn load_file(path: &Path, language: &Language) -> Result<Store, Error> {
    let content = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_store(&content, language)
}

/// Parses file content into a flat store for `language`.
pub(crate) fn parse_store(content: &[u8], language: &Language) -> Result<Store, Error> {
    let tree: Map<String, Value> =
        serde_json::from_slice(content).map_err(|source| Error::Parse {
            language: language.clone(),
            source,
        })?;

    let mut flattener = Flattener {
        language,
        store: Store::new(),
    };
    flattener.flatten(&Key::default(), &tree)?;

    if flattener.store.is_empty() {
        return Err(Error::EmptyStore(language.clone()));
    }
    Ok(flattener.store)
}

/// A parsed JSON value as seen by the flattener.
enum Node<'a> {
    Text(&'a str),
    Group(&'a Map<String, Value>),
    Other(&'static str),
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Node::Text(s),
            Value::Object(map) => Node::Group(map),
            Value::Null => Node::Other("null"),
            Value::Bool(_) => Node::Other("boolean"),
            Value::Number(_) => Node::Other("number"),
            Value::Array(_) => Node::Other("array"),
        }
    }
}

struct Flattener<'a> {
    language: &'a Language,
    store: Store,
}

impl Flattener<'_> {
    fn flatten(&mut self, root: &Key, data: &Map<String, Value>) -> Result<(), Error> {
        if data.is_empty() {
            return Err(Error::EmptyObject {
                language: self.language.clone(),
                key: root.clone(),
            });
        }

        for (fragment, value) in data {
            if fragment.is_empty() {
                return Err(Error::EmptyKey {
                    language: self.language.clone(),
                    parent: root.clone(),
                });
            }

            let key = root.append(fragment);

            match Node::from(value) {
                Node::Text(message) => self.insert_leaf(key, message)?,
                Node::Group(children) => self.flatten(&key, children)?,
                Node::Other(found) => {
                    return Err(Error::InvalidValueType {
                        language: self.language.clone(),
                        key,
                        found,
                    });
                }
            }
        }

        Ok(())
    }

    fn insert_leaf(&mut self, key: Key, message: &str) -> Result<(), Error> {
        let translation = Translation::parse(message).map_err(|source| Error::Format {
            language: self.language.clone(),
            key: key.clone(),
            source,
        })?;

        if self.store.contains_key(&key) {
            return Err(Error::DuplicateKey {
                language: self.language.clone(),
                key,
            });
        }
        self.store.insert(key, translation);
        Ok(())
    }
}

use std::path::Path;

use langcatalog::{Catalog, Error, Language, Params, Translate};
use log::debug;

fn load(dir: &Path, default: &str) -> Result<Catalog, Error> {
    debug!("loading catalog from {}", dir.display());
    Catalog::new(dir, default).load()
}

/// Parses a `name=value` placeholder argument.
pub fn parse_param(input: &str) -> Result<(String, String), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got `{}`", input))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing placeholder name in `{}`", input));
    }
    Ok((name.to_string(), value.to_string()))
}

pub fn run_check(dir: &Path, default: &str) -> Result<(), Error> {
    let catalog = load(dir, default)?;
    let default_language = catalog.default_language();

    println!("Default language: {}", default_language);
    for language in catalog.languages() {
        let total = catalog.keys(language).len();
        let missing = catalog.missing_keys(language);
        println!(
            "  {}: {} translation(s), {} missing",
            language,
            total,
            missing.len()
        );
        for key in missing {
            println!("    - {}", key);
        }
    }
    Ok(())
}

pub fn run_languages(dir: &Path, default: &str) -> Result<(), Error> {
    let catalog = load(dir, default)?;
    for language in catalog.languages() {
        println!("{}", language);
    }
    Ok(())
}

pub fn run_keys(dir: &Path, default: &str, lang: Option<&str>) -> Result<(), Error> {
    let catalog = load(dir, default)?;
    let language = lang
        .map(Language::from)
        .unwrap_or_else(|| catalog.default_language().clone());

    if catalog.store(&language).is_none() {
        return Err(Error::UnknownLanguage(language));
    }
    for key in catalog.keys(&language) {
        println!("{}", key);
    }
    Ok(())
}

pub fn run_render(
    dir: &Path,
    default: &str,
    lang: Option<&str>,
    key: &str,
    params: Vec<(String, String)>,
) -> Result<(), Error> {
    let catalog = load(dir, default)?;
    let params: Params = params.into_iter().collect();

    let renderer = catalog.renderer_for(lang.unwrap_or(default));
    let html = renderer.translate(key, &params)?;
    println!("{}", html);
    Ok(())
}

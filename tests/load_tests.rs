use indoc::indoc;
use langcatalog::{Catalog, Error, Key, Language, LoadOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn load(dir: &Path) -> Result<Catalog, Error> {
    Catalog::new(dir, "en").load()
}

/// Fixture mirroring a real-world file with nesting and placeholders.
const FIRST_EN: &str = indoc! {r#"
    {
        "welcome": "Welcome!",
        "whoami": "I am {{name}}",
        "expired": "Your {{item}} expired {{ago}} ago",
        "tyson": {
            "defeated": "{{opponent}} was defeated",
            "title": "Champion"
        },
        "menu": {
            "file": {
                "open": "Open",
                "close": "Close"
            },
            "edit": "Edit",
            "help": "Help"
        }
    }
"#};

const SECOND_EN: &str = indoc! {r#"
    {
        "hi": "{{a}}, {{b}} and {{c}}",
        "whoami": "Nobody",
        "expired": "Expired",
        "tyson": { "defeated": "Defeated" },
        "bye": "Bye"
    }
"#};

#[test]
fn test_single_file_round_trip() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a":"hello"}"#);

    let catalog = load(tmp.path()).unwrap();
    let store = catalog.store(&Language::from("en")).unwrap();
    assert_eq!(store.len(), 1);

    let translation = &store[&Key::from("a")];
    assert_eq!(translation.message(), "hello");
    assert!(translation.intermediates().is_empty());
}

#[test]
fn test_number_of_translations() {
    for (content, expected) in [(FIRST_EN, 9), (SECOND_EN, 5)] {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "en.json", content);

        let catalog = load(tmp.path()).unwrap();
        assert_eq!(catalog.keys(&Language::from("en")).len(), expected);
    }
}

#[test]
fn test_number_of_intermediates() {
    let cases = [
        (FIRST_EN, "whoami", 1),
        (FIRST_EN, "expired", 2),
        (FIRST_EN, "tyson.defeated", 1),
        (SECOND_EN, "hi", 3),
        (SECOND_EN, "whoami", 0),
        (SECOND_EN, "expired", 0),
        (SECOND_EN, "tyson.defeated", 0),
    ];

    for (content, key, expected) in cases {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "en.json", content);

        let catalog = load(tmp.path()).unwrap();
        let translation = catalog
            .get(&Language::from("en"), key)
            .unwrap_or_else(|| panic!("could not find key {:?}", key));
        assert_eq!(translation.intermediates().len(), expected, "key {:?}", key);
    }
}

#[test]
fn test_nested_directories_and_languages() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a": "A"}"#);
    write(tmp.path(), "nested/deeper/DE.json", r#"{"a": "A-de"}"#);
    write(tmp.path(), "README.md", "not a translation");
    write(tmp.path(), "notes.txt", "ignored");

    let catalog = load(tmp.path()).unwrap();
    let languages: Vec<&str> = catalog.languages().into_iter().map(Language::as_str).collect();
    assert_eq!(languages, vec!["de", "en"]);
    assert_eq!(
        catalog.get(&Language::from("de"), "a").unwrap().message(),
        "A-de"
    );
}

#[test]
fn test_invalid_default_language_touches_no_directory() {
    // The directory does not exist; the default language check comes first.
    let err = Catalog::new("/definitely/not/here", "eng").load().unwrap_err();
    assert!(matches!(err, Error::InvalidDefaultLanguage(_)));
}

#[test]
fn test_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let err = load(&tmp.path().join("noooooo")).unwrap_err();
    assert!(matches!(err, Error::Walk(_)));
}

#[test]
fn test_rejects_invalid_files() {
    let cases: [(&str, &str, fn(&Error) -> bool); 11] = [
        ("english.json", r#"{"a": "x"}"#, |e| {
            matches!(e, Error::InvalidFileName(_))
        }),
        ("en.json", r#"{"a": "x""#, |e| matches!(e, Error::Parse { .. })),
        ("en.json", r#"{"": "x"}"#, |e| matches!(e, Error::EmptyKey { .. })),
        ("en.json", r#"{"a": {"": "x"}}"#, |e| {
            matches!(e, Error::EmptyKey { .. })
        }),
        ("en.json", r#"{"a": "{{b"}"#, |e| matches!(e, Error::Format { .. })),
        ("en.json", r#"{"a": "{{}}"}"#, |e| matches!(e, Error::Format { .. })),
        ("en.json", r#"{"a": "b}} {{c"}"#, |e| {
            matches!(e, Error::Format { .. })
        }),
        ("en.json", r#"{"a": 5}"#, |e| {
            matches!(e, Error::InvalidValueType { .. })
        }),
        ("en.json", r#"{"a": {"b": [1, 2]}}"#, |e| {
            matches!(e, Error::InvalidValueType { .. })
        }),
        ("en.json", "{}", |e| matches!(e, Error::EmptyObject { .. })),
        ("en.json", r#"{"a": {}}"#, |e| matches!(e, Error::EmptyObject { .. })),
    ];

    for (name, content, check) in cases {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), name, content);

        let err = load(tmp.path()).unwrap_err();
        assert!(check(&err), "{} {:?}: unexpected {:?}", name, content, err);
        assert!(err.is_load_error());
    }
}

#[test]
fn test_invalid_file_in_other_language_fails_whole_load() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a": "x"}"#);
    write(tmp.path(), "fr.json", r#"{"a": true}"#);

    assert!(load(tmp.path()).is_err());
}

#[test]
fn test_missing_default_language() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "de.json", r#"{"a": "x"}"#);

    let err = load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::MissingDefaultLanguage(ref l) if l.as_str() == "en"));
}

#[test]
fn test_empty_directory() {
    let tmp = TempDir::new().unwrap();
    let err = load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::MissingDefaultLanguage(_)));
}

#[test]
fn test_case_variants_merge_last_write_wins() {
    let tmp = TempDir::new().unwrap();
    // Visited in file name order: `EN.json` sorts before `en.json`.
    write(tmp.path(), "EN.json", r#"{"a": "upper", "only_upper": "u"}"#);
    write(tmp.path(), "en.json", r#"{"a": "lower"}"#);

    let catalog = load(tmp.path()).unwrap();
    let en = Language::from("en");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(&en, "a").unwrap().message(), "lower");
    if catalog.contains(&en, "only_upper") {
        assert_eq!(catalog.keys(&en).len(), 2);
    } else {
        // Case-insensitive filesystems keep a single file holding the last write.
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
        assert_eq!(catalog.keys(&en).len(), 1);
    }
}

#[test]
fn test_bare_extension_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a": "x"}"#);
    write(tmp.path(), ".json", r#"{"a": "x"}"#);

    let err = load(tmp.path()).unwrap_err();
    assert!(
        matches!(err, Error::InvalidFileName(ref path) if path.ends_with(".json")),
        "unexpected {:?}",
        err
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_reports_path() {
    let tmp = TempDir::new().unwrap();
    std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("en.json")).unwrap();

    let err = load(tmp.path()).unwrap_err();
    match &err {
        Error::Read { path, .. } => assert!(path.ends_with("en.json")),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().contains("en.json"));
}

#[test]
fn test_load_leaves_receiver_untouched() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a": "x"}"#);

    let unloaded = Catalog::new(tmp.path(), "en");
    let loaded = unloaded.load().unwrap();
    assert!(unloaded.is_empty());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.directory(), tmp.path());
}

#[test]
fn test_reload_after_fix() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a": 1}"#);

    let catalog = Catalog::new(tmp.path(), "en");
    assert!(catalog.load().is_err());

    write(tmp.path(), "en.json", r#"{"a": "fixed"}"#);
    let loaded = catalog.load().unwrap();
    assert_eq!(loaded.get(&Language::from("en"), "a").unwrap().message(), "fixed");
}

#[test]
fn test_custom_extension_and_depth() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.i18n", r#"{"a": "x"}"#);
    write(tmp.path(), "en.json", "this is not json");
    write(tmp.path(), "sub/de.i18n", r#"{"a": "y"}"#);

    let options = LoadOptions::new(tmp.path(), "en")
        .with_extension("i18n")
        .with_max_depth(Some(1));
    let catalog = Catalog::with_options(options).load().unwrap();
    assert_eq!(catalog.languages(), vec![&Language::from("en")]);
}

#[test]
fn test_missing_keys() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "en.json", r#"{"a": "A", "b": {"c": "C"}, "d": "D"}"#);
    write(tmp.path(), "de.json", r#"{"a": "A"}"#);

    let catalog = load(tmp.path()).unwrap();
    let missing: Vec<&str> = catalog
        .missing_keys(&Language::from("de"))
        .into_iter()
        .map(Key::as_str)
        .collect();
    assert_eq!(missing, vec!["b.c", "d"]);
    assert!(catalog.missing_keys(&Language::from("en")).is_empty());
    assert_eq!(catalog.missing_keys(&Language::from("fr")).len(), 3);
}

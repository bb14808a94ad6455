use std::fs;

use indoc::indoc;
use localedit::{Error, Limits, SourceFile, TranslationStore, export};

fn file(name: &str, content: &str) -> SourceFile {
    SourceFile::new(name, content.as_bytes().to_vec())
}

fn loaded(files: Vec<SourceFile>) -> TranslationStore {
    let mut store = TranslationStore::new();
    store
        .load(files, &Limits::default())
        .expect("load should succeed");
    store
}

#[test]
fn test_export_locale_writes_canonical_json() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = loaded(vec![file("en.json", r#"{"b": "2", "a": ""}"#)]);

    let path = export::export_locale(&mut store, "en", tmp.path()).unwrap();

    assert_eq!(path, tmp.path().join("en.json"));
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\n  \"a\": \"\",\n  \"b\": \"2\"\n}");
}

#[test]
fn test_export_locale_overwrites_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("en.json"), "stale content").unwrap();

    let mut store = loaded(vec![file("en.json", r#"{"a": "x"}"#)]);
    export::export_locale(&mut store, "en", tmp.path()).unwrap();

    let content = fs::read_to_string(tmp.path().join("en.json")).unwrap();
    assert_eq!(content, "{\n  \"a\": \"x\"\n}");
}

#[test]
fn test_export_locale_creates_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("deep").join("out");

    let mut store = loaded(vec![file("en.json", r#"{"a": "x"}"#)]);
    export::export_locale(&mut store, "en", &nested).unwrap();

    assert!(nested.join("en.json").exists());
}

#[test]
fn test_export_locale_missing_locale_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = loaded(vec![file("en.json", r#"{"a": "x"}"#)]);

    let err = export::export_locale(&mut store, "de", tmp.path()).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_export_locale_clears_whole_store_dirty_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = loaded(vec![
        file("en.json", r#"{"a": "x"}"#),
        file("fr.json", r#"{"a": "y"}"#),
    ]);
    store.update("en", "a", "edited").unwrap();
    store.select_locale("fr").unwrap();
    store.update("fr", "a", "modifié").unwrap();
    assert!(store.is_dirty());

    // Only "en" is written, yet the flag clears for the whole store.
    export::export_locale(&mut store, "en", tmp.path()).unwrap();
    assert!(!store.is_dirty());
    assert!(!tmp.path().join("fr.json").exists());
}

#[test]
fn test_export_all_writes_every_locale() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = loaded(vec![
        file("en.json", r#"{"a": "x"}"#),
        file("fr.json", r#"{"a": "y"}"#),
    ]);
    store.update("en", "a", "edited").unwrap();

    let written = export::export_all(&mut store, tmp.path()).unwrap();

    assert_eq!(written.len(), 2);
    assert!(tmp.path().join("en.json").exists());
    assert!(tmp.path().join("fr.json").exists());
    assert!(!store.is_dirty());
}

#[test]
fn test_export_all_on_empty_store_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = TranslationStore::new();
    let written = export::export_all(&mut store, tmp.path()).unwrap();
    assert!(written.is_empty());
}

#[test]
fn test_export_all_fails_fast_when_output_dir_is_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, "occupied").unwrap();

    let mut store = loaded(vec![file("en.json", r#"{"a": "x"}"#)]);
    store.update("en", "a", "edited").unwrap();

    let err = export::export_all(&mut store, &blocker).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    // The failed export must not pretend the edits were persisted.
    assert!(store.is_dirty());
}

#[test]
fn test_export_failure_releases_io_guard() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, "occupied").unwrap();

    let mut store = loaded(vec![file("en.json", r#"{"a": "x"}"#)]);
    let _ = export::export_all(&mut store, &blocker).unwrap_err();

    // A follow-up export to a usable directory must not be rejected as busy.
    export::export_all(&mut store, tmp.path()).unwrap();
}

#[test]
fn test_exported_file_reloads_to_the_same_dictionary() {
    let tmp = tempfile::tempdir().unwrap();
    let source = indoc! {r#"
        {
            "menu.open": "Open",
            "menu.quit": "",
            "title": "Editor"
        }
    "#};
    let mut store = loaded(vec![file("en.json", source)]);
    let path = export::export_locale(&mut store, "en", tmp.path()).unwrap();

    let mut reloaded = TranslationStore::new();
    reloaded
        .load(
            vec![SourceFile::new("en.json", fs::read(&path).unwrap())],
            &Limits::default(),
        )
        .unwrap();

    assert_eq!(
        reloaded.get("en").unwrap().entries,
        store.get("en").unwrap().entries
    );
}

#[test]
fn test_unicode_values_survive_the_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = loaded(vec![file(
        "ja.json",
        r#"{"greeting": "こんにちは", "quote": "she said \"hi\""}"#,
    )]);

    let path = export::export_locale(&mut store, "ja", tmp.path()).unwrap();

    let mut reloaded = TranslationStore::new();
    reloaded
        .load(
            vec![SourceFile::new("ja.json", fs::read(&path).unwrap())],
            &Limits::default(),
        )
        .unwrap();

    let entries = &reloaded.get("ja").unwrap().entries;
    assert_eq!(entries.get("greeting"), Some(&"こんにちは".to_string()));
    assert_eq!(entries.get("quote"), Some(&"she said \"hi\"".to_string()));
}

//! Integration tests for context file storage.

use contextkit_core::store::{
    ContextStore, LoadCause, StoreError, list_contexts, load_context, save_context,
};
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case::empty(&[])]
#[case::single(&["https://example.com"])]
#[case::mixed(&["https://example.com", "~/Documents/report.pdf", "/var/log"])]
#[case::unicode(&["~/Música/canción.mp3", "https://例え.jp/パス", "emoji 🎉"])]
#[case::punctuation(&["\"quoted\"", "back\\slash", "tab\there", "new\nline"])]
#[case::duplicates(&["same", "same", "same"])]
fn test_save_then_load_returns_same_items(#[case] items: &[&str]) {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("ctx.json");
    let items = strings(items);

    save_context(&path, &items).unwrap();
    assert_eq!(load_context(&path).unwrap(), items);
}

#[test]
fn test_saving_twice_is_idempotent() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("ctx.json");
    let items = strings(&["a", "b"]);

    save_context(&path, &items).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    save_context(&path, &items).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(load_context(&path).unwrap(), items);
}

#[test]
fn test_save_overwrites_longer_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("ctx.json");

    save_context(&path, &strings(&["one", "two", "three"])).unwrap();
    save_context(&path, &strings(&["only"])).unwrap();

    assert_eq!(load_context(&path).unwrap(), strings(&["only"]));
}

#[test]
fn test_list_missing_dir_is_empty() {
    let tmp = tempdir().unwrap();
    let names = list_contexts(&tmp.path().join("does-not-exist")).unwrap();
    assert!(names.is_empty());
}

#[test]
fn test_list_empty_dir_is_empty() {
    let tmp = tempdir().unwrap();
    assert!(list_contexts(tmp.path()).unwrap().is_empty());
}

#[test]
fn test_list_is_sorted() {
    let tmp = tempdir().unwrap();
    for name in ["b.json", "a.json", "c.json"] {
        fs::write(tmp.path().join(name), "[]").unwrap();
    }

    assert_eq!(list_contexts(tmp.path()).unwrap(), vec!["a", "b", "c"]);
}

#[rstest]
#[case::object(r#"{"not": "an array"}"#)]
#[case::number("42")]
#[case::nested(r#"[["a"]]"#)]
#[case::truncated(r#"["a", "b""#)]
#[case::empty_file("")]
fn test_load_wrong_shape_is_error(#[case] content: &str) {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, content).unwrap();

    match load_context(&path) {
        Err(StoreError::Load { path: p, cause: LoadCause::Parse(_) }) => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_load_error_names_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{}").unwrap();

    let msg = load_context(&path).unwrap_err().to_string();
    assert!(msg.contains("broken.json"), "message was: {msg}");
}

#[test]
fn test_store_resolves_names_in_dir() {
    let tmp = tempdir().unwrap();
    let store = ContextStore::new(tmp.path());

    let path = store.save("research", &strings(&["https://arxiv.org"])).unwrap();
    assert_eq!(path, tmp.path().join("research.json"));
    assert_eq!(store.load("research").unwrap(), strings(&["https://arxiv.org"]));
    assert_eq!(store.list().unwrap(), vec!["research"]);
}

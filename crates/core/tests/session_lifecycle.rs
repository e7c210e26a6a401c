//! Integration tests for editing sessions backed by real files.

use contextkit_core::session::{Session, SessionError, SessionState};
use contextkit_core::store::{ContextStore, load_context};
use tempfile::tempdir;

#[test]
fn test_create_save_as_then_edit() {
    let tmp = tempdir().unwrap();
    let store = ContextStore::new(tmp.path());
    let path = store.path_for("writing").unwrap();

    let mut session = Session::create();
    session.add("https://docs.example.com").unwrap();
    session.add("~/drafts").unwrap();

    let saved = session.save_as(&path).unwrap();
    assert_eq!(saved.path, path);
    assert_eq!(store.list().unwrap(), vec!["writing"]);

    let mut session = Session::edit(&path).unwrap();
    assert_eq!(session.state(), SessionState::Loaded);
    session.remove(&[0]).unwrap();
    assert_eq!(session.state(), SessionState::Dirty);
    session.save().unwrap();

    assert_eq!(load_context(&path).unwrap(), vec!["~/drafts"]);
}

#[test]
fn test_remove_first_and_third_keeps_second() {
    let mut session = Session::create();
    for item in ["first", "second", "third"] {
        session.add(item).unwrap();
    }

    let remaining = session.remove(&[0, 2]).unwrap();
    assert_eq!(remaining, ["second"]);
}

#[test]
fn test_retry_after_needs_destination() {
    let tmp = tempdir().unwrap();
    let mut session = Session::create();
    session.add("https://example.com").unwrap();

    let unsaved = session.save().unwrap_err();
    assert!(matches!(unsaved.error, SessionError::NeedsDestination));

    let path = tmp.path().join("retry.json");
    let saved = unsaved.session.save_as(&path).unwrap();
    assert_eq!(saved.items, vec!["https://example.com"]);
    assert_eq!(load_context(&path).unwrap(), vec!["https://example.com"]);
}

#[test]
fn test_edit_missing_file_fails() {
    let tmp = tempdir().unwrap();
    let result = Session::edit(&tmp.path().join("nope.json"));
    assert!(matches!(result, Err(SessionError::Store(_))));
}

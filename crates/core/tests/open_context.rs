//! Integration tests for opening every reference of a context.

use contextkit_core::opener::{DryRunLauncher, LaunchRecord, OpenError, Opener};
use contextkit_core::store::{load_context, save_context};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_middle_item_does_not_block_others() {
    let tmp = tempdir().unwrap();
    let first = tmp.path().join("first.txt");
    let third = tmp.path().join("third");
    fs::write(&first, "1").unwrap();
    fs::create_dir(&third).unwrap();
    let missing = tmp.path().join("second.txt");

    let items = vec![
        first.to_string_lossy().to_string(),
        missing.to_string_lossy().to_string(),
        third.to_string_lossy().to_string(),
    ];

    let opener = Opener::new(DryRunLauncher::default());
    let report = opener.open_all(&items);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].reference, items[1]);
    assert!(matches!(report.failures[0].error, OpenError::PathNotFound(_)));
    assert_eq!(
        opener.launcher().launched(),
        vec![LaunchRecord::Path(first), LaunchRecord::Path(third)]
    );
}

#[test]
fn test_open_saved_context_mixes_urls_and_paths() {
    let tmp = tempdir().unwrap();
    let ctx = tmp.path().join("ctx.json");
    save_context(
        &ctx,
        &[
            "https://example.com".to_string(),
            tmp.path().to_string_lossy().to_string(),
            "file:///etc/hosts".to_string(),
        ],
    )
    .unwrap();

    let opener = Opener::new(DryRunLauncher::default());
    let report = opener.open_all(load_context(&ctx).unwrap());

    assert!(report.is_success());
    assert_eq!(
        opener.launcher().launched(),
        vec![
            LaunchRecord::Url("https://example.com".to_string()),
            LaunchRecord::Path(tmp.path().to_path_buf()),
            LaunchRecord::Url("file:///etc/hosts".to_string()),
        ]
    );
}

#[test]
fn test_path_not_found_reports_expanded_path() {
    let Some(home) = dirs::home_dir() else { return };
    let opener = Opener::new(DryRunLauncher::default());

    let err = opener.open("~/contextkit-no-such-entry-9f3a").unwrap_err();
    match err {
        OpenError::PathNotFound(p) => {
            assert_eq!(p, home.join("contextkit-no-such-entry-9f3a"))
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

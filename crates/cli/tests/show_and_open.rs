//! Integration tests for `ctxk show` and `ctxk open --dry-run`.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn setup(root: &Path) -> (PathBuf, PathBuf) {
    let settings = root.join("settings.json");
    let dir = root.join("contexts");
    fs::create_dir_all(&dir).unwrap();
    fs::write(&settings, serde_json::json!({ "contexts_dir": dir }).to_string()).unwrap();
    (settings, dir)
}

fn ctxk(settings: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ctxk"));
    cmd.arg("--settings").arg(settings);
    cmd
}

fn write_context(path: &Path, items: &[&str]) {
    fs::write(path, serde_json::to_string(items).unwrap()).unwrap();
}

#[test]
fn show_renders_table() {
    let tmp = tempdir().unwrap();
    let (settings, dir) = setup(tmp.path());
    write_context(&dir.join("daily.json"), &["https://example.com", "~/notes"]);

    let output = ctxk(&settings).args(["show", "daily"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    insta::assert_snapshot!(stdout.trim_end(), @r"
    ╭───┬──────┬─────────────────────╮
    │ # │ Kind │ Reference           │
    ├───┼──────┼─────────────────────┤
    │ 0 │ url  │ https://example.com │
    │ 1 │ path │ ~/notes             │
    ╰───┴──────┴─────────────────────╯
    ");
}

#[test]
fn show_json_includes_kind() {
    let tmp = tempdir().unwrap();
    let (settings, dir) = setup(tmp.path());
    write_context(&dir.join("daily.json"), &["FILE:///etc/hosts"]);

    let output = ctxk(&settings).args(["show", "daily", "--json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value[0]["kind"], "url");
    assert_eq!(value[0]["reference"], "FILE:///etc/hosts");
    assert_eq!(value[0]["index"], 0);
}

#[test]
fn show_rejects_non_array_file() {
    let tmp = tempdir().unwrap();
    let (settings, _dir) = setup(tmp.path());
    let file = tmp.path().join("odd.json");
    fs::write(&file, r#"{"not": "an array"}"#).unwrap();

    ctxk(&settings)
        .arg("show")
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array of strings"));
}

#[test]
fn open_dry_run_reports_missing_item_and_continues() {
    let tmp = tempdir().unwrap();
    let (settings, dir) = setup(tmp.path());
    let present = tmp.path().join("present.txt");
    fs::write(&present, "x").unwrap();
    let missing = tmp.path().join("missing.txt");

    write_context(
        &dir.join("mixed.json"),
        &["https://example.com", missing.to_str().unwrap(), present.to_str().unwrap()],
    );

    ctxk(&settings)
        .args(["open", "mixed", "--dry-run"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("would open url:  https://example.com"))
        .stdout(predicate::str::contains(format!(
            "would open path: {}",
            present.display()
        )))
        .stdout(predicate::str::contains("Opened 2 of 3 items."))
        .stderr(predicate::str::contains("Some items failed to open:"))
        .stderr(predicate::str::contains("path does not exist"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn open_reports_each_failure_once() {
    let tmp = tempdir().unwrap();
    let (settings, dir) = setup(tmp.path());
    let missing = tmp.path().join("missing.txt");
    write_context(&dir.join("broken.json"), &[missing.to_str().unwrap()]);

    let output = ctxk(&settings)
        .env_remove("RUST_LOG")
        .args(["open", "broken", "--dry-run"])
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("missing.txt").count(), 1, "stderr was: {stderr}");
}

#[test]
fn open_dry_run_all_ok() {
    let tmp = tempdir().unwrap();
    let (settings, dir) = setup(tmp.path());
    write_context(&dir.join("web.json"), &["https://a.example", "http://b.example"]);

    ctxk(&settings)
        .args(["open", "web", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All items opened successfully."));
}

#[test]
fn open_empty_context_is_not_an_error() {
    let tmp = tempdir().unwrap();
    let (settings, dir) = setup(tmp.path());
    write_context(&dir.join("empty.json"), &[]);

    ctxk(&settings)
        .args(["open", "empty", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No URLs or files/folders loaded to open."));
}

#[test]
fn open_unknown_context_fails() {
    let tmp = tempdir().unwrap();
    let (settings, _dir) = setup(tmp.path());

    ctxk(&settings)
        .args(["open", "nothing", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context not found: nothing"));
}

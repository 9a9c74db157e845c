//! End-to-end tests for the `sml-check` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sml_check() -> Command {
    Command::cargo_bin("sml-check").unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const BUTTON: &str = r#"Element {
    name: "Button"
    AllowedRoots { Root { name: "Column" } Root { name: "Row" } }
}"#;

const IMAGE: &str = r#"Element {
    name: "Image"
    // images only live in columns
    AllowedRoots { Root { name: "Column" } }
}"#;

#[test]
fn valid_file_passes() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "button.sml", BUTTON);

    sml_check()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("button.sml: ok"));
}

#[test]
fn invalid_file_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.sml", BUTTON);
    write(&dir, "bad.sml", "Element { name: }");

    sml_check()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.sml: ok"))
        .stdout(predicate::str::contains("bad.sml: ParseError: 1:17: expected a value"))
        .stderr(predicate::str::contains("1 of 2 file(s) failed to parse"));
}

#[test]
fn legacy_dialect_rejects_booleans() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "video.sml", "Video { autoplay: true }");

    sml_check().arg(&file).assert().success();
    sml_check().arg("--legacy").arg(&file).assert().failure();
}

#[test]
fn index_lists_sorted_children_per_root() {
    let dir = TempDir::new().unwrap();
    write(&dir, "image.sml", IMAGE);
    write(&dir, "button.sml", BUTTON);
    write(&dir, "readme.txt", "not sml");

    sml_check()
        .arg("--index")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Column: Button, Image"))
        .stdout(predicate::str::contains("Row: Button"))
        .stdout(predicate::str::contains("readme").not());
}

#[test]
fn missing_path_fails() {
    sml_check()
        .arg("/definitely/not/here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such file or directory"));
}

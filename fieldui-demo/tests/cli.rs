use std::fs;

use assert_cmd::cargo::{self};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui-demo");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("fieldui-demo"));
}

#[test]
fn lists_builtin_stories() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui-demo");
    cmd.arg("--list")
        .assert()
        .success()
        .stdout(contains("InvalidEmail"))
        .stdout(contains("Clearable"));
}

#[test]
fn list_honours_story_filter() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui-demo");
    cmd.args(["--list", "--story", "password"])
        .assert()
        .success()
        .stdout(contains("Password"))
        .stdout(contains("Clearable").not());
}

#[test]
fn unknown_story_fails() {
    let mut cmd = cargo::cargo_bin_cmd!("fieldui-demo");
    cmd.args(["--list", "--story", "nope"])
        .assert()
        .failure()
        .stderr(contains("unknown story 'nope'"));
}

#[test]
fn lists_stories_from_custom_catalog() {
    let dir = std::env::temp_dir().join(format!("fieldui-demo-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("custom.json");
    fs::write(
        &path,
        r#"{
            "stories": [
                { "name": "Only", "description": "just one", "args": { "label": "x" } }
            ]
        }"#,
    )
    .unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("fieldui-demo");
    cmd.arg("--list")
        .arg("--stories")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Only\tjust one"));
    let _ = fs::remove_dir_all(dir);
}

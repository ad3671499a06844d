//! Integration tests for configuration resolution

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{poststore_cmd, write_posts};

#[test]
fn test_config_defaults() {
    let temp = TempDir::new().unwrap();

    poststore_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_name = \"posts.json\""))
        .stdout(predicate::str::contains("locale = \"en\""))
        .stdout(predicate::str::contains("id_format = \"compat\""))
        .stdout(predicate::str::contains("cache = true"));
}

#[test]
fn test_config_file_data_dir() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("content")).unwrap();
    fs::write(
        temp.path().join("content").join("articles.json"),
        r#"[{"id": 1, "title": "From content dir"}]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("poststore.toml"),
        "data_dir = \"content\"\nfile_name = \"articles.json\"\n",
    )
    .unwrap();

    poststore_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("From content dir"));
}

#[test]
fn test_config_file_unknown_key() {
    let temp = TempDir::new().unwrap();
    write_posts(temp.path(), "[]");
    fs::write(temp.path().join("poststore.toml"), "colour = \"blue\"\n").unwrap();

    poststore_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("poststore.toml"));
}

#[test]
fn test_invalid_locale_flag() {
    let temp = TempDir::new().unwrap();
    write_posts(temp.path(), "[]");

    poststore_cmd()
        .current_dir(temp.path())
        .args(["list", "--locale", "not a locale"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("BCP-47"));
}

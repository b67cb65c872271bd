mod common;

use common::{rcr, temp_dir};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file pointing the output into `dir`.
fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("rchatreview.conf");
    let output = dir.join("out").join("ask");
    fs::write(
        &path,
        format!("output_prefix: {}\nchats_per_page: 3\n", output.display()),
    )
    .unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    rcr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("select"));
}

#[test]
fn test_init_test_mode_creates_output_dir_only() {
    let dir = temp_dir("cli_init");
    let config = write_config(&dir);
    let before = fs::read_to_string(&config).unwrap();

    rcr()
        .args(["--config", config.to_str().unwrap(), "--test", "init"])
        .assert()
        .success();

    assert!(dir.join("out").is_dir());
    assert_eq!(fs::read_to_string(&config).unwrap(), before);
}

#[test]
fn test_init_writes_config() {
    let dir = temp_dir("cli_init_write");
    let config = dir.join("fresh.conf");

    rcr()
        .current_dir(&dir)
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("chats_per_page: 121"));
    assert!(content.contains("missing_operator: skip"));
}

#[test]
fn test_config_print() {
    let dir = temp_dir("cli_config_print");
    let config = write_config(&dir);

    rcr()
        .args(["--config", config.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chats_per_page: 3"))
        .stdout(predicate::str::contains("sample_size: 605"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = temp_dir("cli_bad_config");
    let config = dir.join("bad.conf");
    fs::write(&config, "chats_per_page: 0\n").unwrap();

    rcr()
        .args(["--config", config.to_str().unwrap(), "config", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chats_per_page"));
}

#[test]
fn test_select_rejects_bad_range() {
    let dir = temp_dir("cli_bad_range");
    let config = write_config(&dir);

    rcr()
        .args([
            "--config",
            config.to_str().unwrap(),
            "select",
            "--range",
            "2023-13",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_report_rejects_zero_per_page() {
    let dir = temp_dir("cli_zero_per_page");
    let config = write_config(&dir);

    rcr()
        .args([
            "--config",
            config.to_str().unwrap(),
            "report",
            "--per-page",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chats_per_page must be at least 1"));
}

#[test]
fn test_report_rejects_bad_ids_file() {
    let dir = temp_dir("cli_bad_ids");
    let config = write_config(&dir);
    let ids = dir.join("ids.csv");
    fs::write(&ids, "id\nnot-a-number\n").unwrap();

    rcr()
        .args([
            "--config",
            config.to_str().unwrap(),
            "report",
            "--ids",
            ids.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chat id"));

    assert!(!dir.join("out").exists());
}

#[test]
fn test_report_rejects_missing_template() {
    let dir = temp_dir("cli_missing_template");
    let config = write_config(&dir);

    rcr()
        .args([
            "--config",
            config.to_str().unwrap(),
            "report",
            "--template",
            dir.join("nope.html").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template error"));
}

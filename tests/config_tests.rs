mod common;

use common::temp_dir;
use rchatreview::config::{Config, MissingOperator};
use rchatreview::core::ids::{read_ids, write_ids};
use rchatreview::errors::AppError;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = temp_dir("config_missing");
    let cfg = Config::load_from(&dir.join("absent.conf")).unwrap();
    assert_eq!(cfg.sample_size, 605);
    assert_eq!(cfg.chats_per_page, 121);
    assert_eq!(cfg.seed, 1);
    assert_eq!(cfg.gap_minutes, 5);
    assert_eq!(cfg.missing_operator, MissingOperator::Skip);
    assert_eq!(cfg.system_address, "system@chat.ca.libraryh3lp.com");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = temp_dir("config_partial");
    let path = dir.join("rchatreview.conf");
    fs::write(&path, "chats_per_page: 10\nmissing_operator: stop\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.chats_per_page, 10);
    assert_eq!(cfg.missing_operator, MissingOperator::Stop);
    assert_eq!(cfg.date_range, "2022-09-06:2023-08-31");
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = temp_dir("config_invalid");
    let path = dir.join("rchatreview.conf");

    fs::write(&path, "chats_per_page: 0\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    fs::write(&path, "sample_size: [not, a, number]\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_save_and_reload() {
    let dir = temp_dir("config_save");
    let path = dir.join("nested").join("rchatreview.conf");

    let mut cfg = Config::default();
    cfg.output_prefix = "/tmp/reviews/ask".to_string();
    cfg.api_username = Some("reviewer".to_string());
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.output_prefix, "/tmp/reviews/ask");
    assert_eq!(loaded.api_username.as_deref(), Some("reviewer"));
    assert!(!fs::read_to_string(&path).unwrap().contains("password:"));
}

#[test]
fn test_ids_file_round_trip() {
    let dir = temp_dir("ids_round_trip");
    let path = dir.join("ids.csv");
    write_ids(&path, &[42, 7, 1001]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "id\n42\n7\n1001\n");
    assert_eq!(read_ids(&path).unwrap(), vec![42, 7, 1001]);
}

#[test]
fn test_ids_plain_list_and_indexed_sheet() {
    let dir = temp_dir("ids_formats");

    let plain = dir.join("plain.txt");
    fs::write(&plain, "1\n2\n\n3\n").unwrap();
    assert_eq!(read_ids(&plain).unwrap(), vec![1, 2, 3]);

    let indexed = dir.join("indexed.csv");
    fs::write(&indexed, ",id\n0,5\n1,7\n").unwrap();
    assert_eq!(read_ids(&indexed).unwrap(), vec![5, 7]);
}

#[test]
fn test_ids_bad_value() {
    let dir = temp_dir("ids_bad");
    let path = dir.join("ids.csv");
    fs::write(&path, "id\n12\nabc\n").unwrap();
    assert!(matches!(read_ids(&path), Err(AppError::InvalidChatId(_))));
}

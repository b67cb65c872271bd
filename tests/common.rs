#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rchatreview::api::InMemoryChatSource;
use rchatreview::models::{ChatRecord, GuestRef, MessageEntry, OperatorRef, QueueRef};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcr() -> Command {
    cargo_bin_cmd!("rchatreview")
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rchatreview_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub const TRANSCRIPT: &str = concat!(
    "<div class=\"transcript\">",
    "<div>10:00 guest@web: hello</div>",
    "<div>10:01 Jane Smith: hi, Jane Smith here from ask-web@chat.ca.libraryh3lp.com</div>",
    "<div>10:09 guest@web: thanks</div>",
    "</div>"
);

/// An answered, ended chat on the `ask-web` queue handled by Jane Smith.
pub fn chat(id: i64) -> ChatRecord {
    ChatRecord {
        id,
        queue_id: Some(77),
        queue: QueueRef {
            id: Some(77),
            name: "ask-web".to_string(),
        },
        operator: Some(OperatorRef {
            name: Some("Jane Smith".to_string()),
        }),
        guest: GuestRef {
            jid: Some(format!("{:06}abcdef@guest.libraryh3lp.com", id)),
            id: Some(id * 10),
        },
        started: Some("2023-01-01T10:00:00".to_string()),
        accepted: Some("2023-01-01T10:02:00".to_string()),
        ended: Some("2023-01-01T10:10:00".to_string()),
        transcript: Some(TRANSCRIPT.to_string()),
    }
}

pub fn source_with(records: Vec<ChatRecord>) -> InMemoryChatSource {
    records
        .into_iter()
        .fold(InMemoryChatSource::new(), |src, r| src.with_record(r))
}

pub fn entry(counter: usize, markup: &str, stamp: Option<&str>) -> MessageEntry {
    MessageEntry {
        chat_id: 1,
        counter,
        raw_markup: markup.to_string(),
        timestamp: stamp.and_then(rchatreview::utils::parse_clock),
        timestamp_span: stamp.and_then(|s| markup.find(s).map(|at| at..at + s.len())),
        guest_jid: "guest".to_string(),
        standalone_url: "https://example.org/1".to_string(),
    }
}

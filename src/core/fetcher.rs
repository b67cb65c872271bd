//! Retrieves a chat and decomposes its transcript into message entries.

use crate::api::ChatSource;
use crate::errors::{AppError, AppResult};
use crate::models::{ChatRecord, MessageEntry};
use crate::ui::messages::{info, warning};
use crate::utils::parse_clock;
use chrono::NaiveTime;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::ops::Range;
use std::sync::LazyLock;

/// Used when a chat comes back without a transcript. The outer div is the
/// container that gets discarded, the inner one becomes the single entry.
pub const EMPTY_TRANSCRIPT: &str = "<div><div>No transcript found</div></div>";

/// A message line opens with its clock stamp, possibly behind inline tags.
static STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<div[^>]*>\s*(?:<[^>]+>\s*)*(\d{1,2}:\d{2})\b").expect("valid stamp regex")
});

static DIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("valid div selector"));

/// Fetch a chat and its ordered transcript entries.
pub fn fetch(
    source: &dyn ChatSource,
    chat_id: i64,
    url_template: &str,
) -> AppResult<(ChatRecord, Vec<MessageEntry>)> {
    info(format!("Retrieve transcript for {chat_id}"));
    let record = source.chat(chat_id)?;
    let entries = split_transcript(&record, url_template);
    Ok((record, entries))
}

/// Dashboard link for a chat.
pub fn standalone_url(url_template: &str, queue_id: Option<i64>, chat_id: i64) -> String {
    let queue = queue_id.map(|q| q.to_string()).unwrap_or_default();
    url_template
        .replace("{queue_id}", &queue)
        .replace("{chat_id}", &chat_id.to_string())
}

/// Split the transcript markup into entries. The first div wraps the whole
/// transcript and is skipped; malformed entries are dropped without
/// consuming a counter value.
pub fn split_transcript(record: &ChatRecord, url_template: &str) -> Vec<MessageEntry> {
    let markup = match record.transcript.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => EMPTY_TRANSCRIPT,
    };

    let url = standalone_url(url_template, record.queue_id(), record.id);
    let guest = record.guest_jid().to_string();
    let document = Html::parse_fragment(markup);

    let mut entries = Vec::new();
    for div in document.select(&DIV_SELECTOR).skip(1) {
        match parse_entry(record.id, div) {
            Ok((raw_markup, stamp)) => entries.push(MessageEntry {
                chat_id: record.id,
                counter: entries.len() + 1,
                raw_markup,
                timestamp: stamp.as_ref().map(|(_, t)| *t),
                timestamp_span: stamp.map(|(span, _)| span),
                guest_jid: guest.clone(),
                standalone_url: url.clone(),
            }),
            Err(e) => warning(format!("{e}, entry dropped")),
        }
    }

    entries
}

type Stamp = (Range<usize>, NaiveTime);

fn parse_entry(chat_id: i64, div: ElementRef<'_>) -> AppResult<(String, Option<Stamp>)> {
    let has_text = div.text().any(|t| !t.trim().is_empty());
    let has_children = div.children().any(|c| c.value().is_element());
    if !has_text && !has_children {
        return Err(AppError::MalformedTranscriptEntry {
            chat_id,
            reason: "empty message".into(),
        });
    }

    let raw = div.html();
    let stamp = leading_stamp(&raw);
    Ok((raw, stamp))
}

/// Clock stamp at the start of a message line: where it sits in `raw` and
/// the time it reads.
pub fn leading_stamp(raw: &str) -> Option<Stamp> {
    let stamp = STAMP_RE.captures(raw)?.get(1)?;
    parse_clock(stamp.as_str()).map(|t| (stamp.range(), t))
}

use chrono::NaiveTime;
use serde::Serialize;
use std::ops::Range;

/// One transcript line, in transcript order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageEntry {
    pub chat_id: i64,
    /// 1-based, contiguous.
    pub counter: usize,
    pub raw_markup: String,
    /// Time of the line, when the markup carries a leading `HH:MM` stamp.
    pub timestamp: Option<NaiveTime>,
    /// Byte range of that stamp within `raw_markup`.
    pub timestamp_span: Option<Range<usize>>,
    pub guest_jid: String,
    pub standalone_url: String,
}

impl MessageEntry {
    /// The stamp exactly as written.
    pub fn timestamp_text(&self) -> Option<&str> {
        self.raw_markup.get(self.timestamp_span.clone()?)
    }
}

//! Remote chat-history source.
//!
//! The pipeline only ever needs two queries: every chat started within a
//! date range, and one chat by id. `ChatSource` is the seam between the
//! pipeline and the helpdesk API so that the rest of the crate can be
//! driven from memory.

mod http;
mod memory;

pub use http::HttpChatSource;
pub use memory::InMemoryChatSource;

use crate::errors::{AppError, AppResult};
use crate::models::{ChatRecord, ChatSummary};
use chrono::NaiveDate;

pub trait ChatSource {
    /// All chats whose start date falls within `from..=to`.
    fn list_chats(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ChatSummary>>;

    /// A single chat with its transcript.
    fn chat(&self, id: i64) -> AppResult<ChatRecord>;
}

/// Decode the body of a fetch-by-id response. A record that does not decode
/// only concerns this chat.
pub fn decode_record(chat_id: i64, body: &str) -> AppResult<ChatRecord> {
    serde_json::from_str(body).map_err(|e| AppError::MalformedRecord {
        chat_id,
        reason: e.to_string(),
    })
}

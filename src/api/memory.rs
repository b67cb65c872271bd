use crate::api::ChatSource;
use crate::errors::{AppError, AppResult};
use crate::models::{ChatRecord, ChatSummary};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Chat source backed by in-process data (fixtures, offline runs, tests).
#[derive(Debug, Default)]
pub struct InMemoryChatSource {
    summaries: Vec<ChatSummary>,
    records: BTreeMap<i64, ChatRecord>,
    offline: bool,
}

impl InMemoryChatSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summaries(mut self, summaries: Vec<ChatSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_record(mut self, record: ChatRecord) -> Self {
        self.records.insert(record.id, record);
        self
    }

    /// Every query fails as if the upstream API were unreachable.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline {
            return Err(AppError::SourceUnavailable("source is offline".into()));
        }
        Ok(())
    }
}

fn started_on(summary: &ChatSummary) -> Option<NaiveDate> {
    let raw = summary.started.as_deref()?;
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

impl ChatSource for InMemoryChatSource {
    fn list_chats(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ChatSummary>> {
        self.ensure_online()?;
        Ok(self
            .summaries
            .iter()
            .filter(|s| match started_on(s) {
                Some(day) => day >= from && day <= to,
                // undated summaries are kept, the API decides the range
                None => true,
            })
            .cloned()
            .collect())
    }

    fn chat(&self, id: i64) -> AppResult<ChatRecord> {
        self.ensure_online()?;
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::Other(format!("chat {id} not found")))
    }
}

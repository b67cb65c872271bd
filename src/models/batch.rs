use serde::Serialize;
use std::path::PathBuf;

/// Spreadsheet row tracking which guest each reported chat belongs to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GuestRow {
    #[serde(rename = "guestID")]
    pub guest_id: String,
    pub chat_id: i64,
}

/// Accumulator for one output page.
#[derive(Debug, Default)]
pub struct Batch {
    chats: Vec<String>,
    guest_rows: Vec<GuestRow>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a fully built chat fragment together with its tracking row.
    pub fn push(&mut self, fragment: String, row: GuestRow) {
        self.chats.push(fragment);
        self.guest_rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn guest_rows(&self) -> &[GuestRow] {
        &self.guest_rows
    }

    /// Chat fragments joined in insertion order.
    pub fn content(&self) -> String {
        self.chats.concat()
    }

    /// Empty the batch for the next page.
    pub fn reset(&mut self) {
        self.chats.clear();
        self.guest_rows.clear();
    }
}

/// Files produced by one flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub batch_number: usize,
    pub suffix: String,
    pub html_path: PathBuf,
    pub xlsx_path: PathBuf,
    pub chats: usize,
}

//! Unified application error type.
//! All modules (api, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote chat source
    // ---------------------------
    #[error("Chat source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Not enough chats to sample: requested {requested}, available {available}")]
    InsufficientData { requested: usize, available: usize },

    // ---------------------------
    // Per-chat recoverable errors
    // ---------------------------
    #[error("Malformed transcript entry in chat {chat_id}: {reason}")]
    MalformedTranscriptEntry { chat_id: i64, reason: String },

    #[error("Unreadable record for chat {chat_id}: {reason}")]
    MalformedRecord { chat_id: i64, reason: String },

    #[error("Unresolvable timing for chat {0}")]
    UnresolvableTiming(i64),

    #[error("Missing operator for chat {0}")]
    MissingOperator(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid chat id: {0}")]
    InvalidChatId(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("Template error: {0}")]
    Template(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors that invalidate the whole run rather than a single chat.
    pub fn is_systemic(&self) -> bool {
        matches!(
            self,
            AppError::Io(_)
                | AppError::SourceUnavailable(_)
                | AppError::InsufficientData { .. }
                | AppError::Template(_)
                | AppError::Spreadsheet(_)
                | AppError::Config(_)
                | AppError::ConfigLoad
                | AppError::ConfigSave
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SourceUnavailable(format!("invalid JSON: {e}"))
    }
}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        AppError::Template(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Spreadsheet(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

// src/export/mod.rs

mod fs_utils;
pub mod html;
pub mod writer;
mod xlsx;

pub use html::{ChatHeader, TemplateRenderer};
pub use writer::BatchWriter;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for written files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

// src/export/writer.rs

use crate::errors::AppResult;
use crate::export::fs_utils::replace_file;
use crate::export::html::TemplateRenderer;
use crate::export::notify_export_success;
use crate::export::xlsx::export_guest_rows;
use crate::models::{Batch, ReportPage};
use crate::utils::path::ensure_parent_dir;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Turns a filled batch into an HTML page and its guest spreadsheet.
pub struct BatchWriter {
    renderer: TemplateRenderer,
    prefix: PathBuf,
}

impl BatchWriter {
    pub fn new(renderer: TemplateRenderer, prefix: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            prefix: prefix.into(),
        }
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Write `{prefix}-{suffix}-{batch_number}.html` and `.xlsx`, sharing
    /// one random suffix.
    pub fn flush(&self, batch: &Batch, batch_number: usize) -> AppResult<ReportPage> {
        ensure_parent_dir(&self.prefix)?;

        let suffix = random_suffix();
        let stem = batch_stem(&self.prefix, &suffix, batch_number);
        let html_path = with_extension(&stem, "html");
        let xlsx_path = with_extension(&stem, "xlsx");

        let page = self.renderer.render_page(&batch.content())?;
        replace_file(&html_path, &page)?;
        notify_export_success("HTML", &html_path);

        export_guest_rows(batch.guest_rows(), &xlsx_path)?;

        Ok(ReportPage {
            batch_number,
            suffix,
            html_path,
            xlsx_path,
            chats: batch.len(),
        })
    }
}

/// Three lowercase hex characters.
pub fn random_suffix() -> String {
    format!("{:03x}", rand::thread_rng().gen_range(0..0x1000u32))
}

pub fn batch_stem(prefix: &Path, suffix: &str, batch_number: usize) -> PathBuf {
    PathBuf::from(format!("{}-{}-{}", prefix.display(), suffix, batch_number))
}

/// Append an extension; `Path::with_extension` would eat dots in the prefix.
fn with_extension(stem: &Path, ext: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", stem.display(), ext))
}

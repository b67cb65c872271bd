//! Builds the review pages: one fragment per chat, flushed page by page.

use crate::api::ChatSource;
use crate::config::{Config, MissingOperator};
use crate::core::fetcher::{fetch, standalone_url};
use crate::core::formatter::LineFormatter;
use crate::core::timing;
use crate::errors::{AppError, AppResult};
use crate::export::{BatchWriter, ChatHeader};
use crate::models::{Batch, Category, GuestRow, ReportPage};
use crate::ui::messages::{error, header, info, warning};
use crate::utils::{format_delta, format_optional_delta};

/// Knobs of a report run that are not about where data comes from.
#[derive(Debug, Clone)]
pub struct AssemblySettings {
    pub chats_per_page: usize,
    pub url_template: String,
    pub form_url: String,
    pub queue_domain: String,
    pub system_address: String,
    pub gap_minutes: i64,
    pub missing_operator: MissingOperator,
}

impl From<&Config> for AssemblySettings {
    fn from(cfg: &Config) -> Self {
        Self {
            chats_per_page: cfg.chats_per_page,
            url_template: cfg.standalone_url_template.clone(),
            form_url: cfg.form_url.clone(),
            queue_domain: cfg.queue_domain.clone(),
            system_address: cfg.system_address.clone(),
            gap_minutes: cfg.gap_minutes,
            missing_operator: cfg.missing_operator,
        }
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct AssemblyStats {
    pub pages: Vec<ReportPage>,
    pub included: usize,
    pub skipped: usize,
    pub failed: usize,
    pub stopped_early: bool,
}

enum ChatOutcome {
    Ready { fragment: String, row: GuestRow },
    Skipped(AppError),
    Stop,
}

pub struct ReportAssembler<'a> {
    source: &'a dyn ChatSource,
    writer: BatchWriter,
    settings: AssemblySettings,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(source: &'a dyn ChatSource, writer: BatchWriter, settings: AssemblySettings) -> Self {
        Self {
            source,
            writer,
            settings,
        }
    }

    /// Process `chat_ids` in order and write a page every `chats_per_page`
    /// included chats, plus one for the remainder.
    ///
    /// Per-chat failures are logged and leave nothing in the batch. Systemic
    /// failures (source down, template or disk errors) end the run.
    pub fn assemble(&self, chat_ids: &[i64]) -> AppResult<AssemblyStats> {
        header(format!("Building report for {} chats", chat_ids.len()));

        let per_page = self.settings.chats_per_page.max(1);
        let mut stats = AssemblyStats::default();
        let mut batch = Batch::new();
        let mut batch_number = 1;

        for (index, &chat_id) in chat_ids.iter().enumerate() {
            match self.build_chat(index, chat_id) {
                Ok(ChatOutcome::Ready { fragment, row }) => {
                    batch.push(fragment, row);
                    stats.included += 1;

                    if batch.len() == per_page {
                        stats.pages.push(self.writer.flush(&batch, batch_number)?);
                        batch.reset();
                        batch_number += 1;
                    }
                }
                Ok(ChatOutcome::Skipped(reason)) => {
                    warning(format!("{reason}, skipped"));
                    stats.skipped += 1;
                }
                Ok(ChatOutcome::Stop) => {
                    warning(format!("Missing operator for chat {chat_id}, stopping"));
                    stats.stopped_early = true;
                    break;
                }
                Err(e) if e.is_systemic() => return Err(e),
                Err(e) => {
                    error(format!("chat {chat_id}: {e}"));
                    stats.failed += 1;
                }
            }
        }

        if !batch.is_empty() {
            stats.pages.push(self.writer.flush(&batch, batch_number)?);
        }

        info(format!(
            "{} pages written, {} chats included, {} skipped, {} failed",
            stats.pages.len(),
            stats.included,
            stats.skipped,
            stats.failed
        ));

        Ok(stats)
    }

    fn build_chat(&self, index: usize, chat_id: i64) -> AppResult<ChatOutcome> {
        let s = &self.settings;
        let (record, entries) = fetch(self.source, chat_id, &s.url_template)?;

        let Some(operator) = record.operator_name() else {
            return Ok(match s.missing_operator {
                MissingOperator::Skip => ChatOutcome::Skipped(AppError::MissingOperator(chat_id)),
                MissingOperator::Stop => ChatOutcome::Stop,
            });
        };

        let timing = timing::compute(&record);
        let Some(duration) = timing.duration else {
            return Ok(ChatOutcome::Skipped(AppError::UnresolvableTiming(chat_id)));
        };

        let queue_address = record.queue_address(&s.queue_domain);
        let mut formatter =
            LineFormatter::new(Some(operator), &queue_address, &s.system_address, s.gap_minutes);
        let rows: String = entries.iter().map(|e| formatter.format_line(e)).collect();

        let chat_header = ChatHeader {
            chat_number: index + 1,
            band_class: band_class(index),
            duration: format_delta(duration),
            wait: format_optional_delta(timing.wait),
            standalone_url: standalone_url(&s.url_template, record.queue_id(), record.id),
            form_url: s.form_url.clone(),
            queue: record.queue.name.clone(),
            category: Category::from_queue(&record.queue.name).label(),
        };
        let fragment = self.writer.renderer().render_chat(&chat_header, &rows)?;

        Ok(ChatOutcome::Ready {
            fragment,
            row: GuestRow {
                guest_id: record.guest_prefix(),
                chat_id: record.id,
            },
        })
    }
}

/// Alternating background per chat.
pub fn band_class(index: usize) -> &'static str {
    if index % 2 == 0 { "bg-light" } else { "bg-light-blue" }
}

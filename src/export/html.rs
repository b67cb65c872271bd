// src/export/html.rs

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

const DEFAULT_PAGE: &str = include_str!("../../templates/index.html");
const CHAT_FRAGMENT: &str = include_str!("../../templates/chat.html");

/// Name without `.html`: the page content is inserted unescaped even when a
/// custom template writes `{{ transcript }}`.
const PAGE: &str = "page";
const CHAT: &str = "chat.html";

/// Values shown above a chat's message table.
#[derive(Debug, Clone, Serialize)]
pub struct ChatHeader {
    pub chat_number: usize,
    pub band_class: &'static str,
    pub duration: String,
    pub wait: String,
    pub standalone_url: String,
    pub form_url: String,
    pub queue: String,
    pub category: &'static str,
}

/// Template engine for one run.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Built-in page template.
    pub fn new() -> AppResult<Self> {
        Self::with_page_template(DEFAULT_PAGE)
    }

    /// Page template read from `path`.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Template(format!("cannot read template {}: {e}", path.display()))
        })?;
        Self::with_page_template(&content)
    }

    pub fn with_page_template(page: &str) -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE, page)?;
        tera.add_raw_template(CHAT, CHAT_FRAGMENT)?;
        Ok(Self { tera })
    }

    /// Render the page with `content` in its `transcript` placeholder.
    pub fn render_page(&self, content: &str) -> AppResult<String> {
        let mut context = Context::new();
        context.insert("transcript", content);
        Ok(self.tera.render(PAGE, &context)?)
    }

    /// Render one chat: escaped header values followed by the preformatted rows.
    pub fn render_chat(&self, header: &ChatHeader, rows: &str) -> AppResult<String> {
        let mut context = Context::from_serialize(header)?;
        context.insert("rows", rows);
        Ok(self.tera.render(CHAT, &context)?)
    }
}

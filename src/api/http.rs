use crate::api::{ChatSource, decode_record};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{ChatRecord, ChatSummary};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Datelike, NaiveDate};

/// Blocking client for the helpdesk chat-history API.
pub struct HttpChatSource {
    agent: ureq::Agent,
    base_url: String,
    authorization: Option<String>,
}

impl HttpChatSource {
    pub fn new(base_url: &str, username: Option<&str>, password: Option<&str>) -> Self {
        let authorization = username.map(|user| {
            let pair = format!("{}:{}", user, password.unwrap_or(""));
            format!("Basic {}", STANDARD.encode(pair))
        });

        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let password = cfg.api_password();
        Self::new(
            &cfg.api_base_url,
            cfg.api_username.as_deref(),
            password.as_deref(),
        )
    }

    pub fn list_url(&self, from: NaiveDate, to: NaiveDate) -> String {
        format!(
            "{}/chats/{}/{:02}/{:02}?to={}",
            self.base_url,
            from.year(),
            from.month(),
            from.day(),
            to.format("%Y-%m-%d")
        )
    }

    pub fn chat_url(&self, id: i64) -> String {
        format!("{}/chats/{}", self.base_url, id)
    }

    fn get_body(&self, url: &str) -> AppResult<String> {
        let mut request = self.agent.get(url).set("Accept", "application/json");
        if let Some(auth) = &self.authorization {
            request = request.set("Authorization", auth);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                AppError::SourceUnavailable(format!("GET {url} returned {code}: {body}"))
            }
            ureq::Error::Transport(t) => {
                AppError::SourceUnavailable(format!("GET {url} failed: {t}"))
            }
        })?;

        response
            .into_string()
            .map_err(|e| AppError::SourceUnavailable(format!("GET {url}: {e}")))
    }
}

impl ChatSource for HttpChatSource {
    fn list_chats(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ChatSummary>> {
        let body = self.get_body(&self.list_url(from, to))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn chat(&self, id: i64) -> AppResult<ChatRecord> {
        let body = self.get_body(&self.chat_url(id))?;
        decode_record(id, &body)
    }
}

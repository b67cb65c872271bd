pub mod config;
pub mod init;
pub mod report;
pub mod select;

use crate::config::Config;
use crate::errors::AppResult;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default)]
pub(crate) struct Overrides<'a> {
    pub range: Option<&'a str>,
    pub sample: Option<usize>,
    pub seed: Option<u64>,
    pub per_page: Option<usize>,
    pub output: Option<&'a str>,
    pub template: Option<&'a str>,
}

impl Overrides<'_> {
    pub fn apply(&self, cfg: &Config) -> AppResult<Config> {
        let mut cfg = cfg.clone();
        if let Some(r) = self.range {
            cfg.date_range = r.to_string();
        }
        if let Some(n) = self.sample {
            cfg.sample_size = n;
        }
        if let Some(s) = self.seed {
            cfg.seed = s;
        }
        if let Some(n) = self.per_page {
            cfg.chats_per_page = n;
        }
        if let Some(o) = self.output {
            cfg.output_prefix = o.to_string();
        }
        if let Some(t) = self.template {
            cfg.template_path = Some(t.to_string());
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What to do with a chat whose operator name is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingOperator {
    /// Leave the chat out and keep going.
    Skip,
    /// End the run at that chat. The chats already collected for the
    /// current page are still written as a last, partial page; nothing
    /// after the chat is fetched.
    Stop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_username: Option<String>,
    /// Name of the environment variable holding the API password.
    #[serde(default = "default_api_password_env")]
    pub api_password_env: String,
    #[serde(default = "default_date_range")]
    pub date_range: String,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_chats_per_page")]
    pub chats_per_page: usize,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    #[serde(default = "default_form_url")]
    pub form_url: String,
    #[serde(default = "default_standalone_url_template")]
    pub standalone_url_template: String,
    #[serde(default = "default_queue_domain")]
    pub queue_domain: String,
    #[serde(default = "default_system_address")]
    pub system_address: String,
    #[serde(default)]
    pub template_path: Option<String>,
    #[serde(default = "default_gap_minutes")]
    pub gap_minutes: i64,
    #[serde(default = "default_missing_operator")]
    pub missing_operator: MissingOperator,
}

fn default_api_base_url() -> String {
    "https://ca.libraryh3lp.com/2011-12-03".to_string()
}
fn default_api_password_env() -> String {
    "RCHATREVIEW_API_PASSWORD".to_string()
}
fn default_date_range() -> String {
    "2022-09-06:2023-08-31".to_string()
}
fn default_sample_size() -> usize {
    605
}
fn default_seed() -> u64 {
    1
}
fn default_chats_per_page() -> usize {
    121
}
fn default_output_prefix() -> String {
    "./output/ask".to_string()
}
fn default_form_url() -> String {
    "https://forms.office.com/r/DnFj5jjG0h".to_string()
}
fn default_standalone_url_template() -> String {
    "https://ca.libraryh3lp.com/dashboard/queues/{queue_id}/calls/REDACTED/{chat_id}".to_string()
}
fn default_queue_domain() -> String {
    "chat.ca.libraryh3lp.com".to_string()
}
fn default_system_address() -> String {
    "system@chat.ca.libraryh3lp.com".to_string()
}
fn default_gap_minutes() -> i64 {
    5
}
fn default_missing_operator() -> MissingOperator {
    MissingOperator::Skip
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_username: None,
            api_password_env: default_api_password_env(),
            date_range: default_date_range(),
            sample_size: default_sample_size(),
            seed: default_seed(),
            chats_per_page: default_chats_per_page(),
            output_prefix: default_output_prefix(),
            form_url: default_form_url(),
            standalone_url_template: default_standalone_url_template(),
            queue_domain: default_queue_domain(),
            system_address: default_system_address(),
            template_path: None,
            gap_minutes: default_gap_minutes(),
            missing_operator: default_missing_operator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rchatreview")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rchatreview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rchatreview.conf")
    }

    /// Load configuration from the default location, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.sample_size == 0 {
            return Err(AppError::Config("sample_size must be at least 1".into()));
        }
        if self.chats_per_page == 0 {
            return Err(AppError::Config("chats_per_page must be at least 1".into()));
        }
        if self.gap_minutes < 1 {
            return Err(AppError::Config("gap_minutes must be at least 1".into()));
        }
        Ok(())
    }

    /// Password for the remote API, read from the configured environment variable.
    pub fn api_password(&self) -> Option<String> {
        env::var(&self.api_password_env).ok()
    }

    /// Write the configuration as YAML to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}

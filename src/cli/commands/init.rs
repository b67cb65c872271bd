use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::{ensure_parent_dir, expand_tilde};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode or when it already exists)
///  - the directory receiving the report pages
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    info("Initializing rChatReview…");

    if cli.test {
        info("Test mode: configuration file not written");
    } else if config_path.exists() {
        warning(format!(
            "Configuration file already exists: {}",
            config_path.display()
        ));
    } else {
        cfg.save_to(config_path)?;
        success(format!("Config file: {}", config_path.display()));
    }

    let prefix = expand_tilde(&cfg.output_prefix);
    ensure_parent_dir(&prefix)?;
    success(format!("Output prefix: {}", prefix.display()));

    Ok(())
}

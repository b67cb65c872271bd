use crate::api::HttpChatSource;
use crate::cli::commands::Overrides;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ids, selector};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::parse_range;
use crate::utils::path::{ensure_parent_dir, expand_tilde};

/// Handle the `select` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select {
        range,
        sample,
        seed,
        out,
    } = cmd
    {
        let cfg = Overrides {
            range: range.as_deref(),
            sample: *sample,
            seed: *seed,
            ..Default::default()
        }
        .apply(cfg)?;

        let bounds = parse_range(&cfg.date_range)?;
        let source = HttpChatSource::from_config(&cfg);
        let chat_ids = selector::select(&source, bounds, cfg.sample_size, cfg.seed)?;

        match out {
            Some(file) => {
                let path = expand_tilde(file);
                ensure_parent_dir(&path)?;
                ids::write_ids(&path, &chat_ids)?;
                success(format!("{} chat ids written to {}", chat_ids.len(), path.display()));
            }
            None => {
                for id in &chat_ids {
                    println!("{id}");
                }
            }
        }
    }
    Ok(())
}

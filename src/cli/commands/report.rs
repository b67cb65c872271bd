use crate::api::HttpChatSource;
use crate::cli::commands::Overrides;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{AssemblySettings, ReportAssembler, ids, selector};
use crate::errors::AppResult;
use crate::export::{BatchWriter, TemplateRenderer};
use crate::ui::messages::{info, success, warning};
use crate::utils::parse_range;
use crate::utils::path::expand_tilde;

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        range,
        sample,
        seed,
        per_page,
        output,
        ids: ids_file,
        template,
    } = cmd
    {
        let cfg = Overrides {
            range: range.as_deref(),
            sample: *sample,
            seed: *seed,
            per_page: *per_page,
            output: output.as_deref(),
            template: template.as_deref(),
        }
        .apply(cfg)?;

        // Fail on a bad template before touching the API.
        let renderer = match &cfg.template_path {
            Some(path) => TemplateRenderer::from_file(&expand_tilde(path))?,
            None => TemplateRenderer::new()?,
        };

        let source = HttpChatSource::from_config(&cfg);

        let chat_ids = match ids_file {
            Some(file) => {
                let path = expand_tilde(file);
                let chat_ids = ids::read_ids(&path)?;
                info(format!("{} chat ids read from {}", chat_ids.len(), path.display()));
                chat_ids
            }
            None => selector::select(
                &source,
                parse_range(&cfg.date_range)?,
                cfg.sample_size,
                cfg.seed,
            )?,
        };

        if chat_ids.is_empty() {
            warning("No chats to report.");
            return Ok(());
        }

        let writer = BatchWriter::new(renderer, expand_tilde(&cfg.output_prefix));
        let assembler = ReportAssembler::new(&source, writer, AssemblySettings::from(&cfg));
        let stats = assembler.assemble(&chat_ids)?;

        if stats.failed > 0 || stats.skipped > 0 {
            warning(format!(
                "{} of {} chats left out of the report",
                stats.failed + stats.skipped,
                chat_ids.len()
            ));
        }
        success(format!("Report completed: {} pages", stats.pages.len()));
    }
    Ok(())
}

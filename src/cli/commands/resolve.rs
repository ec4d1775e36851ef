use std::path::Path;

use anyhow::Result;

use super::context::ProjectContext;
use super::{CommandResult, CommandSummary, ResolveSummary};
use crate::cli::args::ResolveCommand;
use crate::core::DictionaryStore;
use crate::utils::truncate_display;

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    if !ctx.config.enabled {
        return Ok(CommandResult::from_summary(CommandSummary::Disabled));
    }

    let primary_language = ctx.config.primary_language();
    let language = cmd
        .lang
        .map(|lang| lang.to_lowercase())
        .unwrap_or_else(|| primary_language.clone());

    let file = if language == primary_language {
        Some(ctx.dictionary_path.clone())
    } else {
        let mut registry = ctx.registry();
        registry.scan()?;
        registry.get(&language).map(Path::to_path_buf)
    };

    let summary = match file {
        None => ResolveSummary {
            key: cmd.key,
            language: language.clone(),
            value: None,
            error: Some(format!("no dictionary file for language '{}'", language)),
        },
        Some(path) => {
            let mut store = DictionaryStore::open(&path);
            match store.load() {
                Err(err) => ResolveSummary {
                    key: cmd.key,
                    language,
                    value: None,
                    error: Some(err.to_string()),
                },
                Ok(()) => {
                    let value = store.resolve(&cmd.key).map(|value| {
                        if cmd.full {
                            value.to_string()
                        } else {
                            truncate_display(value, ctx.config.max_display_length)
                        }
                    });
                    ResolveSummary {
                        key: cmd.key,
                        language,
                        value,
                        error: None,
                    }
                }
            }
        }
    };

    let mut result = CommandResult::from_summary(CommandSummary::Resolve(summary));
    result.locale_files_checked = 1;
    Ok(result)
}

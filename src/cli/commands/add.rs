use std::path::{Path, PathBuf};

use anyhow::Result;

use super::context::ProjectContext;
use super::{AddSummary, CommandResult, CommandSummary};
use crate::cli::args::AddCommand;
use crate::cli::prompt::CliPrompt;
use crate::core::{DictError, DictionaryStore, Prompt, is_valid_key_path};

pub fn add(cmd: AddCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;

    if !is_valid_key_path(&cmd.key) {
        return Ok(failed(format!(
            "'{}' is not a valid dotted key path",
            cmd.key
        )));
    }

    let primary_language = ctx.config.primary_language();
    let language = cmd
        .lang
        .map(|lang| lang.to_lowercase())
        .unwrap_or_else(|| primary_language.clone());

    let file: Option<PathBuf> = if language == primary_language {
        Some(ctx.dictionary_path.clone())
    } else {
        let mut registry = ctx.registry();
        registry.scan()?;
        registry.get(&language).map(Path::to_path_buf)
    };
    let Some(file) = file else {
        return Ok(failed(format!(
            "no dictionary file for language '{}'",
            language
        )));
    };
    let file_display = ctx.display_path(&file);

    let mut store = DictionaryStore::open(&file);
    match store.load() {
        Ok(()) => {}
        // adding the first key to a fresh dictionary is fine
        Err(DictError::NotFound { .. }) => {}
        Err(err) => return Ok(failed(err.to_string())),
    }

    let overwrite = match store.resolve(&cmd.key) {
        Some(current) => {
            if cmd.force {
                true
            } else {
                let mut prompt = CliPrompt::new(false, None);
                let replace = prompt.confirm(&format!(
                    "'{}' already holds \"{}\" in {}. Overwrite?",
                    cmd.key, current, file_display
                ))?;
                if !replace {
                    return Ok(CommandResult::from_summary(CommandSummary::Add(
                        AddSummary::Cancelled { key: cmd.key },
                    )));
                }
                true
            }
        }
        None => false,
    };

    let summary = match store.add(&cmd.key, &cmd.value, overwrite) {
        Ok(action) => AddSummary::Done {
            key: cmd.key,
            file: file_display,
            action: action.as_str(),
        },
        Err(err) => AddSummary::Failed {
            message: err.to_string(),
        },
    };

    Ok(CommandResult::from_summary(CommandSummary::Add(summary)))
}

fn failed(message: String) -> CommandResult {
    CommandResult::from_summary(CommandSummary::Add(AddSummary::Failed { message }))
}

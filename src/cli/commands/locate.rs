use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::context::ProjectContext;
use super::{CommandResult, CommandSummary, LocateSummary};
use crate::cli::args::LocateCommand;
use crate::core::locate_key;

pub fn locate(cmd: LocateCommand) -> Result<CommandResult> {
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
    let Some(file) = file else {
        return Ok(CommandResult::from_summary(CommandSummary::Locate(
            LocateSummary {
                key: cmd.key,
                language: language.clone(),
                file: None,
                line: None,
                col: None,
                error: Some(format!("no dictionary file for language '{}'", language)),
            },
        )));
    };

    let content = fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let location = locate_key(&content, &cmd.key);

    let mut result = CommandResult::from_summary(CommandSummary::Locate(LocateSummary {
        key: cmd.key,
        language,
        file: Some(ctx.display_path(&file)),
        line: location.map(|l| l.line),
        col: location.map(|l| l.col),
        error: None,
    }));
    result.locale_files_checked = 1;
    Ok(result)
}

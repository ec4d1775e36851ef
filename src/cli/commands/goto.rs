use anyhow::Result;

use super::context::ProjectContext;
use super::{CommandResult, CommandSummary, GotoSummary};
use crate::cli::args::GotoCommand;
use crate::cli::prompt::CliPrompt;
use crate::core::{NavigationOutcome, NavigationRequest, navigate};

pub fn goto(cmd: GotoCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    if !ctx.config.enabled {
        return Ok(CommandResult::from_summary(CommandSummary::Disabled));
    }

    let mut registry = ctx.registry();
    let request = NavigationRequest {
        source_path: &cmd.file,
        line: cmd.line.saturating_sub(1),
        column: cmd.col.saturating_sub(1),
        target_language: &cmd.lang,
        allow_create: cmd.create,
    };
    let mut prompt = CliPrompt::new(cmd.yes, cmd.value.clone());

    // All navigation failures surface as a reported summary instead of
    // aborting the process; the registry holds no partial state either way.
    let summary = match navigate(&mut registry, &request, &mut prompt) {
        Ok(NavigationOutcome::Jump {
            file,
            location,
            key_path,
            source_language,
            target_language,
        }) => GotoSummary::Jumped {
            file: ctx.display_path(&file),
            line: location.line,
            col: location.col,
            key_path,
            source_language,
            target_language,
        },
        Ok(NavigationOutcome::Created {
            file,
            location,
            key_path,
            value,
            ..
        }) => GotoSummary::Created {
            file: ctx.display_path(&file),
            line: location.line,
            col: location.col,
            key_path,
            value,
        },
        Ok(NavigationOutcome::Cancelled { key_path }) => GotoSummary::Cancelled { key_path },
        Err(err) => GotoSummary::Failed {
            message: format!("{:#}", err),
        },
    };

    Ok(CommandResult::from_summary(CommandSummary::Goto(summary)))
}

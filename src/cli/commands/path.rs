use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, PathSummary};
use crate::cli::args::PathCommand;
use crate::core::key_path_at;

pub fn path(cmd: PathCommand) -> Result<CommandResult> {
    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("failed to read {}", cmd.file.display()))?;

    let key_path = key_path_at(
        &text,
        cmd.line.saturating_sub(1),
        cmd.col.saturating_sub(1),
    );

    Ok(CommandResult::from_summary(CommandSummary::Path(
        PathSummary {
            file: cmd.file.display().to_string(),
            line: cmd.line,
            col: cmd.col,
            key_path,
        },
    )))
}

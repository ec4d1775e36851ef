use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{
    CommandResult, CommandSummary, InitSummary, add::add, check::check, goto::goto,
    locales::locales, locate::locate, path::path, resolve::resolve,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Dispatches to the appropriate command handler based on the parsed
/// arguments. The `serve` command is handled in `main` before this runs.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Locate(cmd)) => locate(cmd),
        Some(Command::Path(cmd)) => path(cmd),
        Some(Command::Goto(cmd)) => goto(cmd),
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult::from_summary(CommandSummary::Init(
                InitSummary { created: true },
            )))
        }
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}

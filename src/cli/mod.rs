use anyhow::Result;

pub mod commands;

mod args;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{Arguments, CheckRule, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use prompt::CliPrompt;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status::exit_status_of(&result))
}

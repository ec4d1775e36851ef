use std::process::ExitCode;

use super::commands::{AddSummary, CommandResult, CommandSummary, GotoSummary};

/// Exit status for CLI commands, following common conventions for linter
/// tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found issues or missed a lookup.
    Failure,
    /// Command failed due to an internal error (config error, I/O error).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

/// Derives the exit status of a finished command.
///
/// Lookup misses and aborted navigations exit with `Failure`; a prompt the
/// user declined is a completed command and exits with `Success`.
pub fn exit_status_of(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Resolve(summary) if summary.value.is_none() => ExitStatus::Failure,
        CommandSummary::Locate(summary) if summary.line.is_none() => ExitStatus::Failure,
        CommandSummary::Path(summary) if summary.key_path.is_none() => ExitStatus::Failure,
        CommandSummary::Goto(GotoSummary::Failed { .. }) => ExitStatus::Failure,
        CommandSummary::Add(AddSummary::Failed { .. }) => ExitStatus::Failure,
        _ => {
            if result.error_count > 0 {
                ExitStatus::Failure
            } else {
                ExitStatus::Success
            }
        }
    }
}

pub mod add;
pub mod check;
pub mod context;
pub mod goto;
pub mod locales;
pub mod locate;
pub mod path;
pub mod resolve;

mod command_result;

pub use command_result::{
    AddSummary, CommandResult, CommandSummary, GotoSummary, InitSummary, LocaleEntry,
    LocalesSummary, LocateSummary, PathSummary, ResolveSummary,
};

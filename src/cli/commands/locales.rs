use anyhow::Result;

use super::context::ProjectContext;
use super::{CommandResult, CommandSummary, LocaleEntry, LocalesSummary};
use crate::cli::args::LocalesCommand;
use crate::core::DictionaryStore;

pub fn locales(cmd: LocalesCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;

    let mut registry = ctx.registry();
    registry.scan()?;

    let entries: Vec<LocaleEntry> = registry
        .entries()
        .map(|(code, path)| {
            let mut store = DictionaryStore::open(path);
            let key_count = store.load().ok().map(|_| store.leaf_count());
            LocaleEntry {
                code: code.to_string(),
                file_path: ctx.display_path(path),
                key_count,
            }
        })
        .collect();

    let mut result = CommandResult::from_summary(CommandSummary::Locales(LocalesSummary {
        base_dir: ctx.display_path(registry.base_dir()),
        entries,
    }));
    result.locale_files_checked = registry.len();
    Ok(result)
}

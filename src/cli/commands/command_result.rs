use crate::issues::Issue;

/// Per-command outcome rendered by the reporter.
#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Resolve(ResolveSummary),
    Locate(LocateSummary),
    Path(PathSummary),
    Goto(GotoSummary),
    Add(AddSummary),
    Locales(LocalesSummary),
    Init(InitSummary),
    /// Lookups are suppressed by `"enabled": false` in the config.
    Disabled,
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub key: String,
    pub language: String,
    /// The resolved (possibly truncated) value; `None` is a miss.
    pub value: Option<String>,
    /// Load or discovery error that prevented resolution.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct LocateSummary {
    pub key: String,
    pub language: String,
    pub file: Option<String>,
    /// 1-based position of the key (only when found).
    pub line: Option<usize>,
    pub col: Option<usize>,
    /// Discovery error that prevented the search.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct PathSummary {
    pub file: String,
    pub line: usize,
    pub col: usize,
    pub key_path: Option<String>,
}

#[derive(Debug)]
pub enum GotoSummary {
    Jumped {
        file: String,
        line: usize,
        col: usize,
        key_path: String,
        source_language: String,
        target_language: String,
    },
    Created {
        file: String,
        line: usize,
        col: usize,
        key_path: String,
        value: String,
    },
    Cancelled {
        key_path: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug)]
pub enum AddSummary {
    Done {
        key: String,
        file: String,
        action: &'static str,
    },
    Cancelled {
        key: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub base_dir: String,
    pub entries: Vec<LocaleEntry>,
}

#[derive(Debug)]
pub struct LocaleEntry {
    pub code: String,
    pub file_path: String,
    /// `None` when the file failed to parse.
    pub key_count: Option<usize>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a glossa command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues found during checking. Empty for non-check commands.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files scanned for key usages.
    pub source_files_checked: usize,
    /// Number of dictionary files read.
    pub locale_files_checked: usize,
}

impl CommandResult {
    /// A result with no issues and zero counts.
    pub fn from_summary(summary: CommandSummary) -> Self {
        Self {
            summary,
            issues: Vec::new(),
            error_count: 0,
            warning_count: 0,
            parse_error_count: 0,
            source_files_checked: 0,
            locale_files_checked: 0,
        }
    }
}

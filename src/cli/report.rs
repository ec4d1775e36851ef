//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format; per-command summaries get a
//! one-line result. Kept separate from the command logic so glossa can be
//! used as a library without pulling in terminal output.

use std::cmp::Ordering;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AddSummary, CommandResult, CommandSummary, GotoSummary, LocalesSummary, LocateSummary,
    PathSummary, ResolveSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, IssueExt, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a finished command's result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a finished command's result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => print_check(result, verbose, writer),
        CommandSummary::Resolve(summary) => print_resolve(summary, writer),
        CommandSummary::Locate(summary) => print_locate(summary, writer),
        CommandSummary::Path(summary) => print_path(summary, writer),
        CommandSummary::Goto(summary) => print_goto(summary, writer),
        CommandSummary::Add(summary) => print_add(summary, writer),
        CommandSummary::Locales(summary) => print_locales(summary, writer),
        CommandSummary::Init(_) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("created {}", CONFIG_FILE_NAME).green()
            );
        }
        CommandSummary::Disabled => {
            let _ = writeln!(
                writer,
                "{} glossa is disabled (\"enabled\": false in {})",
                "warning:".bold().yellow(),
                CONFIG_FILE_NAME
            );
        }
    }
}

// ============================================================
// Check output
// ============================================================

fn print_check<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    let mut shown: Vec<&Issue> = result
        .issues
        .iter()
        .filter(|issue| verbose || !matches!(issue, Issue::ParseError(_)))
        .collect();
    shown.sort_by(|a, b| compare_issues(a, b));

    let max_line_width = shown
        .iter()
        .filter_map(|issue| issue.line())
        .map(|line| line.to_string().len())
        .max()
        .unwrap_or(1);

    for issue in &shown {
        print_issue(issue, writer, max_line_width);
    }

    if !verbose && result.parse_error_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            result.parse_error_count,
            "-v".cyan()
        );
    }

    if result.issues.is_empty() {
        print_success(result, writer);
    } else {
        print_issue_totals(result, writer);
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    if let Some(file_path) = issue.file_path() {
        let line = issue.line().unwrap_or(1);
        let col = issue.col().unwrap_or(1);
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    }

    if let Some(source_line) = issue.source_line()
        && let Some(line) = issue.line()
    {
        let gutter = format!("{:>width$}", line, width = max_line_width);
        let _ = writeln!(writer, "{} {} {}", gutter.blue(), "|".blue(), source_line);
        if let Some(col) = issue.col() {
            let caret_pad = " ".repeat(col.saturating_sub(1));
            let caret = match issue.severity() {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };
            let _ = writeln!(
                writer,
                "{} {} {}{}",
                " ".repeat(max_line_width),
                "|".blue(),
                caret_pad,
                caret
            );
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {}", details.dimmed());
    }
    let _ = writeln!(writer);
}

fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    (a.rule(), a.file_path(), a.line(), a.col()).cmp(&(b.rule(), b.file_path(), b.line(), b.col()))
}

fn print_issue_totals<W: Write>(result: &CommandResult, writer: &mut W) {
    let mut parts = Vec::new();
    if result.error_count > 0 {
        parts.push(format!(
            "{} {}",
            result.error_count,
            if result.error_count == 1 { "error" } else { "errors" }
        ));
    }
    if result.warning_count > 0 {
        parts.push(format!(
            "{} {}",
            result.warning_count,
            if result.warning_count == 1 { "warning" } else { "warnings" }
        ));
    }
    let totals = parts.join(", ");
    let line = if result.error_count > 0 {
        format!("{} {}", FAILURE_MARK, totals).red().to_string()
    } else {
        format!("{} {}", FAILURE_MARK, totals).yellow().to_string()
    };
    let _ = writeln!(writer, "{}", line);
}

fn print_success<W: Write>(result: &CommandResult, writer: &mut W) {
    let message = format!(
        "Checked {} source {}, {} locale {} - no issues found",
        result.source_files_checked,
        plural_files(result.source_files_checked),
        result.locale_files_checked,
        plural_files(result.locale_files_checked),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn plural_files(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

// ============================================================
// Lookup and navigation output
// ============================================================

fn print_resolve<W: Write>(summary: &ResolveSummary, writer: &mut W) {
    match (&summary.value, &summary.error) {
        (Some(value), _) => {
            let _ = writeln!(writer, "{} = \"{}\"", summary.key.cyan(), value);
        }
        (None, Some(error)) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        }
        (None, None) => {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!("'{}' not found in {}.json", summary.key, summary.language).red()
            );
        }
    }
}

fn print_locate<W: Write>(summary: &LocateSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        return;
    }
    match (&summary.file, summary.line, summary.col) {
        (Some(file), Some(line), Some(col)) => {
            let _ = writeln!(
                writer,
                "{} '{}' {} {}:{}:{}",
                SUCCESS_MARK.green(),
                summary.key.cyan(),
                "-->".blue(),
                file,
                line,
                col
            );
        }
        _ => {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!("'{}' not found in {}.json", summary.key, summary.language).red()
            );
        }
    }
}

fn print_path<W: Write>(summary: &PathSummary, writer: &mut W) {
    match &summary.key_path {
        Some(key_path) => {
            let _ = writeln!(writer, "{}", key_path);
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!(
                    "no key at {}:{}:{}",
                    summary.file, summary.line, summary.col
                )
                .red()
            );
        }
    }
}

fn print_goto<W: Write>(summary: &GotoSummary, writer: &mut W) {
    match summary {
        GotoSummary::Jumped {
            file,
            line,
            col,
            key_path,
            source_language,
            target_language,
        } => {
            let _ = writeln!(
                writer,
                "{} '{}' ({} {} {}) {} {}:{}:{}",
                SUCCESS_MARK.green(),
                key_path.cyan(),
                source_language,
                "->".dimmed(),
                target_language,
                "-->".blue(),
                file,
                line,
                col
            );
        }
        GotoSummary::Created {
            file,
            line,
            col,
            key_path,
            value,
        } => {
            let _ = writeln!(
                writer,
                "{} created '{}' = \"{}\" {} {}:{}:{}",
                SUCCESS_MARK.green(),
                key_path.cyan(),
                value,
                "-->".blue(),
                file,
                line,
                col
            );
        }
        GotoSummary::Cancelled { key_path } => {
            let _ = writeln!(
                writer,
                "{}",
                format!("cancelled, '{}' was not created", key_path).dimmed()
            );
        }
        GotoSummary::Failed { message } => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
        }
    }
}

fn print_add<W: Write>(summary: &AddSummary, writer: &mut W) {
    match summary {
        AddSummary::Done { key, file, action } => {
            let _ = writeln!(
                writer,
                "{} {} '{}' in {}",
                SUCCESS_MARK.green(),
                action,
                key.cyan(),
                file
            );
        }
        AddSummary::Cancelled { key } => {
            let _ = writeln!(
                writer,
                "{}",
                format!("cancelled, '{}' was not changed", key).dimmed()
            );
        }
        AddSummary::Failed { message } => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
        }
    }
}

fn print_locales<W: Write>(summary: &LocalesSummary, writer: &mut W) {
    if summary.entries.is_empty() {
        let _ = writeln!(
            writer,
            "{} no dictionary files found in {}",
            "warning:".bold().yellow(),
            summary.base_dir
        );
        return;
    }

    let _ = writeln!(writer, "Dictionary files in {}:", summary.base_dir);
    let path_width = summary
        .entries
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.file_path.as_str()))
        .max()
        .unwrap_or(0);
    for entry in &summary.entries {
        let padding = " ".repeat(path_width - UnicodeWidthStr::width(entry.file_path.as_str()));
        let keys = match entry.key_count {
            Some(count) => format!("({} {})", count, if count == 1 { "key" } else { "keys" }),
            None => "(unreadable)".red().to_string(),
        };
        let _ = writeln!(
            writer,
            "  {}  {}{}  {}",
            entry.code.cyan(),
            entry.file_path,
            padding,
            keys.dimmed()
        );
    }
}

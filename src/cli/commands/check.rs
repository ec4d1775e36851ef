use std::{collections::HashSet, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::context::{ProjectContext, display_path};
use super::{CommandResult, CommandSummary};
use crate::cli::args::{CheckCommand, CheckRule};
use crate::config::Config;
use crate::core::{DictionaryStore, key_candidates, locate_key};
use crate::core::position::{line_col, line_start_offsets};
use crate::issues::{
    Issue, IssueExt, MissingKeyIssue, ParseErrorIssue, ReplicaLagIssue, Severity,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    if !ctx.config.enabled {
        return Ok(CommandResult::from_summary(CommandSummary::Disabled));
    }

    let rules = if cmd.rules.is_empty() {
        let mut rules = vec![CheckRule::Missing];
        if ctx.config.check_lag {
            rules.push(CheckRule::Lag);
        }
        rules
    } else {
        cmd.rules.clone()
    };

    let mut issues: Vec<Issue> = Vec::new();
    let mut source_files_checked = 0;
    let mut locale_files_checked = 0;

    let mut primary = DictionaryStore::open(&ctx.dictionary_path);
    if let Err(err) = primary.load() {
        issues.push(Issue::ParseError(ParseErrorIssue {
            file_path: ctx.display_path(&ctx.dictionary_path),
            message: err.to_string(),
        }));
    } else {
        locale_files_checked += 1;
    }

    // An unloaded primary dictionary suppresses every lookup-based rule;
    // the load failure above is the only thing worth reporting then.
    if primary.is_loaded() {
        if rules.contains(&CheckRule::Missing) {
            let scan = scan_missing_keys(&ctx.root, &ctx.config, &primary)?;
            source_files_checked = scan.files_scanned;
            issues.extend(scan.issues.into_iter().map(Issue::MissingKey));
            issues.extend(scan.warnings.into_iter().map(Issue::ParseError));
        }

        if rules.contains(&CheckRule::Lag) {
            let lag = check_replica_lag(&ctx, &primary)?;
            locale_files_checked += lag.files_checked;
            issues.extend(lag.issues.into_iter().map(Issue::ReplicaLag));
            issues.extend(lag.warnings.into_iter().map(Issue::ParseError));
        }
    }

    let error_count = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;
    let parse_error_count = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::ParseError(_)))
        .count();

    Ok(CommandResult {
        summary: CommandSummary::Check,
        issues,
        error_count,
        warning_count,
        parse_error_count,
        source_files_checked,
        locale_files_checked,
    })
}

/// Result of scanning source files for unresolvable keys.
#[derive(Debug, Default)]
pub struct MissingScan {
    pub issues: Vec<MissingKeyIssue>,
    pub warnings: Vec<ParseErrorIssue>,
    pub files_scanned: usize,
}

/// Scans the configured include directories for dotted-key literals and
/// reports the ones the primary dictionary does not resolve.
///
/// Also used by the MCP server. Files are scanned in parallel; candidates
/// whose segments are all numeric (version strings and the like) are
/// skipped as documented matcher false positives.
pub fn scan_missing_keys(
    root: &Path,
    config: &Config,
    primary: &DictionaryStore,
) -> Result<MissingScan> {
    let files = collect_source_files(root, config)?;
    let files_scanned = files.len();

    let per_file: Vec<(Vec<MissingKeyIssue>, Option<ParseErrorIssue>)> = files
        .par_iter()
        .map(|path| scan_file(path, root, primary))
        .collect();

    let mut scan = MissingScan {
        files_scanned,
        ..Default::default()
    };
    for (issues, warning) in per_file {
        scan.issues.extend(issues);
        scan.warnings.extend(warning);
    }
    Ok(scan)
}

fn collect_source_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut ignores = Vec::with_capacity(config.ignores.len());
    for pattern in &config.ignores {
        let compiled = Pattern::new(pattern)
            .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        ignores.push(compiled);
    }
    let extensions: HashSet<&str> = config
        .source_extensions
        .iter()
        .map(String::as_str)
        .collect();

    let mut files = Vec::new();
    for include in &config.includes {
        let dir = root.join(include);
        if !dir.exists() {
            continue;
        }
        for entry in WalkDir::new(&dir).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !extensions.contains(extension) {
                continue;
            }
            let relative = display_path(path, root);
            if ignores.iter().any(|pattern| pattern.matches(&relative)) {
                continue;
            }
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn scan_file(
    path: &Path,
    root: &Path,
    primary: &DictionaryStore,
) -> (Vec<MissingKeyIssue>, Option<ParseErrorIssue>) {
    let file_path = display_path(path, root);
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            return (
                Vec::new(),
                Some(ParseErrorIssue {
                    file_path,
                    message: format!("failed to read: {}", err),
                }),
            );
        }
    };

    let line_starts = line_start_offsets(&text);
    let lines: Vec<&str> = text.lines().collect();

    let mut issues = Vec::new();
    for candidate in key_candidates(&text) {
        if is_version_like(candidate.key) {
            continue;
        }
        if primary.resolve(candidate.key).is_none() {
            let (line, col) = line_col(&line_starts, candidate.start);
            issues.push(MissingKeyIssue {
                key: candidate.key.to_string(),
                file_path: file_path.clone(),
                line,
                col,
                source_line: lines.get(line - 1).map(|l| l.trim_end().to_string()),
            });
        }
    }
    (issues, None)
}

/// All-numeric segments ("1.2.3") are version strings, not key paths.
fn is_version_like(key: &str) -> bool {
    key.split('.')
        .all(|segment| segment.chars().all(|c| c.is_ascii_digit()))
}

#[derive(Debug, Default)]
struct LagScan {
    issues: Vec<ReplicaLagIssue>,
    warnings: Vec<ParseErrorIssue>,
    files_checked: usize,
}

/// Compares every leaf of the primary dictionary against the sibling
/// language files and reports keys the siblings are missing.
fn check_replica_lag(ctx: &ProjectContext, primary: &DictionaryStore) -> Result<LagScan> {
    let mut registry = ctx.registry();
    registry.scan()?;

    let primary_language = ctx.config.primary_language();
    let primary_display = ctx.display_path(primary.path());
    let primary_text = fs::read_to_string(primary.path()).unwrap_or_default();

    let mut scan = LagScan::default();
    let mut siblings = Vec::new();
    for (code, path) in registry.entries() {
        if code == primary_language {
            continue;
        }
        scan.files_checked += 1;
        let mut store = DictionaryStore::open(path);
        match store.load() {
            Ok(()) => siblings.push((code.to_string(), store)),
            Err(err) => scan.warnings.push(ParseErrorIssue {
                file_path: ctx.display_path(path),
                message: err.to_string(),
            }),
        }
    }

    let Some(tree) = primary.root() else {
        return Ok(scan);
    };
    for (key, value) in tree.leaves() {
        let missing_in: Vec<String> = siblings
            .iter()
            .filter(|(_, store)| store.resolve(&key).is_none())
            .map(|(code, _)| code.clone())
            .collect();
        if !missing_in.is_empty() {
            let line = locate_key(&primary_text, &key).map_or(1, |location| location.line);
            scan.issues.push(ReplicaLagIssue {
                key,
                value: value.to_string(),
                file_path: primary_display.clone(),
                line,
                missing_in,
            });
        }
    }

    Ok(scan)
}

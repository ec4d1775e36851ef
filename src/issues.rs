//! Issue types reported by the `check` command.
//!
//! Each issue is self-contained with the information the reporter needs to
//! display it: rule, severity, location and source context.

use enum_dispatch::enum_dispatch;

use std::fmt;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ReplicaLag,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ReplicaLag => write!(f, "replica-lag"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// A dotted key used in source text that the primary dictionary does not
/// resolve to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub key: String,
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub source_line: Option<String>,
}

/// A key present in the primary dictionary but absent from one or more
/// sibling language files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaLagIssue {
    pub key: String,
    pub value: String,
    pub file_path: String,
    pub line: usize,
    pub missing_in: Vec<String>,
}

/// A file that could not be read or parsed during checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub message: String,
}

#[enum_dispatch]
pub trait IssueExt {
    fn severity(&self) -> Severity;
    fn rule(&self) -> Rule;
    fn message(&self) -> String;
    fn file_path(&self) -> Option<&str>;
    fn line(&self) -> Option<usize>;
    fn col(&self) -> Option<usize>;
    fn details(&self) -> Option<String>;
    fn source_line(&self) -> Option<&str>;
}

impl IssueExt for MissingKeyIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::MissingKey
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn file_path(&self) -> Option<&str> {
        Some(&self.file_path)
    }

    fn line(&self) -> Option<usize> {
        Some(self.line)
    }

    fn col(&self) -> Option<usize> {
        Some(self.col)
    }

    fn details(&self) -> Option<String> {
        None
    }

    fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }
}

impl IssueExt for ReplicaLagIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::ReplicaLag
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn file_path(&self) -> Option<&str> {
        Some(&self.file_path)
    }

    fn line(&self) -> Option<usize> {
        Some(self.line)
    }

    fn col(&self) -> Option<usize> {
        None
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.value,
            self.missing_in.join(", ")
        ))
    }

    fn source_line(&self) -> Option<&str> {
        None
    }
}

impl IssueExt for ParseErrorIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::ParseError
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn file_path(&self) -> Option<&str> {
        Some(&self.file_path)
    }

    fn line(&self) -> Option<usize> {
        None
    }

    fn col(&self) -> Option<usize> {
        None
    }

    fn details(&self) -> Option<String> {
        None
    }

    fn source_line(&self) -> Option<&str> {
        None
    }
}

#[enum_dispatch(IssueExt)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    ReplicaLag(ReplicaLagIssue),
    ParseError(ParseErrorIssue),
}

//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Glossa
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Scan source files for dictionary issues (missing keys, lag)
//! - `resolve`: Look up the value of a dotted key
//! - `locate`: Print where a key sits in a language's dictionary file
//! - `path`: Print the key path at a position in a dictionary file
//! - `goto`: Jump to a key in another language's dictionary
//! - `add`: Add a translation value at a key path
//! - `locales`: List discovered language dictionary files
//! - `init`: Initialize glossa configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Locate(cmd)) => cmd.common.verbose,
            Some(Command::Path(cmd)) => cmd.common.verbose,
            Some(Command::Goto(cmd)) => cmd.common.verbose,
            Some(Command::Add(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where .glossarc.json is searched)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Primary dictionary file path (overrides config file)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rules the `check` command can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    /// Keys used in source files but absent from the primary dictionary
    Missing,
    /// Keys in the primary dictionary absent from sibling language files
    Lag,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all enabled in config)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Dotted key path to look up (e.g. "general.submit")
    pub key: String,

    /// Language to resolve in (default: the primary dictionary's language)
    #[arg(long)]
    pub lang: Option<String>,

    /// Print the full value without truncation
    #[arg(long)]
    pub full: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Dotted key path to locate (e.g. "general.submit")
    pub key: String,

    /// Language whose dictionary file to search (default: primary)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PathCommand {
    /// Dictionary file to inspect
    pub file: PathBuf,

    /// 1-based line of the cursor
    pub line: usize,

    /// 1-based column of the cursor
    pub col: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GotoCommand {
    /// Dictionary file the cursor is in
    pub file: PathBuf,

    /// 1-based line of the cursor
    pub line: usize,

    /// 1-based column of the cursor
    pub col: usize,

    /// Target language code (e.g. "fr")
    pub lang: String,

    /// Offer to create the key when it is missing in the target file
    #[arg(long)]
    pub create: bool,

    /// Answer yes to prompts (accepts the source value as translation)
    #[arg(long)]
    pub yes: bool,

    /// Translation value to use instead of prompting
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Dotted key path to add (e.g. "general.submit")
    pub key: String,

    /// Translation value
    pub value: String,

    /// Language to add to (default: the primary dictionary's language)
    #[arg(long)]
    pub lang: Option<String>,

    /// Overwrite an existing value without asking
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check source files and dictionaries for i18n issues
    Check(CheckCommand),
    /// Look up the value of a dotted key in a language dictionary
    Resolve(ResolveCommand),
    /// Print where a dotted key sits in a language's dictionary file
    Locate(LocateCommand),
    /// Print the dotted key path at a position in a dictionary file
    Path(PathCommand),
    /// Jump to a key's position in another language's dictionary
    Goto(GotoCommand),
    /// Add a translation value at a dotted key path
    Add(AddCommand),
    /// List discovered language dictionary files
    Locales(LocalesCommand),
    /// Initialize a new .glossarc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

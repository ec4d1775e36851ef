//! Glossa - translation dictionary navigator
//!
//! Glossa is a CLI tool and library for working with nested JSON translation
//! dictionaries. It detects dotted translation keys in source text, resolves
//! them against per-language dictionary files, maps cursor positions in a
//! dictionary document to dotted key paths, and navigates (or creates) the
//! same key across sibling language files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core engine (matcher, store, positional resolver, registry, navigator)
//! - `issues`: Issue type definitions for the `check` command
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod utils;

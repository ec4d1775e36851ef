//! Core engine for dictionary navigation.
//!
//! This module contains the engine behind every user-facing command:
//!
//! - `matcher`: lexical detection of dotted translation keys in source text
//! - `tree`: the typed dictionary tree (leaf values vs. namespaces)
//! - `store`: loading, resolving and persisting one dictionary file
//! - `position`: mapping cursor positions to key paths and key paths to
//!   textual positions
//! - `registry`: discovery of sibling per-language dictionary files
//! - `navigator`: cross-file navigation and missing-key creation

pub mod matcher;
pub mod navigator;
pub mod position;
pub mod registry;
pub mod store;
pub mod tree;

pub use matcher::{KeyMatch, is_valid_key_path, key_candidates};
pub use navigator::{NavigationOutcome, NavigationRequest, Prompt, navigate};
pub use position::{KeyLocation, key_path_at, locate_key};
pub use registry::LanguageRegistry;
pub use store::{DictError, DictionaryStore};
pub use tree::{Conflict, KeyAction, Node};

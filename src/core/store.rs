use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

use crate::core::tree::{Conflict, KeyAction, Node};

/// Errors from loading or mutating a dictionary file.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("dictionary file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot add '{key}' to {}: {conflict}", .path.display())]
    Conflict {
        key: String,
        path: PathBuf,
        conflict: Conflict,
    },
}

/// An in-memory dictionary backed by one JSON file.
///
/// The store is the sole writer of its backing file. Lookups are served
/// from the in-memory tree; mutations are written through: the tree is
/// only replaced after the serialized form has reached disk, so a failed
/// write never leaves memory and disk diverged.
#[derive(Debug)]
pub struct DictionaryStore {
    path: PathBuf,
    root: Option<Node>,
}

impl DictionaryStore {
    /// Creates a store for the given file without touching the filesystem.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a dictionary has been loaded successfully at least once.
    ///
    /// Callers consult this before offering lookups; an unloaded store
    /// answers every resolution with a miss.
    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Reads and parses the backing file, replacing the in-memory tree.
    ///
    /// On failure the previous tree (if any) is kept, so a transiently
    /// malformed file does not wipe out working lookups.
    pub fn load(&mut self) -> Result<(), DictError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(DictError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(err) => {
                return Err(DictError::Io {
                    action: "read",
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let value: Value = serde_json::from_str(&content).map_err(|err| DictError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        let root = Node::from_json(value).map_err(|err| DictError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        if matches!(root, Node::Leaf(_)) {
            return Err(DictError::Parse {
                path: self.path.clone(),
                message: "the root of a dictionary must be a JSON object".to_string(),
            });
        }

        self.root = Some(root);
        Ok(())
    }

    /// Resolves a dotted key path to its leaf value.
    ///
    /// `Some("")` (an empty translation) is distinct from `None` (a miss).
    pub fn resolve(&self, key_path: &str) -> Option<&str> {
        self.root.as_ref()?.resolve(key_path)
    }

    /// Number of leaf values currently loaded.
    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// Adds a value at a dotted key path and persists the whole tree.
    ///
    /// Intermediate namespaces are created as needed; structural clashes
    /// and overwrites without `overwrite` are refused (see
    /// [`Conflict`]). The file is serialized with 2-space indentation and
    /// written before the in-memory tree is updated, so an I/O failure
    /// leaves the store unchanged.
    pub fn add(
        &mut self,
        key_path: &str,
        value: &str,
        overwrite: bool,
    ) -> Result<KeyAction, DictError> {
        let mut tree = match &self.root {
            Some(root) => root.clone(),
            None => Node::namespace(),
        };

        let action = tree
            .insert(key_path, value.to_string(), overwrite)
            .map_err(|conflict| DictError::Conflict {
                key: key_path.to_string(),
                path: self.path.clone(),
                conflict,
            })?;

        let serialized =
            serde_json::to_string_pretty(&tree.to_json()).map_err(|err| DictError::Io {
                action: "serialize",
                path: self.path.clone(),
                source: io::Error::other(err),
            })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| DictError::Io {
                action: "create directory for",
                path: self.path.clone(),
                source: err,
            })?;
        }
        fs::write(&self.path, format!("{}\n", serialized)).map_err(|err| DictError::Io {
            action: "write",
            path: self.path.clone(),
            source: err,
        })?;

        self.root = Some(tree);
        Ok(action)
    }
}

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::LanguageRegistry;

/// Configuration and derived paths shared by all commands.
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    /// Primary dictionary file under `root`.
    pub dictionary_path: PathBuf,
}

impl ProjectContext {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let root = common.root.clone();
        let mut config = load_config(&root)?.config;
        if let Some(dictionary) = &common.dictionary {
            config.dictionary_path = dictionary.to_string_lossy().to_string();
        }
        let dictionary_path = config.dictionary_file(&root);
        Ok(Self {
            root,
            config,
            dictionary_path,
        })
    }

    /// A fresh (unscanned) registry over the dictionary's directory.
    pub fn registry(&self) -> LanguageRegistry {
        LanguageRegistry::new(&self.dictionary_path)
    }

    /// Renders a path relative to the project root where possible.
    pub fn display_path(&self, path: &Path) -> String {
        display_path(path, &self.root)
    }
}

pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

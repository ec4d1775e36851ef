use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;

/// A dictionary file is named by its language code: exactly two letters
/// followed by `.json`, case-insensitive. Anything else in the same
/// directory (a `config.json`, a `zh-CN.json`) is not a language file.
static LANGUAGE_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-z]{2})\.json$").unwrap());

/// Index of sibling per-language dictionary files.
///
/// The registry is a snapshot of one directory scan: it is cleared and
/// fully rebuilt by [`scan`](LanguageRegistry::scan) and goes stale if
/// files are added, removed or renamed on disk afterwards. Codes are
/// normalized to lowercase; entries iterate sorted by code.
#[derive(Debug)]
pub struct LanguageRegistry {
    base_dir: PathBuf,
    entries: BTreeMap<String, PathBuf>,
}

impl LanguageRegistry {
    /// Creates an empty registry rooted at the directory containing the
    /// given dictionary file.
    pub fn new(dictionary_path: &Path) -> Self {
        let base_dir = dictionary_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            base_dir,
            entries: BTreeMap::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Rebuilds the index from the base directory.
    ///
    /// A missing base directory yields an empty index, not an error; a
    /// directory read failure is returned to the caller and also leaves
    /// the index empty.
    pub fn scan(&mut self) -> Result<()> {
        self.entries.clear();

        if !self.base_dir.is_dir() {
            return Ok(());
        }

        let dir = fs::read_dir(&self.base_dir).with_context(|| {
            format!(
                "failed to read dictionary directory: {}",
                self.base_dir.display()
            )
        })?;
        for entry in dir {
            let entry = entry.with_context(|| {
                format!(
                    "failed to read dictionary directory: {}",
                    self.base_dir.display()
                )
            })?;
            let path = entry.path();
            if path.is_file()
                && let Some(code) = Self::language_code_from_path(&path)
            {
                self.entries.insert(code, path);
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Path of the dictionary file for a language code, case-insensitive.
    pub fn get(&self, code: &str) -> Option<&Path> {
        self.entries.get(&code.to_lowercase()).map(PathBuf::as_path)
    }

    /// All `(code, path)` entries, sorted by code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(code, path)| (code.as_str(), path.as_path()))
    }

    /// Extracts the language code from a file path, or `None` when the
    /// filename does not follow the `{two letters}.json` convention.
    pub fn language_code_from_path(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        let caps = LANGUAGE_FILE_REGEX.captures(name)?;
        Some(caps[1].to_lowercase())
    }

    /// Whether a path names a language dictionary file. The `.json`
    /// extension stands in for the editor notion of a JSON content type.
    pub fn is_language_file(path: &Path) -> bool {
        Self::language_code_from_path(path).is_some()
    }
}

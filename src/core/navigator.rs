use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result, bail};

use crate::core::{
    position::{KeyLocation, key_path_at, locate_key},
    registry::LanguageRegistry,
    store::DictionaryStore,
};

/// Interactive questions asked during missing-key creation.
///
/// The navigator suspends at these points awaiting a human answer; either
/// answer may cancel the whole operation, which must leave zero mutations
/// behind. The CLI implements this over stdin; tests script the answers.
pub trait Prompt {
    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Asks for a text value, optionally pre-filled with `initial`.
    /// `None` means the prompt was dismissed.
    fn input(&mut self, message: &str, initial: Option<&str>) -> Result<Option<String>>;
}

/// One navigation request: a cursor position in a dictionary file and the
/// language to jump to.
#[derive(Debug, Clone)]
pub struct NavigationRequest<'a> {
    pub source_path: &'a Path,
    /// 0-based line of the cursor.
    pub line: usize,
    /// 0-based column of the cursor.
    pub column: usize,
    pub target_language: &'a str,
    /// Whether a missing key may be created (after confirmation).
    pub allow_create: bool,
}

/// Result of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The key exists in the target file; jump there.
    Jump {
        file: PathBuf,
        location: KeyLocation,
        key_path: String,
        source_language: String,
        target_language: String,
    },
    /// The key was created in the target file; jump to the new entry.
    Created {
        file: PathBuf,
        location: KeyLocation,
        key_path: String,
        source_language: String,
        target_language: String,
        value: String,
    },
    /// The user declined a prompt; nothing was written.
    Cancelled { key_path: String },
}

/// Navigates from a key under the cursor to the same key in another
/// language's dictionary, optionally creating it there.
///
/// The registry is scanned lazily if empty and is never mutated by a
/// failed navigation. All filesystem and parse errors propagate to the
/// caller; user-declined prompts are a normal [`NavigationOutcome`], not
/// an error.
pub fn navigate(
    registry: &mut LanguageRegistry,
    request: &NavigationRequest<'_>,
    prompt: &mut dyn Prompt,
) -> Result<NavigationOutcome> {
    let source_display = request.source_path.display().to_string();
    let source_text = fs::read_to_string(request.source_path)
        .with_context(|| format!("failed to read {}", source_display))?;

    let Some(key_path) = key_path_at(&source_text, request.line, request.column) else {
        bail!(
            "no translation key at {}:{}:{}",
            source_display,
            request.line + 1,
            request.column + 1
        );
    };

    let Some(source_language) = LanguageRegistry::language_code_from_path(request.source_path)
    else {
        bail!("{} is not a language dictionary file", source_display);
    };

    if registry.is_empty() {
        registry.scan()?;
    }

    let target_language = request.target_language.to_lowercase();
    let Some(target_path) = registry.get(&target_language) else {
        bail!("no dictionary file for language '{}'", target_language);
    };
    let target_path = target_path.to_path_buf();

    let target_text = fs::read_to_string(&target_path)
        .with_context(|| format!("failed to read {}", target_path.display()))?;
    if let Some(location) = locate_key(&target_text, &key_path) {
        return Ok(NavigationOutcome::Jump {
            file: target_path,
            location,
            key_path,
            source_language,
            target_language,
        });
    }

    if !request.allow_create {
        bail!("'{}' not found in {}.json", key_path, target_language);
    }

    let create = prompt.confirm(&format!(
        "'{}' does not exist in {}.json. Create it?",
        key_path, target_language
    ))?;
    if !create {
        return Ok(NavigationOutcome::Cancelled { key_path });
    }

    // Re-read the source as a dictionary to pre-fill the prompt with the
    // value being translated.
    let mut source_store = DictionaryStore::open(request.source_path);
    source_store.load()?;
    let source_value = source_store.resolve(&key_path).map(str::to_string);

    let value = prompt.input(
        &format!("Translation for '{}' in {}", key_path, target_language),
        source_value.as_deref(),
    )?;
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(NavigationOutcome::Cancelled { key_path }),
    };

    let mut target_store = DictionaryStore::open(&target_path);
    target_store.load()?;

    // The textual search missed, but the parsed tree may still hold the
    // key (unconventional formatting); overwriting it needs consent.
    let overwrite = match target_store.resolve(&key_path) {
        Some(current) => {
            let replace = prompt.confirm(&format!(
                "'{}' already holds \"{}\" in {}.json. Overwrite?",
                key_path, current, target_language
            ))?;
            if !replace {
                return Ok(NavigationOutcome::Cancelled { key_path });
            }
            true
        }
        None => false,
    };

    target_store.add(&key_path, &value, overwrite)?;

    // Pick up the freshly written formatting before positioning, so the
    // reported location matches what is now on disk.
    let rewritten = fs::read_to_string(&target_path)
        .with_context(|| format!("failed to read {}", target_path.display()))?;
    let Some(location) = locate_key(&rewritten, &key_path) else {
        bail!(
            "failed to locate '{}' in {} after writing it",
            key_path,
            target_path.display()
        );
    };

    Ok(NavigationOutcome::Created {
        file: target_path,
        location,
        key_path,
        source_language,
        target_language,
        value,
    })
}

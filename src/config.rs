use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::LanguageRegistry;

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Master switch; when false every lookup-backed command reports the
    /// disabled state instead of resolving keys.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Primary dictionary file, relative to the project root. Its parent
    /// directory is where sibling language files are discovered.
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,
    /// Maximum characters of a value shown inline before truncation.
    #[serde(default = "default_max_display_length")]
    pub max_display_length: usize,
    /// Directories scanned for translation key usages.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Glob patterns excluded from the scan.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// File extensions eligible for key scanning.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    /// Whether `check` also reports keys missing from sibling language
    /// files.
    #[serde(default = "default_check_lag")]
    pub check_lag: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_dictionary_path() -> String {
    "src/assets/i18n/en.json".to_string()
}

fn default_max_display_length() -> usize {
    40
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_source_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "html", "vue"]
        .map(String::from)
        .to_vec()
}

fn default_check_lag() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dictionary_path: default_dictionary_path(),
            max_display_length: default_max_display_length(),
            includes: default_includes(),
            ignores: Vec::new(),
            source_extensions: default_source_extensions(),
            check_lag: default_check_lag(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Absolute-ish path of the primary dictionary under `root`.
    pub fn dictionary_file(&self, root: &Path) -> PathBuf {
        root.join(&self.dictionary_path)
    }

    /// Language code of the primary dictionary, taken from its filename.
    /// Falls back to "en" when the file is not named by a language code.
    pub fn primary_language(&self) -> String {
        LanguageRegistry::language_code_from_path(Path::new(&self.dictionary_path))
            .unwrap_or_else(|| "en".to_string())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.enabled);
        assert_eq!(config.dictionary_path, "src/assets/i18n/en.json");
        assert_eq!(config.max_display_length, 40);
        assert_eq!(config.includes, vec!["src"]);
        assert!(config.ignores.is_empty());
        assert!(config.check_lag);
    }

    #[test]
    fn test_parse_config_camel_case() {
        let json = r#"{
            "enabled": false,
            "dictionaryPath": "i18n/en.json",
            "maxDisplayLength": 20,
            "checkLag": false
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.dictionary_path, "i18n/en.json");
        assert_eq!(config.max_display_length, 20);
        assert!(!config.check_lag);
        // unset fields keep their defaults
        assert_eq!(config.includes, vec!["src"]);
    }

    #[test]
    fn test_primary_language_from_dictionary_name() {
        let mut config = Config::default();
        assert_eq!(config.primary_language(), "en");

        config.dictionary_path = "i18n/DE.json".to_string();
        assert_eq!(config.primary_language(), "de");

        config.dictionary_path = "i18n/strings.json".to_string();
        assert_eq!(config.primary_language(), "en");
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_boundary() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "dictionaryPath": "messages/en.json" }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.dictionary_path, "messages/en.json");
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert!(result.config.enabled);
    }

    #[test]
    fn test_invalid_ignore_pattern_fails_validation() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["[invalid"] }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("dictionaryPath"));
        assert!(json.contains("maxDisplayLength"));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.dictionary_path, Config::default().dictionary_path);
    }
}

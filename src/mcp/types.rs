use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub enabled: bool,
    pub dictionary_path: String,
    pub max_display_length: usize,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub source_extensions: Vec<String>,
    pub check_lag: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(config: crate::config::Config) -> Self {
        Self {
            enabled: config.enabled,
            dictionary_path: config.dictionary_path,
            max_display_length: config.max_display_length,
            includes: config.includes,
            ignores: config.ignores,
            source_extensions: config.source_extensions,
            check_lag: config.check_lag,
        }
    }
}

// ============================================================
// Locales Types (list_locales)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListLocalesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

/// Result of list_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub dictionary_dir: String,
    pub primary_language: String,
    pub locales: Vec<LocaleInfo>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub language: String,
    pub file_path: String,
    pub key_count: usize,
}

// ============================================================
// Resolve Types (resolve_key)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveKeyParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dotted key path, e.g. "general.submit"
    pub key: String,
    /// Language code; defaults to the primary dictionary's language
    pub language: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveKeyResult {
    pub key: String,
    pub language: String,
    /// False when the key does not resolve to a string value. An empty
    /// string value still counts as found.
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

// ============================================================
// Locate Types (locate_key)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateKeyParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dotted key path, e.g. "general.submit"
    pub key: String,
    /// Language code of the dictionary file to search
    pub language: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateKeyResult {
    pub key: String,
    pub language: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// 1-based line of the key (only when found)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// 1-based column of the key (only when found)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
}

// ============================================================
// Scan Types (scan_missing)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMissingParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub key: String,
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMissingResult {
    pub total_count: usize,
    pub source_files_scanned: usize,
    pub items: Vec<MissingItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// AddTranslation Types (add_translation)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dotted key path, e.g. "general.submit"
    pub key: String,
    /// Translation value to write
    pub value: String,
    /// Language codes to write to; defaults to every discovered locale
    pub languages: Option<Vec<String>>,
    /// Overwrite existing values (default false)
    pub overwrite: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTranslationResult {
    /// True if every requested language was written
    pub success: bool,
    pub results: Vec<LanguageResult>,
}

/// Result for a single language
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResult {
    pub language: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// "added" or "updated" (only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

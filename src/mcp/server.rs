use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::cli::commands::check::scan_missing_keys;
use crate::config::{Config, load_config};
use crate::core::{DictionaryStore, LanguageRegistry, is_valid_key_path, locate_key};
use crate::mcp::types::{
    AddTranslationParams, AddTranslationResult, ConfigDto, ConfigValues, GetConfigParams,
    LanguageResult, ListLocalesParams, LocaleInfo, LocalesResult, LocateKeyParams,
    LocateKeyResult, MissingItem, Pagination, ResolveKeyParams, ResolveKeyResult,
    ScanMissingParams, ScanMissingResult,
};

#[derive(Clone)]
pub struct GlossaMcpServer {
    tool_router: ToolRouter<Self>,
}

/// A loaded project: config plus a scanned registry.
struct Project {
    root: PathBuf,
    config: Config,
    dictionary_path: PathBuf,
    registry: LanguageRegistry,
}

fn load_project(project_root_path: &str) -> Result<Project, McpError> {
    let root = PathBuf::from(project_root_path);
    let config = load_config(&root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
        .config;
    let dictionary_path = config.dictionary_file(&root);
    let mut registry = LanguageRegistry::new(&dictionary_path);
    registry
        .scan()
        .map_err(|e| McpError::internal_error(format!("Failed to scan locales: {}", e), None))?;
    Ok(Project {
        root,
        config,
        dictionary_path,
        registry,
    })
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl GlossaMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current glossa configuration
    #[tool(description = "Get the current glossa configuration.")]
    async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);

        let result = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// List discovered language dictionary files
    #[tool(
        description = "List the per-language dictionary files discovered next to the primary dictionary, with their key counts."
    )]
    async fn list_locales(
        &self,
        params: Parameters<ListLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;

        let locales: Vec<LocaleInfo> = project
            .registry
            .entries()
            .map(|(language, path)| {
                let mut store = DictionaryStore::open(path);
                let key_count = store.load().ok().map_or(0, |_| store.leaf_count());
                LocaleInfo {
                    language: language.to_string(),
                    file_path: display_path(path, &project.root),
                    key_count,
                }
            })
            .collect();

        let result = LocalesResult {
            dictionary_dir: display_path(project.registry.base_dir(), &project.root),
            primary_language: project.config.primary_language(),
            locales,
        };

        json_result(&result)
    }

    /// Resolve a dotted key to its translation value
    #[tool(
        description = "Resolve a dotted key path (e.g. \"general.submit\") to its translation value in one language. An empty string value still counts as found."
    )]
    async fn resolve_key(
        &self,
        params: Parameters<ResolveKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;
        let language = params
            .0
            .language
            .map(|language| language.to_lowercase())
            .unwrap_or_else(|| project.config.primary_language());

        let path = if language == project.config.primary_language() {
            Some(project.dictionary_path.clone())
        } else {
            project.registry.get(&language).map(Path::to_path_buf)
        };
        let Some(path) = path else {
            return Err(McpError::invalid_params(
                format!("no dictionary file for language '{}'", language),
                None,
            ));
        };

        let mut store = DictionaryStore::open(&path);
        store
            .load()
            .map_err(|e| McpError::internal_error(format!("Failed to load dictionary: {}", e), None))?;

        let value = store.resolve(&params.0.key).map(str::to_string);
        let result = ResolveKeyResult {
            key: params.0.key,
            language,
            found: value.is_some(),
            value,
        };

        json_result(&result)
    }

    /// Locate a key's textual position in a dictionary file
    #[tool(
        description = "Find the line and column of a dotted key path inside a language's dictionary file. Returns found=false when the key is absent."
    )]
    async fn locate_key(
        &self,
        params: Parameters<LocateKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;
        let language = params.0.language.to_lowercase();

        let Some(path) = project.registry.get(&language).map(Path::to_path_buf) else {
            return Err(McpError::invalid_params(
                format!("no dictionary file for language '{}'", language),
                None,
            ));
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            McpError::internal_error(format!("Failed to read {}: {}", path.display(), e), None)
        })?;

        let location = locate_key(&content, &params.0.key);
        let result = LocateKeyResult {
            key: params.0.key,
            language,
            found: location.is_some(),
            file_path: location.map(|_| display_path(&path, &project.root)),
            line: location.map(|l| l.line),
            col: location.map(|l| l.col),
        };

        json_result(&result)
    }

    /// Scan source files for keys missing from the primary dictionary
    #[tool(
        description = "Scan the project's source files for dotted translation keys that the primary dictionary does not resolve. Returns a paginated list."
    )]
    async fn scan_missing(
        &self,
        params: Parameters<ScanMissingParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let mut primary = DictionaryStore::open(&project.dictionary_path);
        primary.load().map_err(|e| {
            McpError::internal_error(format!("Failed to load dictionary: {}", e), None)
        })?;

        let scan = scan_missing_keys(&project.root, &project.config, &primary)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let total_count = scan.issues.len();
        let items: Vec<MissingItem> = scan
            .issues
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|issue| MissingItem {
                key: issue.key,
                file_path: issue.file_path,
                line: issue.line,
                col: issue.col,
            })
            .collect();
        let has_more = offset + items.len() < total_count;

        let result = ScanMissingResult {
            total_count,
            source_files_scanned: scan.files_scanned,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&result)
    }

    /// Add a translation key to one or more language files
    #[tool(
        description = "Add a dotted key with a translation value to one or more language dictionary files. Existing values are only replaced when overwrite is true."
    )]
    async fn add_translation(
        &self,
        params: Parameters<AddTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = load_project(&params.0.project_root_path)?;
        let key = params.0.key;
        let overwrite = params.0.overwrite.unwrap_or(false);

        if !is_valid_key_path(&key) {
            return Err(McpError::invalid_params(
                format!("'{}' is not a valid dotted key path", key),
                None,
            ));
        }

        let languages: Vec<String> = match params.0.languages {
            Some(languages) if !languages.is_empty() => languages
                .into_iter()
                .map(|language| language.to_lowercase())
                .collect(),
            _ => project
                .registry
                .entries()
                .map(|(language, _)| language.to_string())
                .collect(),
        };

        let mut results = Vec::with_capacity(languages.len());
        for language in languages {
            let Some(path) = project.registry.get(&language).map(Path::to_path_buf) else {
                results.push(LanguageResult {
                    language,
                    success: false,
                    file_path: None,
                    action: None,
                    error: Some("no dictionary file for this language".to_string()),
                });
                continue;
            };

            let mut store = DictionaryStore::open(&path);
            if let Err(err) = store.load() {
                results.push(LanguageResult {
                    language,
                    success: false,
                    file_path: Some(display_path(&path, &project.root)),
                    action: None,
                    error: Some(err.to_string()),
                });
                continue;
            }

            match store.add(&key, &params.0.value, overwrite) {
                Ok(action) => results.push(LanguageResult {
                    language,
                    success: true,
                    file_path: Some(display_path(&path, &project.root)),
                    action: Some(action.as_str().to_string()),
                    error: None,
                }),
                Err(err) => results.push(LanguageResult {
                    language,
                    success: false,
                    file_path: Some(display_path(&path, &project.root)),
                    action: None,
                    error: Some(err.to_string()),
                }),
            }
        }

        let result = AddTranslationResult {
            success: results.iter().all(|r| r.success),
            results,
        };

        json_result(&result)
    }
}

impl Default for GlossaMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for GlossaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Glossa MCP helps AI agents work with nested JSON translation dictionaries.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_locales - Get available dictionary files and their key counts\n\
                 3. resolve_key - Resolve a dotted key to its value in one language\n\
                 4. locate_key - Find a key's line/column inside a dictionary file\n\
                 5. scan_missing - Find keys used in source but absent from the primary dictionary (paginated)\n\
                 6. add_translation - Add a key with a value to one or more dictionary files\n\n\
                 Recommended Workflow:\n\
                 1. Use list_locales to see which languages exist\n\
                 2. Use scan_missing to find untranslated keys\n\
                 3. Use add_translation to fill them in, starting with the primary language\n\n\
                 add_translation never overwrites existing values unless overwrite is set, and it\n\
                 refuses key paths that would replace a value with a namespace."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GlossaMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::load_config,
    core::{
        CommandContext, CommandOutcome, Prompt, ScriptedHost,
        translation::TranslationDocument,
        workflow::{NO_FILES_MESSAGE, create_translation},
        workspace::find_nearest_translation_files,
    },
};

use super::types::{
    ConfigDto, ConfigValues, CreateTranslationParams, CreateTranslationResult, FileKeys,
    GetConfigParams, ListTranslationFilesParams, ListTranslationKeysParams, TranslationFileInfo,
    TranslationFilesResult, TranslationKeysResult,
};

#[derive(Clone)]
pub struct TranslatelyMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TranslatelyMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TranslatelyMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current translately configuration
    #[tool(description = "Get the current translately configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// List the translation files a command would work on
    #[tool(
        description = "List translation files. With activeDocumentPath only the files closest to that document are returned, otherwise every translation file in the project."
    )]
    pub async fn list_translation_files(
        &self,
        params: Parameters<ListTranslationFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = command_context(&params.project_root_path)?;
        let mut host = scripted_host(params.active_document_path.as_deref());

        let files = find_nearest_translation_files(&ctx.workspace, &mut host)
            .into_iter()
            .map(|file| TranslationFileInfo {
                relative_path: ctx.workspace.relative_path_of(&file.path),
                file_path: file.path.to_string_lossy().to_string(),
                language: file.language,
            })
            .collect();

        json_result(&TranslationFilesResult { files })
    }

    /// List existing keys with their values
    #[tool(
        description = "List the existing translation keys (sorted by name) and values of each translation file. Files without a translation object are reported with an error."
    )]
    pub async fn list_translation_keys(
        &self,
        params: Parameters<ListTranslationKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = command_context(&params.project_root_path)?;
        let mut host = scripted_host(params.active_document_path.as_deref());

        let mut files = Vec::new();
        for file in find_nearest_translation_files(&ctx.workspace, &mut host) {
            let relative_path = ctx.workspace.relative_path_of(&file.path);
            let entry = match TranslationDocument::open(&file.path) {
                Ok(document) if document.has_translation_object(&ctx.settings) => FileKeys {
                    language: file.language,
                    relative_path,
                    keys: document.keys(&ctx.settings).into_iter().map(Into::into).collect(),
                    error: None,
                },
                Ok(_) => FileKeys {
                    error: Some(format!("Missing translation object for {}", file.language)),
                    language: file.language,
                    relative_path,
                    keys: Vec::new(),
                },
                Err(e) => FileKeys {
                    language: file.language,
                    relative_path,
                    keys: Vec::new(),
                    error: Some(e.to_string()),
                },
            };
            files.push(entry);
        }

        json_result(&TranslationKeysResult { files })
    }

    /// Create a key in every resolved translation file
    #[tool(
        description = "Create a translation key with one value per language. The key is inserted in sorted position into every resolved translation file; nothing is written unless every file receives it."
    )]
    pub async fn create_translation(
        &self,
        params: Parameters<CreateTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if params.key.is_empty() {
            return Err(McpError::invalid_params("key cannot be empty", None));
        }

        let ctx = command_context(&params.project_root_path)?;
        let active = params.active_document_path.as_deref();
        let files: Vec<String> =
            find_nearest_translation_files(&ctx.workspace, &mut scripted_host(active))
                .iter()
                .map(|file| ctx.workspace.relative_path_of(&file.path))
                .collect();

        let mut host = params
            .translations
            .iter()
            .fold(scripted_host(active).with_key(&params.key), |host, t| {
                host.with_value(&t.language, &t.value)
            });

        let outcome = create_translation(&ctx, &mut host)
            .map_err(|e| McpError::internal_error(format!("Create failed: {:#}", e), None))?;
        debug!(?outcome, "create_translation tool finished");

        let error = match &outcome {
            CommandOutcome::Completed { .. } => None,
            CommandOutcome::NothingFound => Some(NO_FILES_MESSAGE.to_string()),
            CommandOutcome::Failed(message) => Some(message.clone()),
            CommandOutcome::Cancelled => Some(match host.prompts.last() {
                Some(Prompt::TranslationValue { language, .. }) => {
                    format!("No translation provided for {}", language)
                }
                _ => "Cancelled command".to_string(),
            }),
        };
        let insert_text = match error {
            None => host.replacements.pop().or(host.clipboard.take()),
            Some(_) => None,
        };

        json_result(&CreateTranslationResult {
            success: error.is_none(),
            key: params.key,
            files,
            insert_text,
            error,
        })
    }
}

#[tool_handler]
impl ServerHandler for TranslatelyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Translately MCP edits per-language TypeScript translation files (e.g. i18n/enUS.ts).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_translation_files - Get the translation files near a document (or all of them)\n\
                 3. list_translation_keys - Get existing keys and values per translation file\n\
                 4. create_translation - Add a key with one value per language\n\n\
                 Recommended Workflow:\n\
                 1. Use list_translation_files with the document you are editing\n\
                 2. Use list_translation_keys to reuse an existing key when one fits\n\
                 3. Otherwise call create_translation with a value for every listed language\n\
                    and insert the returned insertText at the usage site"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn command_context(project_root_path: &str) -> Result<CommandContext, McpError> {
    CommandContext::new(Path::new(project_root_path))
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// A host that selects every candidate unless a document narrows the choice.
fn scripted_host(active_document_path: Option<&str>) -> ScriptedHost {
    match active_document_path {
        Some(path) => ScriptedHost::new().with_active_document(path),
        None => ScriptedHost::new(),
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TranslatelyMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::translation::TranslationKey;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTranslationFilesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// File being edited; only the translation files closest to it are returned
    #[serde(default)]
    pub active_document_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTranslationKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// File being edited; only the translation files closest to it are read
    #[serde(default)]
    pub active_document_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// File being edited; the key is added to the translation files closest to it
    #[serde(default)]
    pub active_document_path: Option<String>,
    /// Key to create, e.g. "checkout.summary.title"
    pub key: String,
    /// One value per language; every resolved translation file needs one
    pub translations: Vec<TranslationValueInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationValueInput {
    /// Language identifier, the translation file name without extension (e.g. "enUS")
    pub language: String,
    pub value: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

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
    pub key_insert_pattern: String,
    pub translation_files_include_pattern: String,
    pub translation_files_exclude_pattern: String,
    pub translation_variable_pattern: String,
    pub indentation_type: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            indentation_type: c.indentation_type.to_string(),
            key_insert_pattern: c.key_insert_pattern,
            translation_files_include_pattern: c.translation_files_include_pattern,
            translation_files_exclude_pattern: c.translation_files_exclude_pattern,
            translation_variable_pattern: c.translation_variable_pattern,
        }
    }
}

// ============================================================
// File Types (list_translation_files)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFilesResult {
    pub files: Vec<TranslationFileInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationFileInfo {
    pub language: String,
    pub file_path: String,
    /// Path relative to the project root, `/`-separated
    pub relative_path: String,
}

// ============================================================
// Key Types (list_translation_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationKeysResult {
    pub files: Vec<FileKeys>,
}

/// Keys of one translation file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileKeys {
    pub language: String,
    pub relative_path: String,
    pub keys: Vec<KeyItem>,
    /// Why the file could not be read (only on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyItem {
    pub name: String,
    pub value: String,
}

impl From<TranslationKey> for KeyItem {
    fn from(key: TranslationKey) -> Self {
        Self {
            name: key.name,
            value: key.value,
        }
    }
}

// ============================================================
// Create Types (create_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranslationResult {
    /// True if the key was written to every resolved translation file
    pub success: bool,
    pub key: String,
    /// Relative paths of the translation files the key was (or would have been) added to
    pub files: Vec<String>,
    /// Text to insert at the usage site, built from `keyInsertPattern` (only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Why nothing was written (only on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

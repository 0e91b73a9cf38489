use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::utils::glob_matcher::GlobSet;

pub const CONFIG_FILE_NAME: &str = ".translatelyrc.json";

/// Token replaced by the key name in `keyInsertPattern`.
pub const KEY_PLACEHOLDER: &str = "%KEY%";

/// Indentation used when the editor has to lay out new object members itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum IndentationType {
    #[default]
    #[serde(rename = "2 spaces")]
    TwoSpaces,
    #[serde(rename = "4 spaces")]
    FourSpaces,
    #[serde(rename = "8 spaces")]
    EightSpaces,
    #[serde(rename = "Tab")]
    Tab,
}

impl IndentationType {
    /// The text of one indentation level.
    pub fn unit(self) -> &'static str {
        match self {
            IndentationType::TwoSpaces => "  ",
            IndentationType::FourSpaces => "    ",
            IndentationType::EightSpaces => "        ",
            IndentationType::Tab => "\t",
        }
    }
}

impl fmt::Display for IndentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IndentationType::TwoSpaces => "2 spaces",
            IndentationType::FourSpaces => "4 spaces",
            IndentationType::EightSpaces => "8 spaces",
            IndentationType::Tab => "Tab",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_key_insert_pattern")]
    pub key_insert_pattern: String,
    #[serde(default = "default_include_pattern")]
    pub translation_files_include_pattern: String,
    #[serde(default = "default_exclude_pattern")]
    pub translation_files_exclude_pattern: String,
    #[serde(default = "default_variable_pattern")]
    pub translation_variable_pattern: String,
    #[serde(default, alias = "identationType")]
    pub indentation_type: IndentationType,
}

fn default_key_insert_pattern() -> String {
    KEY_PLACEHOLDER.to_string()
}

fn default_include_pattern() -> String {
    "**/i18n/*.ts".to_string()
}

fn default_exclude_pattern() -> String {
    "{**/dist/**,**/node_modules/**}".to_string()
}

fn default_variable_pattern() -> String {
    "[a-z]{2}[A-Z]{2}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_insert_pattern: default_key_insert_pattern(),
            translation_files_include_pattern: default_include_pattern(),
            translation_files_exclude_pattern: default_exclude_pattern(),
            translation_variable_pattern: default_variable_pattern(),
            indentation_type: IndentationType::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern or the variable name pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        self.include_globs()?;
        self.exclude_globs()?;
        self.variable_pattern()?;
        Ok(())
    }

    /// Compiled include filter for translation file discovery.
    pub fn include_globs(&self) -> Result<GlobSet> {
        GlobSet::new(&self.translation_files_include_pattern).with_context(|| {
            format!(
                "Invalid glob pattern in 'translationFilesIncludePattern': \"{}\"",
                self.translation_files_include_pattern
            )
        })
    }

    /// Compiled exclude filter for translation file discovery.
    pub fn exclude_globs(&self) -> Result<GlobSet> {
        GlobSet::new(&self.translation_files_exclude_pattern).with_context(|| {
            format!(
                "Invalid glob pattern in 'translationFilesExcludePattern': \"{}\"",
                self.translation_files_exclude_pattern
            )
        })
    }

    /// Compiled regex a declaration name must match to hold the translations.
    pub fn variable_pattern(&self) -> Result<Regex> {
        Regex::new(&self.translation_variable_pattern).with_context(|| {
            format!(
                "Invalid regex in 'translationVariablePattern': \"{}\"",
                self.translation_variable_pattern
            )
        })
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
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config file");
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

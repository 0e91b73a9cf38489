//! The translation-object editor.
//!
//! Reads and edits the exported object literal that holds one language's
//! key/value pairs inside a TypeScript file.
//!
//! ```text
//! TranslationDocument (file text + parsed AST)
//!     ↓ locate      first top-level declaration matching the name pattern
//! ObjectLit
//!     ↓ extract     sorted (name, value) pairs          (read path)
//!     ↓ insert      sorted, quote-safe new property      (write path)
//! EditSession::commit_all
//! ```

mod document;
mod extract;
mod insert;
mod locate;
mod session;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Result;
use regex::Regex;
use serde::Serialize;

use crate::config::{Config, IndentationType};

pub use document::TranslationDocument;
pub use extract::extract_keys;
pub use insert::{escape_translation, find_index_for_new_key, quote_kind};
pub use locate::locate_translation_object;
pub use session::EditSession;

/// One language's translation source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationFile {
    pub path: PathBuf,
    /// File name without extension, e.g. `enUS` for `i18n/enUS.ts`.
    pub language: String,
}

impl TranslationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let language = language_of(&path);
        Self { path, language }
    }
}

/// Derive the language identifier from a translation file path.
pub fn language_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// An existing property of a translation object, with quotes removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationKey {
    pub name: String,
    /// Empty when the property value is not a string literal.
    pub value: String,
}

impl TranslationKey {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The value a user supplied for one language during create-translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub file: TranslationFile,
    pub value: String,
}

/// Quote character used by the keys of a translation object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteKind {
    Single,
    #[default]
    Double,
}

impl QuoteKind {
    pub fn as_char(self) -> char {
        match self {
            QuoteKind::Single => '\'',
            QuoteKind::Double => '"',
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Settings the editor needs from the configuration, compiled once per command.
#[derive(Debug, Clone)]
pub struct EditSettings {
    pub variable_pattern: Regex,
    pub indentation: IndentationType,
}

impl EditSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            variable_pattern: config.variable_pattern()?,
            indentation: config.indentation_type,
        })
    }
}

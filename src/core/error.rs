use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading or editing translation files.
///
/// `MissingTranslationObject`, `Parse` and `InvalidValue` come from file
/// content or user input and are reported to the user; `Read`/`Write` are
/// storage failures that abort the command.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("Missing translation object for {language}")]
    MissingTranslationObject { language: String },

    #[error("Failed to parse translations for {language} ({}): {message}", path.display())]
    Parse {
        language: String,
        path: PathBuf,
        message: String,
    },

    #[error("Translation for \"{key}\" in {language} does not produce valid source: {message}")]
    InvalidValue {
        language: String,
        key: String,
        message: String,
    },

    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditError {
    /// True for errors caused by file content or the entered text rather than storage.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            EditError::MissingTranslationObject { .. }
                | EditError::Parse { .. }
                | EditError::InvalidValue { .. }
        )
    }
}

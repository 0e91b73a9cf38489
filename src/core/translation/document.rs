use std::{fs, path::Path};

use tracing::debug;

use super::{
    EditSettings, TranslationFile, TranslationKey, extract_keys,
    insert::{collect_members, escape_translation, find_index_for_new_key, insert_property_text, quote_kind},
    locate_translation_object,
};
use crate::core::{
    error::EditError,
    parsers::ts::{ParsedSource, parse_ts_source},
};

/// An in-memory translation file.
///
/// Edits only change the held text; nothing touches the disk until [`save`](Self::save).
pub struct TranslationDocument {
    file: TranslationFile,
    source: String,
    parsed: ParsedSource,
    modified: bool,
}

impl TranslationDocument {
    /// Read and parse a translation file.
    pub fn open(path: &Path) -> Result<Self, EditError> {
        let source = fs::read_to_string(path).map_err(|source| EditError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(TranslationFile::new(path), source)
    }

    pub fn from_source(file: TranslationFile, source: String) -> Result<Self, EditError> {
        let parsed = parse(&file, &source)?;
        Ok(Self {
            file,
            source,
            parsed,
            modified: false,
        })
    }

    pub fn file(&self) -> &TranslationFile {
        &self.file
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn has_translation_object(&self, settings: &EditSettings) -> bool {
        locate_translation_object(&self.parsed.module, &settings.variable_pattern).is_some()
    }

    /// Existing keys sorted by name; empty when the file has no translation object.
    pub fn keys(&self, settings: &EditSettings) -> Vec<TranslationKey> {
        locate_translation_object(&self.parsed.module, &settings.variable_pattern)
            .map(|object| extract_keys(object, &self.parsed, &self.source))
            .unwrap_or_default()
    }

    /// Add `key: value` to the translation object at its sorted position.
    pub fn insert_translation(
        &mut self,
        settings: &EditSettings,
        key: &str,
        value: &str,
    ) -> Result<(), EditError> {
        let object = locate_translation_object(&self.parsed.module, &settings.variable_pattern)
            .ok_or_else(|| EditError::MissingTranslationObject {
                language: self.file.language.clone(),
            })?;

        let members = collect_members(object, &self.parsed, &self.source);
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        let index = find_index_for_new_key(&names, key);

        let quote = quote_kind(object, &self.parsed, &self.source);
        let property = format!(
            "{quote}{}{quote}: {quote}{}{quote}",
            escape_translation(key, quote),
            escape_translation(value, quote),
        );
        debug!(
            language = %self.file.language,
            key,
            index,
            "inserting translation"
        );

        let updated = insert_property_text(
            &self.source,
            self.parsed.range(object.span),
            &members,
            index,
            &property,
            settings.indentation,
        );
        self.parsed = parse_ts_source(&updated, &self.file.path.to_string_lossy()).map_err(|e| {
            EditError::InvalidValue {
                language: self.file.language.clone(),
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;
        self.source = updated;
        self.modified = true;
        Ok(())
    }

    /// Write the current text back to the file.
    pub fn save(&mut self) -> Result<(), EditError> {
        fs::write(&self.file.path, &self.source).map_err(|source| EditError::Write {
            path: self.file.path.clone(),
            source,
        })?;
        self.modified = false;
        Ok(())
    }
}

fn parse(file: &TranslationFile, source: &str) -> Result<ParsedSource, EditError> {
    parse_ts_source(source, &file.path.to_string_lossy()).map_err(|e| EditError::Parse {
        language: file.language.clone(),
        path: file.path.clone(),
        message: e.to_string(),
    })
}

use std::path::Path;

use tracing::{debug, info};

use super::{EditSettings, TranslationDocument, TranslationEntry};
use crate::core::error::EditError;

/// A batch of translation files edited together.
///
/// Documents are opened once per command. Edits accumulate in memory and are
/// written by [`commit_all`](Self::commit_all); dropping the session discards them.
pub struct EditSession {
    settings: EditSettings,
    documents: Vec<TranslationDocument>,
}

impl EditSession {
    pub fn new(settings: EditSettings) -> Self {
        Self {
            settings,
            documents: Vec::new(),
        }
    }

    pub fn settings(&self) -> &EditSettings {
        &self.settings
    }

    /// Open `path`, or return the index of the already opened document.
    pub fn open(&mut self, path: &Path) -> Result<usize, EditError> {
        if let Some(idx) = self.documents.iter().position(|doc| doc.file().path == path) {
            return Ok(idx);
        }
        let document = TranslationDocument::open(path)?;
        self.documents.push(document);
        Ok(self.documents.len() - 1)
    }

    pub fn document(&self, index: usize) -> Option<&TranslationDocument> {
        self.documents.get(index)
    }

    pub fn documents(&self) -> &[TranslationDocument] {
        &self.documents
    }

    /// Add `key` to every entry's file with that entry's value.
    ///
    /// All target files are opened and checked before any of them is edited, so a
    /// missing or unparsable translation object leaves every document untouched.
    pub fn add_translations(&mut self, key: &str, entries: &[TranslationEntry]) -> Result<(), EditError> {
        let mut targets = Vec::with_capacity(entries.len());
        for entry in entries {
            let idx = self.open(&entry.file.path)?;
            let document = &self.documents[idx];
            if !document.has_translation_object(&self.settings) {
                return Err(EditError::MissingTranslationObject {
                    language: document.file().language.clone(),
                });
            }
            targets.push((idx, entry.value.as_str()));
        }

        for (idx, value) in targets {
            self.documents[idx].insert_translation(&self.settings, key, value)?;
        }
        debug!(key, files = entries.len(), "staged translations");
        Ok(())
    }

    /// Persist every modified document. Returns the number of files written.
    pub fn commit_all(mut self) -> Result<usize, EditError> {
        let mut written = 0;
        for document in self.documents.iter_mut().filter(|doc| doc.is_modified()) {
            document.save()?;
            info!(path = %document.file().path.display(), "saved translation file");
            written += 1;
        }
        Ok(written)
    }
}

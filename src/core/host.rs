//! The editor seam.
//!
//! Workflows never talk to a terminal or an editor directly; every interaction
//! (prompts, pickers, the active selection, the clipboard, notifications) goes
//! through [`Host`]. The CLI provides a terminal implementation and
//! [`ScriptedHost`] answers from pre-recorded values.

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::translation::TranslationKey;

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Warning(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Info(msg) | Notification::Warning(msg) => msg,
        }
    }
}

/// A free-text question asked of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    TranslationKey,
    TranslationValue {
        language: String,
        relative_path: String,
    },
}

impl Prompt {
    pub fn text(&self) -> String {
        match self {
            Prompt::TranslationKey => "Translation Key".to_string(),
            Prompt::TranslationValue { relative_path, .. } => format!("File: {relative_path}"),
        }
    }

    pub fn placeholder(&self) -> String {
        match self {
            Prompt::TranslationKey => "component.segment-1.segment-2".to_string(),
            Prompt::TranslationValue { language, .. } => format!("Translation for {language}"),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text(), self.placeholder())
    }
}

/// Everything a workflow needs from the surrounding editor.
///
/// `None` from a prompt or picker means the user dismissed it.
pub trait Host {
    /// Path of the document the user is editing, if any.
    fn active_document(&self) -> Option<PathBuf>;

    /// Non-empty selected text in the active document.
    fn selected_text(&self) -> Option<String>;

    /// Let the user choose any number of `items`; returns their indices.
    fn pick_files(&mut self, items: &[String]) -> Option<Vec<usize>>;

    fn input(&mut self, prompt: &Prompt) -> Option<String>;

    /// Let the user choose one key; returns its index.
    fn pick_key(&mut self, keys: &[TranslationKey]) -> Option<usize>;

    /// Replace the active selection. Returns false when there is no editor to write into.
    fn replace_selection(&mut self, text: &str) -> bool;

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;

    fn notify(&mut self, notification: Notification);
}

/// A [`Host`] that answers from pre-recorded values and records what it is asked.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    active_document: Option<PathBuf>,
    selection: Option<String>,
    key: Option<String>,
    values: HashMap<String, String>,
    picked_files: Option<Vec<usize>>,
    picked_key: Option<String>,

    pub prompts: Vec<Prompt>,
    pub replacements: Vec<String>,
    pub clipboard: Option<String>,
    pub notifications: Vec<Notification>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_document(mut self, path: impl AsRef<Path>) -> Self {
        self.active_document = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_selection(mut self, text: impl Into<String>) -> Self {
        self.selection = Some(text.into());
        self
    }

    /// Answer for the translation key prompt.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Answer for the value prompt of `language`. Unanswered languages dismiss the prompt.
    pub fn with_value(mut self, language: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(language.into(), value.into());
        self
    }

    /// Answer for the file picker. Without one every offered file is selected.
    pub fn with_picked_files(mut self, indices: Vec<usize>) -> Self {
        self.picked_files = Some(indices);
        self
    }

    /// Key name chosen from the key picker.
    pub fn with_picked_key(mut self, name: impl Into<String>) -> Self {
        self.picked_key = Some(name.into());
        self
    }
}

impl Host for ScriptedHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active_document.clone()
    }

    fn selected_text(&self) -> Option<String> {
        self.selection.clone().filter(|text| !text.is_empty())
    }

    fn pick_files(&mut self, items: &[String]) -> Option<Vec<usize>> {
        match &self.picked_files {
            Some(indices) => Some(indices.iter().copied().filter(|idx| *idx < items.len()).collect()),
            None => Some((0..items.len()).collect()),
        }
    }

    fn input(&mut self, prompt: &Prompt) -> Option<String> {
        self.prompts.push(prompt.clone());
        match prompt {
            Prompt::TranslationKey => self.key.clone(),
            Prompt::TranslationValue { language, .. } => self.values.get(language).cloned(),
        }
    }

    fn pick_key(&mut self, keys: &[TranslationKey]) -> Option<usize> {
        let wanted = self.picked_key.as_deref()?;
        keys.iter().position(|key| key.name == wanted)
    }

    fn replace_selection(&mut self, text: &str) -> bool {
        if self.active_document.is_none() {
            return false;
        }
        self.replacements.push(text.to_string());
        true
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

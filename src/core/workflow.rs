//! The two user-facing commands, expressed against the [`Host`] port.

use std::{path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use tracing::debug;

use super::{
    error::EditError,
    host::{Host, Notification, Prompt},
    translation::{EditSession, EditSettings, TranslationDocument, TranslationEntry},
    workspace::{Workspace, find_nearest_translation_files},
};
use crate::config::{Config, load_config};

static KEY_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)%KEY%").unwrap());

pub const NO_FILES_MESSAGE: &str = "No translation files found";
pub const NO_KEYS_MESSAGE: &str = "No translation keys found";
pub const CANCELLED_MESSAGE: &str = "Cancelled command";
pub const COPIED_MESSAGE: &str = "Key copied to clipboard";

/// Configuration and workspace shared by one command invocation.
pub struct CommandContext {
    pub config: Config,
    pub settings: EditSettings,
    pub workspace: Workspace,
}

impl CommandContext {
    /// Load the configuration for `root` and prepare the workspace.
    pub fn new(root: &Path) -> Result<Self> {
        let loaded = load_config(root)?;
        Self::with_config(root, loaded.config)
    }

    pub fn with_config(root: &Path, config: Config) -> Result<Self> {
        let settings = EditSettings::from_config(&config)?;
        let workspace = Workspace::new(root, &config)?;
        Ok(Self {
            config,
            settings,
            workspace,
        })
    }
}

/// How the key reached the user after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDelivery {
    /// Written over the editor selection.
    Inserted,
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `delivery` is `None` when the key came from the selection and was left in place.
    Completed {
        key: String,
        delivery: Option<KeyDelivery>,
    },
    Cancelled,
    NothingFound,
    /// A translation file was malformed; the message was shown to the user.
    Failed(String),
}

/// Replace every `%KEY%` (any case) in `pattern` with `key`, literally.
///
/// ```
/// use translately::core::workflow::transform_key_for_insertion;
///
/// assert_eq!(transform_key_for_insertion("t('%key%')", "a.b"), "t('a.b')");
/// ```
pub fn transform_key_for_insertion(pattern: &str, key: &str) -> String {
    KEY_PLACEHOLDER_RE.replace_all(pattern, NoExpand(key)).into_owned()
}

/// Create a key in every nearby translation file with a value per language.
pub fn create_translation(ctx: &CommandContext, host: &mut dyn Host) -> Result<CommandOutcome> {
    let files = find_nearest_translation_files(&ctx.workspace, host);
    if files.is_empty() {
        host.notify(Notification::Warning(NO_FILES_MESSAGE.to_string()));
        return Ok(CommandOutcome::NothingFound);
    }

    let selection = host.selected_text();
    let key = match selection.clone().or_else(|| host.input(&Prompt::TranslationKey)) {
        Some(key) if !key.is_empty() => key,
        _ => return Ok(cancelled(host)),
    };

    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let prompt = Prompt::TranslationValue {
            language: file.language.clone(),
            relative_path: ctx.workspace.relative_path_of(&file.path),
        };
        let Some(value) = host.input(&prompt) else {
            return Ok(cancelled(host));
        };
        entries.push(TranslationEntry { file, value });
    }

    let mut session = EditSession::new(ctx.settings.clone());
    if let Err(e) = session.add_translations(&key, &entries) {
        return report_content_error(host, e);
    }
    let written = session.commit_all()?;
    debug!(key = %key, written, "created translation");

    let delivery = match selection {
        Some(_) => None,
        None => Some(deliver_key(ctx, host, &key)?),
    };
    Ok(CommandOutcome::Completed { key, delivery })
}

/// Let the user pick an existing key from the nearest translation file and insert it.
pub fn insert_existing_translation_key(ctx: &CommandContext, host: &mut dyn Host) -> Result<CommandOutcome> {
    let files = find_nearest_translation_files(&ctx.workspace, host);
    let Some(file) = files.first() else {
        host.notify(Notification::Warning(NO_FILES_MESSAGE.to_string()));
        return Ok(CommandOutcome::NothingFound);
    };

    let document = match TranslationDocument::open(&file.path) {
        Ok(document) => document,
        Err(e) => return report_content_error(host, e),
    };
    let keys = document.keys(&ctx.settings);
    if keys.is_empty() {
        host.notify(Notification::Warning(NO_KEYS_MESSAGE.to_string()));
        return Ok(CommandOutcome::NothingFound);
    }

    let Some(key) = host.pick_key(&keys).and_then(|idx| keys.get(idx)) else {
        return Ok(cancelled(host));
    };
    let key = key.name.clone();
    let delivery = deliver_key(ctx, host, &key)?;
    Ok(CommandOutcome::Completed {
        key,
        delivery: Some(delivery),
    })
}

/// Put the key into the editor, or on the clipboard when there is no editor.
fn deliver_key(ctx: &CommandContext, host: &mut dyn Host, key: &str) -> Result<KeyDelivery> {
    let text = transform_key_for_insertion(&ctx.config.key_insert_pattern, key);
    if host.replace_selection(&text) {
        return Ok(KeyDelivery::Inserted);
    }
    host.copy_to_clipboard(&text)
        .context("Failed to copy key to clipboard")?;
    host.notify(Notification::Info(COPIED_MESSAGE.to_string()));
    Ok(KeyDelivery::Copied)
}

fn cancelled(host: &mut dyn Host) -> CommandOutcome {
    host.notify(Notification::Info(CANCELLED_MESSAGE.to_string()));
    CommandOutcome::Cancelled
}

/// Show content errors to the user; storage errors abort the command.
fn report_content_error(host: &mut dyn Host, err: EditError) -> Result<CommandOutcome> {
    if !err.is_content_error() {
        return Err(err.into());
    }
    let message = err.to_string();
    host.notify(Notification::Warning(message.clone()));
    Ok(CommandOutcome::Failed(message))
}

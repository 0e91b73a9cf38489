use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{
    host::Host,
    translation::TranslationFile,
    utils::GlobSet,
};
use crate::{config::Config, utils::match_strings};

/// The project tree translation files are discovered in.
pub struct Workspace {
    root: PathBuf,
    include: GlobSet,
    exclude: GlobSet,
}

impl Workspace {
    pub fn new(root: &Path, config: &Config) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve project root: {}", root.display()))?;
        Ok(Self {
            root,
            include: config.include_globs()?,
            exclude: config.exclude_globs()?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every file matching the include globs and none of the exclude globs, sorted.
    pub fn find_translation_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| {
                entry.file_name() != ".git"
                    && !(entry.depth() > 0
                        && entry.file_type().is_dir()
                        && self.exclude.matches_dir(&self.relative_path_of(entry.path())))
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Cannot access path: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                let relative = self.relative_path_of(entry.path());
                self.include.matches(&relative) && !self.exclude.matches(&relative)
            })
            .map(|entry| entry.into_path())
            .collect();

        files.sort();
        debug!(count = files.len(), root = %self.root.display(), "found translation files");
        files
    }

    /// Root-relative path with `/` separators; the path itself when outside the root.
    pub fn relative_path_of(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Candidates sharing the longest path prefix with `document`, ties included.
pub fn nearest_to(files: &[PathBuf], document: &Path) -> Vec<PathBuf> {
    let document = document.to_string_lossy();
    let scores: Vec<usize> = files
        .iter()
        .map(|file| match_strings(&document, &file.to_string_lossy()))
        .collect();

    let Some(best) = scores.iter().copied().max() else {
        return Vec::new();
    };
    files
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score == best)
        .map(|(file, _)| file.clone())
        .collect()
}

/// Resolve the translation files a command works on.
///
/// With an active document the candidates closest to it are used; otherwise the
/// user picks from all candidates. Empty when nothing matches or the pick is dismissed.
pub fn find_nearest_translation_files(workspace: &Workspace, host: &mut dyn Host) -> Vec<TranslationFile> {
    let files = workspace.find_translation_files();
    if files.is_empty() {
        return Vec::new();
    }

    let selected = match host.active_document() {
        Some(document) => {
            let document = if document.is_relative() {
                workspace.root().join(document)
            } else {
                document
            };
            nearest_to(&files, &document)
        }
        None => {
            let items: Vec<String> = files.iter().map(|f| workspace.relative_path_of(f)).collect();
            host.pick_files(&items)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|idx| files.get(idx).cloned())
                .collect()
        }
    };

    selected.into_iter().map(TranslationFile::new).collect()
}

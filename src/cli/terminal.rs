//! Terminal implementation of the editor port.
//!
//! Questions are written to stderr and answered on stdin, one line each; end of
//! input dismisses the question. Answers given on the command line are used
//! without asking. There is no editor buffer, so the key is always delivered by
//! printing it to the output writer.

use std::{
    collections::HashMap,
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{
    host::{Host, Notification, Prompt},
    translation::TranslationKey,
};

pub struct TerminalHost<R, W> {
    input: R,
    output: W,
    active_document: Option<PathBuf>,
    selection: Option<String>,
    key: Option<String>,
    values: HashMap<String, String>,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            active_document: None,
            selection: None,
            key: None,
            values: HashMap::new(),
        }
    }

    pub fn with_active_document(mut self, path: Option<PathBuf>) -> Self {
        self.active_document = path;
        self
    }

    pub fn with_selection(mut self, selection: Option<String>) -> Self {
        self.selection = selection;
        self
    }

    /// Answer for the key prompt, or the key to pick from the key list.
    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = (String, String)>) -> Self {
        self.values.extend(values);
        self
    }

    /// Read one line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Host for TerminalHost<R, W> {
    fn active_document(&self) -> Option<PathBuf> {
        self.active_document.clone()
    }

    fn selected_text(&self) -> Option<String> {
        self.selection.clone().filter(|text| !text.is_empty())
    }

    fn pick_files(&mut self, items: &[String]) -> Option<Vec<usize>> {
        eprintln!("{}", "Translation files:".bold());
        for (idx, item) in items.iter().enumerate() {
            eprintln!("  {:>3}  {}", idx + 1, item);
        }
        eprint!("{} ", "Select files (numbers, empty for all):".bold());

        let line = self.read_line()?;
        if line.trim().is_empty() {
            return Some((0..items.len()).collect());
        }
        let picked = parse_selection(&line, items.len());
        Some(picked)
    }

    fn input(&mut self, prompt: &Prompt) -> Option<String> {
        let preset = match prompt {
            Prompt::TranslationKey => self.key.clone(),
            Prompt::TranslationValue { language, .. } => self.values.get(language).cloned(),
        };
        if preset.is_some() {
            return preset;
        }

        eprint!(
            "{} {} ",
            prompt.text().bold(),
            format!("[{}]", prompt.placeholder()).dimmed()
        );
        self.read_line()
    }

    fn pick_key(&mut self, keys: &[TranslationKey]) -> Option<usize> {
        if let Some(wanted) = &self.key {
            return keys.iter().position(|key| &key.name == wanted);
        }

        let name_width = keys
            .iter()
            .map(|key| UnicodeWidthStr::width(key.name.as_str()))
            .max()
            .unwrap_or(0);
        for (idx, key) in keys.iter().enumerate() {
            let padding = name_width - UnicodeWidthStr::width(key.name.as_str());
            eprintln!(
                "  {:>3}  {}{}  {}",
                idx + 1,
                key.name.bold(),
                " ".repeat(padding),
                key.value.dimmed()
            );
        }
        eprint!("{} ", "Select key:".bold());

        let line = self.read_line()?;
        let number: usize = line.trim().parse().ok()?;
        number.checked_sub(1).filter(|idx| *idx < keys.len())
    }

    fn replace_selection(&mut self, _text: &str) -> bool {
        false
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write key to output")
    }

    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::Info(msg) => eprintln!("{} {}", "info:".bold().cyan(), msg),
            Notification::Warning(msg) => eprintln!("{} {}", "warning:".bold().yellow(), msg),
        }
    }
}

/// Parse 1-based numbers separated by commas or whitespace; out-of-range entries are dropped.
fn parse_selection(line: &str, len: usize) -> Vec<usize> {
    let mut picked: Vec<usize> = line
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter_map(|part| part.parse::<usize>().ok())
        .filter_map(|number| number.checked_sub(1))
        .filter(|idx| *idx < len)
        .collect();
    picked.sort_unstable();
    picked.dedup();
    picked
}

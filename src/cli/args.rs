//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `create`: Create a translation key in the nearest translation files
//! - `insert-key`: Pick an existing key and insert it
//! - `init`: Initialize translately configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Create(cmd)) => cmd.common.verbose,
            Some(Command::InsertKey(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by the editing commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root to search for translation files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Key to create (prompted for when omitted)
    pub key: Option<String>,

    /// Value for one language, e.g. --value enUS=Hello (prompted for when omitted)
    #[arg(long = "value", value_name = "LANG=TEXT", value_parser = parse_language_value)]
    pub values: Vec<(String, String)>,

    /// Document being edited; narrows the translation files to the nearest ones
    #[arg(long)]
    pub active: Option<PathBuf>,

    /// Text selected in the active document, used as the key as-is
    #[arg(long)]
    pub selection: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InsertKeyCommand {
    /// Key to pick (prompted for when omitted)
    #[arg(long)]
    pub key: Option<String>,

    /// Document being edited; narrows the translation files to the nearest ones
    #[arg(long)]
    pub active: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a translation key with a value per language
    Create(CreateCommand),
    /// Pick an existing translation key and insert or print it
    InsertKey(InsertKeyCommand),
    /// Initialize a new .translatelyrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

fn parse_language_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((language, value)) if !language.is_empty() => {
            Ok((language.to_string(), value.to_string()))
        }
        _ => Err(format!("expected LANG=TEXT, got '{raw}'")),
    }
}

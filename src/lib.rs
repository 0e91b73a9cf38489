//! Translately - translation object editor for TypeScript i18n files
//!
//! Translately finds the per-language translation files (`i18n/enUS.ts`,
//! `i18n/deDE.ts`, ...) closest to the file being edited, reads the keys of
//! their exported translation objects, and inserts new keys in sorted position
//! while keeping comments, quoting and formatting intact.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (terminal host and commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation editing engine and workflows
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod utils;

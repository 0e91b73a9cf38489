//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the translation editor to AI assistants as MCP tools. Tool calls run
//! the same workflows as the CLI, answered by a scripted host built from the
//! call parameters.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TranslatelyMcpServer, run_server};

//! Core editing engine.
//!
//! ```text
//! Workspace ──find──▶ TranslationFile ──open──▶ TranslationDocument
//!                                                 ├─ keys()              read path
//!                                                 └─ insert_translation  write path
//! workflow::{create_translation, insert_existing_translation_key}
//!     drive the above through the Host port
//! ```

pub mod error;
pub mod host;
pub mod parsers;
pub mod translation;
pub mod utils;
pub mod workflow;
pub mod workspace;

pub use error::EditError;
pub use host::{Host, Notification, Prompt, ScriptedHost};
pub use workflow::{CommandContext, CommandOutcome, KeyDelivery};
pub use workspace::Workspace;

//! Utility functions and helpers for the translation editor.
//!
//! ## Module Structure
//!
//! - `glob_matcher`: Workspace glob matching with `{a,b}` alternation

pub mod glob_matcher;

pub use glob_matcher::*;

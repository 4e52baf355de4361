//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Confirmation prompts
//! - [`output`] - Output respecting `--quiet`
//!
//! Commands take their writer and prompter as arguments so tests can
//! capture output and script answers.

pub mod output;
pub mod prompts;

//! Channel layer for prompt detection on an interactive shell.
//!
//! This module handles reading shell output until the device prompt
//! reappears, with ANSI stripping and tail-only pattern search.

mod buffer;
mod patterns;
mod shell;

pub use buffer::{DEFAULT_SEARCH_DEPTH, PatternBuffer};
pub use patterns::{DEFAULT_PROMPT, PromptPattern, compile_prompt_pattern};
pub use shell::ShellChannel;

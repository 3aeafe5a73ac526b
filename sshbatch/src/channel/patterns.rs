//! Prompt pattern used to detect the end of a command's output.

use std::fmt;

use regex::bytes::Regex;

use crate::error::ChannelError;

/// Prompt alternation matching Huawei/H3C style `<sysname>` and
/// `[sysname]` prompts.
pub const DEFAULT_PROMPT: &str = "<|>|]";

/// A compiled prompt pattern shared by every host and command in a run.
///
/// A match anywhere in the searched output ends a read, so a `[Y/N]:`
/// confirmation question hands control back just like a prompt does.
#[derive(Clone)]
pub struct PromptPattern {
    source: String,
    regex: Regex,
}

impl PromptPattern {
    /// Compile a prompt pattern string.
    pub fn new(pattern: &str) -> Result<Self, ChannelError> {
        let regex = compile_prompt_pattern(pattern)?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The regex used for matching.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether `data` contains a prompt.
    pub fn is_match(&self, data: &[u8]) -> bool {
        self.regex.is_match(data)
    }
}

impl Default for PromptPattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_PROMPT.to_string(),
            regex: compile_prompt_pattern(DEFAULT_PROMPT).expect("default prompt is valid"),
        }
    }
}

impl fmt::Debug for PromptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PromptPattern").field(&self.source).finish()
    }
}

impl fmt::Display for PromptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compile a prompt pattern string.
pub fn compile_prompt_pattern(pattern: &str) -> Result<Regex, ChannelError> {
    Ok(Regex::new(pattern)?)
}

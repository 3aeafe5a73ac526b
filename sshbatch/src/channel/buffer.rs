//! Output buffer with tail-only prompt search.
//!
//! Device output can be large (full routing tables, long configs). Prompts
//! only ever appear at the end, so pattern checks are limited to the last
//! `search_depth` bytes instead of rescanning everything on each chunk.

use std::fmt;

use regex::bytes::Regex;
use vte::{Parser, Perform};

/// Default number of trailing bytes searched for a prompt.
pub const DEFAULT_SEARCH_DEPTH: usize = 1000;

/// Accumulates shell output and checks its tail for a prompt.
pub struct PatternBuffer {
    /// Escape sequence parser. Its state survives between chunks, so a
    /// sequence split across two packets is still dropped whole.
    parser: Parser,

    text: Printable,

    /// How many bytes from the end to search.
    search_depth: usize,
}

/// Keeps printable characters and line feeds, drops everything else.
struct Printable(Vec<u8>);

impl Perform for Printable {
    fn print(&mut self, c: char) {
        let mut utf8 = [0; 4];
        self.0.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    fn execute(&mut self, byte: u8) {
        if byte == b'\n' {
            self.0.push(byte);
        }
    }
}

impl PatternBuffer {
    /// Create a buffer that searches the last `search_depth` bytes.
    pub fn new(search_depth: usize) -> Self {
        Self {
            parser: Parser::new(),
            text: Printable(Vec::with_capacity(4096)),
            search_depth,
        }
    }

    /// Append raw channel data, dropping ANSI escape sequences.
    pub fn extend(&mut self, data: &[u8]) {
        self.parser.advance(&mut self.text, data);
    }

    /// Search the tail of the buffer for `pattern`.
    ///
    /// Offsets in the returned match are relative to the start of the
    /// searched region, not the whole buffer.
    pub fn search_tail(&self, pattern: &Regex) -> Option<regex::bytes::Match<'_>> {
        pattern.find(self.tail())
    }

    /// Whether the tail contains a match for `pattern`.
    pub fn tail_contains(&self, pattern: &Regex) -> bool {
        self.search_tail(pattern).is_some()
    }

    fn tail(&self) -> &[u8] {
        let start = self.text.0.len().saturating_sub(self.search_depth);
        &self.text.0[start..]
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.text.0)
    }

    /// Buffer contents as a string (lossy UTF-8).
    pub fn as_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text.0)
    }

    pub fn len(&self) -> usize {
        self.text.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.0.is_empty()
    }
}

impl fmt::Debug for PatternBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternBuffer")
            .field("len", &self.len())
            .field("search_depth", &self.search_depth)
            .finish()
    }
}

impl Default for PatternBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

//! Password filtering module
//!
//! Provides the per-line predicates used by the filtering tools.

use crate::encoding::{CARRIAGE_RETURN, LINE_FEED};

/// Longest password kept by the length filter, in characters
///
/// Some guessers (John the Ripper Markov mode, PCFG) cannot handle longer
/// passwords.
pub const MAX_PASSWORD_LENGTH: usize = 16;

/// Check if a character is printable ASCII (space through tilde)
#[inline]
pub fn is_printable_ascii_char(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Check if every character of a password is printable ASCII
///
/// CR and LF are accepted as well. Terminators are stripped before this
/// check runs, so they only show up here as a CR embedded in an LF-delimited
/// line.
#[inline]
pub fn is_printable_ascii(word: &str) -> bool {
    word.chars()
        .all(|c| is_printable_ascii_char(c) || c == LINE_FEED || c == CARRIAGE_RETURN)
}

/// Printable ASCII filter
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFilter;

impl AsciiFilter {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        is_printable_ascii(word)
    }
}

/// Maximum length filter
#[derive(Debug, Clone, Copy)]
pub struct LengthFilter {
    max_length: usize,
}

impl LengthFilter {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        // Fast byte-length check first for ASCII-only words
        if word.is_ascii() {
            word.len() <= self.max_length
        } else {
            word.chars().count() <= self.max_length
        }
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new(MAX_PASSWORD_LENGTH)
    }
}

//! Withcount format parsing
//!
//! Lines produced by `sort | uniq -c` carry an occurrence count in front of
//! the value:
//!
//! ```text
//!   290729 123456
//!    79076 12345
//!    59462 password
//! ```
//!
//! [`WithcountParser`] splits such a line into a [`CountedEntry`]. A value
//! that itself starts with digits followed by whitespace is indistinguishable
//! from the count prefix and is split at the first whitespace after the
//! leading digits, the same way the producer's format reads.

use regex::Regex;
use std::num::ParseIntError;
use thiserror::Error;

/// Leading whitespace, the digit run and the whitespace that ends it
pub const PREFIX_PATTERN: &str = r"^\s*[0-9]*\s";

/// Leading whitespace and the digit run
pub const COUNT_PATTERN: &str = r"^\s*[0-9]*";

/// Why a line could not be split into count and password
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("no count prefix followed by whitespace")]
    MissingPrefix,

    #[error("count is empty")]
    MissingCount,

    #[error("invalid count '{count}': {source}")]
    InvalidCount {
        count: String,
        #[source]
        source: ParseIntError,
    },
}

/// A password together with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedEntry<'a> {
    pub count: u64,
    pub password: &'a str,
}

/// Parser for withcount lines
#[derive(Debug, Clone)]
pub struct WithcountParser {
    prefix: Regex,
    count: Regex,
}

impl WithcountParser {
    pub fn new() -> anyhow::Result<Self> {
        let prefix = Regex::new(PREFIX_PATTERN)
            .map_err(|e| anyhow::anyhow!("Invalid prefix pattern '{}': {}", PREFIX_PATTERN, e))?;
        let count = Regex::new(COUNT_PATTERN)
            .map_err(|e| anyhow::anyhow!("Invalid count pattern '{}': {}", COUNT_PATTERN, e))?;

        Ok(Self { prefix, count })
    }

    /// Split a terminator-stripped line into count and password
    pub fn parse<'a>(&self, line: &'a str) -> Result<CountedEntry<'a>, EntryError> {
        let prefix = self.prefix.find(line).ok_or(EntryError::MissingPrefix)?;

        // The prefix is anchored, so its first occurrence is at the start
        let password = &line[prefix.end()..];

        let raw_count = self
            .count
            .find(line)
            .map(|m| m.as_str())
            .unwrap_or_default();
        let count = parse_count(raw_count)?;

        Ok(CountedEntry { count, password })
    }
}

/// Parse the count substring: spaces removed, surrounding whitespace ignored
fn parse_count(raw: &str) -> Result<u64, EntryError> {
    let digits = raw.replace(' ', "");
    let digits = digits.trim();

    if digits.is_empty() {
        return Err(EntryError::MissingCount);
    }

    digits.parse().map_err(|source| EntryError::InvalidCount {
        count: digits.to_string(),
        source,
    })
}

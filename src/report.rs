//! Run reporting module
//!
//! Per-run statistics and the messages written to standard error.

use colored::*;
use std::fmt;

/// Processing statistics for a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Lines read from the input
    pub total_lines: u64,
    /// Lines that passed the filter or parsed as withcount entries
    pub matched_lines: u64,
    /// Lines dropped by a filter
    pub removed_lines: u64,
    /// Malformed withcount lines
    pub error_lines: u64,
    /// Lines written to the output
    pub output_lines: u64,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self) {
        self.total_lines += 1;
    }

    pub fn add_match(&mut self) {
        self.matched_lines += 1;
    }

    pub fn add_removed(&mut self) {
        self.removed_lines += 1;
    }

    pub fn add_error(&mut self) {
        self.error_lines += 1;
    }

    pub fn add_output(&mut self, count: u64) {
        self.output_lines += count;
    }

    pub fn log_summary(&self) {
        log::debug!(
            "lines read: {}, matched: {}, removed: {}, errors: {}, written: {}",
            self.total_lines,
            self.matched_lines,
            self.removed_lines,
            self.error_lines,
            self.output_lines
        );
    }
}

/// End-of-run message of a filtering tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Printable ASCII filter
    NonAscii { removed: u64 },
    /// Length filter
    TooLong { removed: u64 },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::NonAscii { removed } => {
                write!(f, "Done. I removed {} lines/non-ASCII passwords.", removed)
            }
            Summary::TooLong { removed } => {
                write!(f, "Done. I removed {} passwords.", removed)
            }
        }
    }
}

/// Diagnostic line for a withcount line that could not be parsed
pub fn format_malformed(line: &str) -> String {
    format!("Error: {}", line)
}

/// Print a fatal error message
pub fn print_error(text: &str) {
    eprintln!("{} {}", "✖".red(), text.red());
}

//! # Wordlist Utils
//!
//! Small tools for cleaning password wordlists before feeding them to a
//! guesser.
//!
//! ## Tools
//!
//! - **ascii-filter**: keep passwords made of printable ASCII only
//! - **length-filter**: keep passwords of 16 characters or less
//! - **reverse-withcount**: turn `uniq -c` output back into one line per
//!   occurrence
//!
//! ## Usage
//!
//! ```bash
//! # Clean a wordlist
//! ascii-filter rockyou-all.txt > rockyou-all-ascii.txt
//! length-filter rockyou-all-ascii.txt > rockyou-all-ascii-length.txt
//!
//! # Undo "sort | uniq -c", then shuffle
//! reverse-withcount rockyou-withcount.txt | shuf > rockyou-all.txt
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_utils::processor::{Processor, ProcessorConfig, Tool};
//! use std::path::Path;
//!
//! let processor = Processor::new(ProcessorConfig::new(Tool::LengthFilter)).unwrap();
//! let stats = processor.process(Path::new("wordlist.txt")).unwrap();
//! println!("removed {}", stats.removed_lines);
//! ```

pub mod cli;
pub mod encoding;
pub mod filter;
pub mod input;
pub mod output;
pub mod processor;
pub mod report;
pub mod withcount;

pub use cli::Args;
pub use processor::{Processor, ProcessorConfig, Tool};

//! Core processing engine
//!
//! Reads one wordlist line by line, applies the tool's per-line action and
//! writes results to standard output and diagnostics to standard error.

use crate::encoding::{decode_line, strip_terminator, InvalidBytePolicy, ASCII_FILTER_POLICY, TEXT_POLICY};
use crate::filter::{AsciiFilter, LengthFilter, MAX_PASSWORD_LENGTH};
use crate::input::{open_input, LineEndings, LineReader, DEFAULT_BUFFER_SIZE};
use crate::output::OutputWriter;
use crate::report::{format_malformed, ProcessingStats, Summary};
use crate::withcount::WithcountParser;

use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// The three wordlist tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Keep printable ASCII passwords only
    AsciiFilter,
    /// Keep passwords of at most [`MAX_PASSWORD_LENGTH`] characters
    LengthFilter,
    /// Expand `uniq -c` output back into repeated lines
    ReverseWithcount,
}

impl Tool {
    /// Name of the executable
    pub fn bin_name(&self) -> &'static str {
        match self {
            Tool::AsciiFilter => "ascii-filter",
            Tool::LengthFilter => "length-filter",
            Tool::ReverseWithcount => "reverse-withcount",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Tool::AsciiFilter => "Keep only passwords made of printable ASCII characters",
            Tool::LengthFilter => "Keep only passwords of 16 characters or less",
            Tool::ReverseWithcount => "Expand \"uniq -c\" output back into one line per occurrence",
        }
    }

    pub fn long_about(&self) -> &'static str {
        match self {
            Tool::AsciiFilter => {
                r#"Keep only passwords made of printable ASCII characters.

Bytes that are not valid UTF-8 are dropped before the check. Lines containing
control characters (TAB, VT, FF, ...) or any non-ASCII character are removed.
The number of removed lines is reported on stderr.

EXAMPLE:
    ascii-filter rockyou-all.txt > rockyou-all-ascii.txt"#
            }
            Tool::LengthFilter => {
                r#"Keep only passwords of 16 characters or less.

Some guessers (John the Ripper Markov mode, PCFG) have problems with very
long passwords. The number of removed lines is reported on stderr.

EXAMPLE:
    length-filter rockyou-all-ascii.txt > rockyou-all-ascii-length.txt"#
            }
            Tool::ReverseWithcount => {
                r#"Expand "uniq -c" output back into one line per occurrence.

Each input line "<count> <password>" produces <count> copies of <password>.
Lines that cannot be parsed are reported on stderr as "Error: <line>".
The output keeps input order and should be shuffled afterwards.

EXAMPLE:
    reverse-withcount rockyou-withcount.txt | shuf > rockyou-all.txt"#
            }
        }
    }

    pub fn line_endings(&self) -> LineEndings {
        match self {
            Tool::AsciiFilter => LineEndings::LineFeed,
            Tool::LengthFilter | Tool::ReverseWithcount => LineEndings::Universal,
        }
    }

    pub fn decode_policy(&self) -> InvalidBytePolicy {
        match self {
            Tool::AsciiFilter => ASCII_FILTER_POLICY,
            Tool::LengthFilter | Tool::ReverseWithcount => TEXT_POLICY,
        }
    }

    /// End-of-run message, if the tool prints one
    pub fn summary(&self, stats: &ProcessingStats) -> Option<Summary> {
        match self {
            Tool::AsciiFilter => Some(Summary::NonAscii {
                removed: stats.removed_lines,
            }),
            Tool::LengthFilter => Some(Summary::TooLong {
                removed: stats.removed_lines,
            }),
            Tool::ReverseWithcount => None,
        }
    }
}

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub tool: Tool,
    pub max_length: usize,
    pub buffer_size: usize,
}

impl ProcessorConfig {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            max_length: MAX_PASSWORD_LENGTH,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// What happens to each decoded line
enum LineAction {
    Ascii(AsciiFilter),
    Length(LengthFilter),
    Expand(WithcountParser),
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    action: LineAction,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> anyhow::Result<Self> {
        let action = match config.tool {
            Tool::AsciiFilter => LineAction::Ascii(AsciiFilter::new()),
            Tool::LengthFilter => LineAction::Length(LengthFilter::new(config.max_length)),
            Tool::ReverseWithcount => LineAction::Expand(WithcountParser::new()?),
        };

        Ok(Self { config, action })
    }

    /// Process a file, writing to stdout and stderr
    pub fn process(&self, input: &Path) -> anyhow::Result<ProcessingStats> {
        let reader = open_input(input, self.config.buffer_size)?;
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();

        self.process_stream(reader, &mut stdout, &mut stderr)
    }

    /// Process a stream
    ///
    /// Results go to `output`; malformed-line reports and the final summary
    /// go to `diagnostics`.
    pub fn process_stream<R, W, E>(
        &self,
        input: R,
        output: &mut W,
        diagnostics: &mut E,
    ) -> anyhow::Result<ProcessingStats>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let tool = self.config.tool;
        let policy = tool.decode_policy();
        let mut lines = LineReader::new(input, tool.line_endings());
        let mut out = OutputWriter::new(output, self.config.buffer_size);
        let mut stats = ProcessingStats::new();
        let mut buf = Vec::with_capacity(4096);

        loop {
            buf.clear();
            if !lines.read_line(&mut buf).context("Failed to read input")? {
                break;
            }
            stats.add_line();

            let decoded = decode_line(&buf, policy);
            let line = strip_terminator(&decoded);

            match &self.action {
                LineAction::Ascii(filter) => {
                    keep_if(filter.matches(line), line, &mut out, &mut stats)?;
                }
                LineAction::Length(filter) => {
                    keep_if(filter.matches(line), line, &mut out, &mut stats)?;
                }
                LineAction::Expand(parser) => match parser.parse(line) {
                    Ok(entry) => {
                        stats.add_match();
                        out.write_repeated(entry.password, entry.count)
                            .context("Failed to write output")?;
                        stats.add_output(entry.count);
                    }
                    Err(e) => {
                        log::debug!("Line {}: {}", stats.total_lines, e);
                        stats.add_error();
                        writeln!(diagnostics, "{}", format_malformed(line))
                            .context("Failed to write diagnostics")?;
                    }
                },
            }
        }

        out.flush().context("Failed to write output")?;
        stats.log_summary();

        if let Some(summary) = tool.summary(&stats) {
            writeln!(diagnostics, "{}", summary).context("Failed to write diagnostics")?;
        }

        Ok(stats)
    }
}

/// Write `line` if it passed the filter, otherwise count it as removed
fn keep_if<W: Write>(
    keep: bool,
    line: &str,
    out: &mut OutputWriter<W>,
    stats: &mut ProcessingStats,
) -> anyhow::Result<()> {
    if keep {
        stats.add_match();
        out.write_line(line).context("Failed to write output")?;
        stats.add_output(1);
    } else {
        stats.add_removed();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    struct Run {
        stdout: String,
        stderr: String,
        stats: ProcessingStats,
    }

    fn run(tool: Tool, input: &[u8]) -> Run {
        let processor = Processor::new(ProcessorConfig::new(tool)).unwrap();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let stats = processor
            .process_stream(Cursor::new(input.to_vec()), &mut stdout, &mut stderr)
            .unwrap();

        Run {
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
            stats,
        }
    }

    #[test]
    fn test_ascii_keeps_plain_password() {
        let run = run(Tool::AsciiFilter, b"hunter2\n");
        assert_eq!(run.stdout, "hunter2\n");
        assert_eq!(run.stderr, "Done. I removed 0 lines/non-ASCII passwords.\n");
    }

    #[test]
    fn test_ascii_removes_accented_password() {
        let run = run(Tool::AsciiFilter, "café\n".as_bytes());
        assert_eq!(run.stdout, "");
        assert_eq!(run.stderr, "Done. I removed 1 lines/non-ASCII passwords.\n");
        assert_eq!(run.stats.removed_lines, 1);
    }

    #[test]
    fn test_ascii_drops_invalid_bytes_before_check() {
        // The invalid bytes vanish, the rest is plain ASCII
        let run = run(Tool::AsciiFilter, b"pass\xff\xfeword\r\n");
        assert_eq!(run.stdout, "password\n");
        assert_eq!(run.stats.removed_lines, 0);
    }

    #[test]
    fn test_ascii_mixed_input() {
        let input = b"password\r\n123456\ttab\nqwerty\n\x0bvt\n\nlast";
        let run = run(Tool::AsciiFilter, input);
        assert_eq!(run.stdout, "password\nqwerty\n\nlast\n");
        assert_eq!(run.stderr, "Done. I removed 2 lines/non-ASCII passwords.\n");
        assert_eq!(run.stats.total_lines, 6);
    }

    #[test]
    fn test_ascii_embedded_carriage_return_is_kept() {
        let run = run(Tool::AsciiFilter, b"a\rb\n");
        assert_eq!(run.stdout, "a\rb\n");
        assert_eq!(run.stats.removed_lines, 0);
    }

    #[test]
    fn test_ascii_strips_repeated_terminators() {
        let run = run(Tool::AsciiFilter, b"abc\r\r\n");
        assert_eq!(run.stdout, "abc\n");
    }

    #[test]
    fn test_length_filter() {
        let run = run(Tool::LengthFilter, b"thisis17characters\nshort\n");
        assert_eq!(run.stdout, "short\n");
        assert_eq!(run.stderr, "Done. I removed 1 passwords.\n");
    }

    #[test]
    fn test_length_filter_universal_newlines() {
        let run = run(Tool::LengthFilter, b"mac\rwindows\r\nunix\n");
        assert_eq!(run.stdout, "mac\nwindows\nunix\n");
        assert_eq!(run.stats.total_lines, 3);
    }

    #[test]
    fn test_length_filter_counts_characters() {
        let input = format!("{}\n{}\n", "ü".repeat(16), "ü".repeat(17));
        let run = run(Tool::LengthFilter, input.as_bytes());
        assert_eq!(run.stdout, format!("{}\n", "ü".repeat(16)));
        assert_eq!(run.stats.removed_lines, 1);
    }

    #[test]
    fn test_length_filter_is_idempotent() {
        let first = run(Tool::LengthFilter, b"a\nabcdefghijklmnopq\nabcdefghijklmnop\n\n");
        let second = run(Tool::LengthFilter, first.stdout.as_bytes());
        assert_eq!(second.stdout, first.stdout);
        assert_eq!(second.stderr, "Done. I removed 0 passwords.\n");
    }

    #[test]
    fn test_reverse_withcount_expands() {
        let run = run(Tool::ReverseWithcount, b"  3 hello\n0 world\n");
        assert_eq!(run.stdout, "hello\nhello\nhello\n");
        assert_eq!(run.stderr, "");
        assert_eq!(run.stats.output_lines, 3);
    }

    #[test]
    fn test_reverse_withcount_twelve() {
        let run = run(Tool::ReverseWithcount, b"   12 iloveyou\n");
        assert_eq!(run.stdout, "iloveyou\n".repeat(12));
    }

    #[test]
    fn test_reverse_withcount_reports_malformed_and_continues() {
        let run = run(Tool::ReverseWithcount, b"abc\n 2 x\n\n");
        assert_eq!(run.stdout, "x\nx\n");
        assert_eq!(run.stderr, "Error: abc\nError: \n");
        assert_eq!(run.stats.error_lines, 2);
    }

    #[test]
    fn test_reverse_withcount_keeps_order() {
        let run = run(Tool::ReverseWithcount, b"2 b\r\n1 a\r3 c");
        assert_eq!(run.stdout, "b\nb\na\nc\nc\nc\n");
    }

    #[test]
    fn test_process_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1 x\n").unwrap();

        let processor = Processor::new(ProcessorConfig::new(Tool::ReverseWithcount)).unwrap();
        let stats = processor.process(file.path()).unwrap();
        assert_eq!(stats.output_lines, 1);
    }

    #[test]
    fn test_process_missing_file() {
        let processor = Processor::new(ProcessorConfig::new(Tool::LengthFilter)).unwrap();
        assert!(processor.process(Path::new("/nonexistent/list.txt")).is_err());
    }

    #[test]
    fn test_tool_metadata() {
        assert_eq!(Tool::AsciiFilter.bin_name(), "ascii-filter");
        assert_eq!(Tool::AsciiFilter.line_endings(), LineEndings::LineFeed);
        assert_eq!(Tool::LengthFilter.line_endings(), LineEndings::Universal);
        assert!(Tool::ReverseWithcount.summary(&ProcessingStats::new()).is_none());
    }
}

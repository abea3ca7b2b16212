//! Input reading module
//!
//! Opens the wordlist and splits it into physical lines without loading the
//! whole file into memory.

use anyhow::Context;
use bytesize::ByteSize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default buffer size for reading and writing (64KB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Which byte sequences terminate a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEndings {
    /// Only LF ends a line; a CR before it stays in the raw line
    LineFeed,
    /// LF, CR and CRLF each end a line and are normalized to a single LF
    Universal,
}

/// Open `path` for buffered reading
pub fn open_input(path: &Path, buffer_size: usize) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    if let Ok(metadata) = file.metadata() {
        log::debug!("Reading {} ({})", path.display(), ByteSize(metadata.len()));
    }

    Ok(BufReader::with_capacity(buffer_size, file))
}

/// Splits a byte stream into lines
pub struct LineReader<R> {
    inner: R,
    endings: LineEndings,
    /// Set after a CR terminator so a directly following LF is swallowed
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, endings: LineEndings) -> Self {
        Self {
            inner,
            endings,
            skip_lf: false,
        }
    }

    /// Append the next line to `buf`, terminator included
    ///
    /// Returns `false` at end of input. In [`LineEndings::LineFeed`] mode the
    /// raw bytes are kept as read; in [`LineEndings::Universal`] mode the
    /// terminator is replaced by a single `\n`. The last line may lack a
    /// terminator in either mode.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        match self.endings {
            LineEndings::LineFeed => Ok(self.inner.read_until(b'\n', buf)? > 0),
            LineEndings::Universal => self.read_universal(buf),
        }
    }

    fn read_universal(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        let mut read_any = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(read_any);
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            read_any = true;

            match memchr::memchr2(b'\n', b'\r', available) {
                Some(i) => {
                    buf.extend_from_slice(&available[..i]);
                    buf.push(b'\n');
                    self.skip_lf = available[i] == b'\r';
                    self.inner.consume(i + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }
}

//! Output management module
//!
//! Handles writing passwords with buffering for performance.

use std::io::{self, BufWriter, Write};

/// Buffered line writer
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
    bytes_written: u64,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer
    pub fn new(inner: W, buffer_size: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, inner),
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Write a line followed by `\n`
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Write the same line `count` times
    pub fn write_repeated(&mut self, line: &str, count: u64) -> io::Result<()> {
        for _ in 0..count {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Flush the buffer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

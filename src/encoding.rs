//! Line decoding module
//!
//! Turns raw line bytes into text. Input is always treated as UTF-8; what
//! happens to byte sequences that are not valid UTF-8 is decided by an
//! explicit [`InvalidBytePolicy`].

use bstr::ByteSlice;
use std::borrow::Cow;

/// What to do with bytes that do not form valid UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBytePolicy {
    /// Silently discard invalid subsequences
    Drop,
    /// Substitute U+FFFD for each invalid subsequence
    Replace,
}

/// Policy used by the printable ASCII filter
pub const ASCII_FILTER_POLICY: InvalidBytePolicy = InvalidBytePolicy::Drop;

/// Policy used by the text-mode tools (length filter, withcount expander)
pub const TEXT_POLICY: InvalidBytePolicy = InvalidBytePolicy::Replace;

/// Line terminator characters
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';

/// Decode a line according to `policy`
///
/// Valid UTF-8 is always borrowed; only lines containing invalid bytes are
/// copied.
pub fn decode_line(bytes: &[u8], policy: InvalidBytePolicy) -> Cow<'_, str> {
    if let Ok(s) = bytes.to_str() {
        return Cow::Borrowed(s);
    }

    match policy {
        InvalidBytePolicy::Replace => bytes.to_str_lossy(),
        InvalidBytePolicy::Drop => {
            let mut decoded = String::with_capacity(bytes.len());
            for chunk in ByteSlice::utf8_chunks(bytes) {
                decoded.push_str(chunk.valid());
            }
            Cow::Owned(decoded)
        }
    }
}

/// Remove the whole trailing run of CR and LF characters
#[inline]
pub fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(&[CARRIAGE_RETURN, LINE_FEED][..])
}

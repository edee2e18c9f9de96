//! Newline-delimited record scanning.

use tickbar_types::Location;

/// Record terminator.
const NEWLINE: u8 = b'\n';

/// A single non-empty line of the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Where the line starts.
    pub location: Location,
    /// Line contents, without the terminator.
    pub bytes: &'a [u8],
}

/// Iterator over the non-empty lines of a buffer.
///
/// Lines are separated by `\n`. The last line may or may not be terminated.
/// Zero-length lines are skipped but still counted, so reported line numbers
/// match what an editor shows. No other trimming is performed; a `\r` before
/// the newline stays part of the record.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    buffer: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Lines<'a> {
    /// Creates a scanner over `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            pos: 0,
            line: 0,
        }
    }

    /// Returns the number of bytes not yet scanned.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.buffer.len() {
            let buffer = self.buffer;
            let start = self.pos;
            let rest = &buffer[start..];
            let len = rest
                .iter()
                .position(|&b| b == NEWLINE)
                .unwrap_or(rest.len());

            // Skip the terminator; an unterminated last line ends the buffer.
            self.pos = (start + len + 1).min(self.buffer.len());
            self.line += 1;

            if len > 0 {
                return Some(Record {
                    location: Location::new(self.line, start),
                    bytes: &rest[..len],
                });
            }
        }
        None
    }
}

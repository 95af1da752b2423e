//! Reading decimal values from a text file.
//!
//! [`ValueReader`] splits its input into whitespace-delimited tokens and
//! parses each one as an `f32`. Blank lines are skipped, and a line holding
//! several tokens yields them in order. The first line is normally a header
//! and is discarded with [`ValueReader::skip_header`].

use std::io::BufRead;

use log::debug;

use crate::error::{Error, Result};

/// A single value parsed from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    /// The parsed single-precision value.
    pub value: f32,

    /// 1-based line number the value was read from.
    pub line: usize,
}

/// Token reader over a buffered text source.
///
/// # Example
///
/// ```
/// use f32bin::ValueReader;
///
/// let text = "value\n1.5\n2.25\n";
/// let mut reader = ValueReader::new(text.as_bytes());
/// reader.skip_header()?;
///
/// let values: Vec<f32> = reader
///     .map(|v| v.map(|v| v.value))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(values, vec![1.5, 2.25]);
/// # Ok::<(), f32bin::Error>(())
/// ```
pub struct ValueReader<R> {
    reader: R,

    /// Raw bytes of the most recent line.
    raw: Vec<u8>,

    /// Decoded text of the current line.
    line: String,

    /// Byte offset of the next unread token in `line`.
    pos: usize,

    /// 1-based number of the current line (0 before anything was read).
    line_number: usize,

    /// Set once end of input or a malformed token has been seen.
    finished: bool,
}

impl<R: BufRead> ValueReader<R> {
    /// Create a reader positioned at the start of the input.
    pub fn new(reader: R) -> Self {
        ValueReader {
            reader,
            raw: Vec::new(),
            line: String::new(),
            pos: 0,
            line_number: 0,
            finished: false,
        }
    }

    /// Read and discard the header line.
    ///
    /// Returns `false` when the input is empty. The header's content is
    /// never inspected.
    pub fn skip_header(&mut self) -> Result<bool> {
        let found = self.read_line()?;
        // Anything left on the header line is not data.
        self.pos = self.line.len();

        if found {
            debug!("Skipped header line: {:?}", self.line.trim_end());
        } else {
            debug!("Input is empty, no header line");
            self.finished = true;
        }

        Ok(found)
    }

    /// Get the number of the line most recently read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next value.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// - [`Error::Malformed`] if the next token is not a valid float. The
    ///   reader is finished afterwards and yields no further values.
    /// - [`Error::Io`] if reading fails.
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        loop {
            if self.finished {
                return Ok(None);
            }

            let rest = &self.line[self.pos..];
            let start = self.pos + (rest.len() - rest.trim_start().len());

            if start >= self.line.len() {
                if !self.read_line()? {
                    self.finished = true;
                }
                continue;
            }

            let end = self.line[start..]
                .find(char::is_whitespace)
                .map_or(self.line.len(), |offset| start + offset);
            self.pos = end;

            let token = &self.line[start..end];
            return match token.parse::<f32>() {
                Ok(value) => Ok(Some(Value {
                    value,
                    line: self.line_number,
                })),
                Err(_) => {
                    self.finished = true;
                    Err(Error::malformed(self.line_number, token))
                }
            };
        }
    }

    /// Load the next line into the buffer. Returns `false` at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.raw.clear();
        self.line.clear();
        self.pos = 0;

        if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
            return Ok(false);
        }

        // Invalid UTF-8 cannot form a number; it surfaces as a malformed token.
        self.line.push_str(&String::from_utf8_lossy(&self.raw));
        self.line_number += 1;

        Ok(true)
    }
}

impl<R: BufRead> Iterator for ValueReader<R> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().transpose()
    }
}

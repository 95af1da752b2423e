//! Text to binary conversion.
//!
//! This module provides [`Converter`] for turning a header-plus-values text
//! file into flat `f32` records, and [`ConvertConfig`] for its options.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, warn};

use crate::byte_order::ByteOrder;
use crate::error::{Error, Result};
use crate::reader::ValueReader;
use crate::writer::RecordWriter;

/// How to treat a token that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Treat the first malformed token as the end of the data.
    ///
    /// Everything after it, including valid values, is ignored. Existing
    /// pipelines rely on this, so it is the default.
    #[default]
    Lenient,

    /// Fail the whole conversion on the first malformed token.
    Strict,
}

/// Configuration for a conversion.
///
/// # Example
///
/// ```
/// use f32bin::{ByteOrder, ConvertConfig, ParseMode};
///
/// let config = ConvertConfig::new()
///     .mode(ParseMode::Strict)
///     .byte_order(ByteOrder::Little);
/// assert_eq!(config.mode, ParseMode::Strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Handling of malformed tokens.
    pub mode: ParseMode,

    /// Byte order of the output records.
    pub byte_order: ByteOrder,
}

impl ConvertConfig {
    /// Create a configuration with default values (lenient, native order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse mode.
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(ParseMode::Strict)` when `strict` is true.
    pub fn strict(self, strict: bool) -> Self {
        self.mode(if strict { ParseMode::Strict } else { ParseMode::Lenient })
    }

    /// Set the output byte order.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

/// Where a lenient conversion stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// 1-based line number of the malformed token.
    pub line: usize,

    /// The malformed token.
    pub token: String,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Number of records written.
    pub values: usize,

    /// Size of the written records in bytes.
    pub bytes: u64,

    /// Byte order the records were written in.
    pub byte_order: ByteOrder,

    /// Set when a malformed token ended the data early.
    pub truncation: Option<Truncation>,
}

impl ConversionSummary {
    /// Check whether input was left unread because of a malformed token.
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Converts text value files into binary `f32` records.
///
/// # Example
///
/// ```
/// use f32bin::{ConvertConfig, Converter};
///
/// let converter = Converter::new(ConvertConfig::default());
/// let mut output = Vec::new();
///
/// let summary = converter.convert("value\n1.5\n2.25\n-3\n".as_bytes(), &mut output)?;
/// assert_eq!(summary.values, 3);
/// assert_eq!(summary.bytes, 12);
/// assert_eq!(output.len(), 12);
/// # Ok::<(), f32bin::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter with the given configuration.
    pub fn new(config: ConvertConfig) -> Self {
        Converter { config }
    }

    /// Convert text from `input` into records written to `output`.
    ///
    /// The first line of `input` is discarded. Records are flushed before
    /// returning.
    ///
    /// # Errors
    ///
    /// - [`Error::Malformed`] in strict mode when a token is not a number
    /// - [`Error::Io`] if reading or writing fails
    pub fn convert<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<ConversionSummary> {
        let mut reader = ValueReader::new(input);
        let mut writer = RecordWriter::new(output, self.config.byte_order);

        reader.skip_header()?;

        let mut truncation = None;

        loop {
            match reader.next_value() {
                Ok(Some(value)) => writer.write_value(value.value)?,
                Ok(None) => break,
                Err(Error::Malformed { line, token }) if self.config.mode == ParseMode::Lenient => {
                    warn!(
                        "Malformed value {:?} on line {}, ignoring the rest of the input",
                        token, line
                    );
                    truncation = Some(Truncation { line, token });
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let summary = ConversionSummary {
            values: writer.count(),
            bytes: writer.bytes_written(),
            byte_order: self.config.byte_order,
            truncation,
        };

        writer.finish()?;

        debug!(
            "Converted {} values ({} lines read)",
            summary.values,
            reader.line_number()
        );

        Ok(summary)
    }

    /// Convert the file at `input` into a new file at `output`.
    ///
    /// `output` is created or truncated only after `input` has been opened.
    /// If a strict conversion fails on malformed data, the incomplete output
    /// file is removed.
    ///
    /// # Errors
    ///
    /// - [`Error::InputOpen`] if `input` cannot be opened
    /// - [`Error::OutputOpen`] if `output` cannot be created
    /// - any error from [`convert`](Self::convert)
    pub fn convert_files(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionSummary> {
        let input = input.as_ref();
        let output = output.as_ref();

        let reader = open_input(input)?;
        let file = File::create(output).map_err(|e| Error::output_open(output, e))?;

        debug!("Converting {} to {}", input.display(), output.display());

        match self.convert(reader, file) {
            Err(e) if e.is_malformed() => {
                if let Err(remove_err) = fs::remove_file(output) {
                    warn!(
                        "Failed to remove incomplete output {}: {}",
                        output.display(),
                        remove_err
                    );
                }
                Err(e)
            }
            other => other,
        }
    }

    /// Parse the file at `input` without writing anything.
    ///
    /// Returns the summary a real conversion would produce.
    pub fn dry_run(&self, input: impl AsRef<Path>) -> Result<ConversionSummary> {
        let reader = open_input(input.as_ref())?;
        self.convert(reader, io::sink())
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::input_open(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_with(config: ConvertConfig, text: &str) -> Result<(ConversionSummary, Vec<u8>)> {
        let mut output = Vec::new();
        let summary = Converter::new(config).convert(text.as_bytes(), &mut output)?;
        Ok((summary, output))
    }

    #[test]
    fn test_config_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.mode, ParseMode::Lenient);
        assert_eq!(config.byte_order, ByteOrder::Native);
    }

    #[test]
    fn test_config_strict_flag() {
        assert_eq!(ConvertConfig::new().strict(true).mode, ParseMode::Strict);
        assert_eq!(ConvertConfig::new().strict(false).mode, ParseMode::Lenient);
    }

    #[test]
    fn test_lenient_records_truncation() {
        let (summary, output) =
            convert_with(ConvertConfig::default(), "h\n1\n2\nbad\n3\n4\n").unwrap();

        assert_eq!(summary.values, 2);
        assert_eq!(output.len(), 8);
        assert_eq!(
            summary.truncation,
            Some(Truncation {
                line: 4,
                token: "bad".to_string()
            })
        );
        assert!(summary.is_truncated());
    }

    #[test]
    fn test_strict_fails_on_malformed() {
        let err = convert_with(ConvertConfig::new().strict(true), "h\n1\nbad\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_strict_accepts_clean_input() {
        let (summary, _) = convert_with(ConvertConfig::new().strict(true), "h\n1\n2\n").unwrap();
        assert_eq!(summary.values, 2);
        assert!(!summary.is_truncated());
    }

    #[test]
    fn test_header_only() {
        let (summary, output) = convert_with(ConvertConfig::default(), "value\n").unwrap();
        assert_eq!(summary.values, 0);
        assert_eq!(summary.bytes, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_byte_order_is_reported() {
        let config = ConvertConfig::new().byte_order(ByteOrder::Big);
        let (summary, output) = convert_with(config, "h\n1\n").unwrap();
        assert_eq!(summary.byte_order, ByteOrder::Big);
        assert_eq!(output, vec![0x3f, 0x80, 0x00, 0x00]);
    }
}

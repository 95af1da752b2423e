//! Binary record writer.
//!
//! [`RecordWriter`] appends 4-byte `f32` records to any [`Write`]
//! implementation, counting what it has written.

use std::io::{BufWriter, Write};

use crate::byte_order::{ByteOrder, RECORD_SIZE};
use crate::error::Result;

/// Writer of flat binary `f32` records.
///
/// Records are buffered internally; call [`finish`](Self::finish) to flush
/// them and get the underlying writer back. Dropping the writer without
/// finishing still attempts a flush but ignores errors.
///
/// # Example
///
/// ```
/// use f32bin::{ByteOrder, RecordWriter};
///
/// let mut writer = RecordWriter::new(Vec::new(), ByteOrder::Big);
/// writer.write_value(1.0)?;
/// writer.write_value(-2.0)?;
/// assert_eq!(writer.count(), 2);
///
/// let bytes = writer.finish()?;
/// assert_eq!(bytes, vec![0x3f, 0x80, 0, 0, 0xc0, 0, 0, 0]);
/// # Ok::<(), f32bin::Error>(())
/// ```
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,

    /// Byte order used for every record.
    byte_order: ByteOrder,

    /// Count of records written.
    count: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer encoding records in the given byte order.
    pub fn new(inner: W, byte_order: ByteOrder) -> Self {
        RecordWriter {
            inner: BufWriter::new(inner),
            byte_order,
            count: 0,
        }
    }

    /// Get the byte order of written records.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Get the number of records written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get the number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        (self.count * RECORD_SIZE) as u64
    }

    /// Append one record.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if the underlying writer fails.
    pub fn write_value(&mut self, value: f32) -> Result<()> {
        self.inner.write_all(&self.byte_order.encode(value))?;
        self.count += 1;
        Ok(())
    }

    /// Append a slice of records in order.
    pub fn write_all_values(&mut self, values: &[f32]) -> Result<()> {
        for &value in values {
            self.write_value(value)?;
        }
        Ok(())
    }

    /// Flush buffered records and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_records() {
        let mut writer = RecordWriter::new(Vec::new(), ByteOrder::Native);
        assert_eq!(writer.count(), 0);

        writer.write_all_values(&[1.5, 2.25, -3.0]).unwrap();
        assert_eq!(writer.count(), 3);
        assert_eq!(writer.bytes_written(), 12);

        let bytes = writer.finish().unwrap();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..4], &1.5f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &(-3.0f32).to_ne_bytes());
    }

    #[test]
    fn test_little_endian_layout() {
        let mut writer = RecordWriter::new(Vec::new(), ByteOrder::Little);
        writer.write_value(1.0).unwrap();
        assert_eq!(writer.byte_order(), ByteOrder::Little);
        assert_eq!(writer.finish().unwrap(), vec![0x00, 0x00, 0x80, 0x3f]);
    }

    #[test]
    fn test_empty_writer_produces_nothing() {
        let writer = RecordWriter::new(Vec::new(), ByteOrder::Native);
        assert!(writer.finish().unwrap().is_empty());
    }
}

//! Reading binary record files back into values.

use std::fs;
use std::path::Path;

use crate::byte_order::{ByteOrder, RECORD_SIZE};
use crate::error::{Error, Result};

/// Decode a buffer of records.
///
/// # Errors
///
/// [`Error::InvalidLength`] if `bytes` does not hold a whole number of
/// records.
///
/// # Example
///
/// ```
/// use f32bin::{decode_records, ByteOrder};
///
/// let values = decode_records(&[0x3f, 0x80, 0, 0], ByteOrder::Big)?;
/// assert_eq!(values, vec![1.0]);
/// # Ok::<(), f32bin::Error>(())
/// ```
pub fn decode_records(bytes: &[u8], order: ByteOrder) -> Result<Vec<f32>> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(Error::InvalidLength { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| order.decode([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Read a whole record file.
pub fn read_records(path: impl AsRef<Path>, order: ByteOrder) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::input_open(path, e))?;
    decode_records(&bytes, order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert!(decode_records(&[], ByteOrder::Native).unwrap().is_empty());
    }

    #[test]
    fn test_decode_partial_record() {
        let err = decode_records(&[0, 0, 0, 0, 1], ByteOrder::Little).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { len: 5 }));
    }

    #[test]
    fn test_decode_little_endian() {
        let bytes = [0x00, 0x00, 0xc0, 0x3f, 0x00, 0x00, 0x40, 0xc0];
        assert_eq!(
            decode_records(&bytes, ByteOrder::Little).unwrap(),
            vec![1.5, -3.0]
        );
    }
}

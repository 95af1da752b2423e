//! Byte order of binary records.
//!
//! Records are written in the host's native order unless a fixed order is
//! requested, so files stay readable on machines of the other endianness.

use std::fmt;

/// Size in bytes of one output record.
pub const RECORD_SIZE: usize = 4;

/// Byte order used to encode `f32` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Whatever the current host uses.
    #[default]
    Native,

    /// Least significant byte first.
    Little,

    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Encode a value into a record.
    pub fn encode(&self, value: f32) -> [u8; RECORD_SIZE] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    /// Decode a record back into a value.
    pub fn decode(&self, bytes: [u8; RECORD_SIZE]) -> f32 {
        match self {
            ByteOrder::Native => f32::from_ne_bytes(bytes),
            ByteOrder::Little => f32::from_le_bytes(bytes),
            ByteOrder::Big => f32::from_be_bytes(bytes),
        }
    }

    /// Resolve `Native` to the concrete order of the host.
    pub const fn resolved(&self) -> ByteOrder {
        match self {
            ByteOrder::Native if cfg!(target_endian = "big") => ByteOrder::Big,
            ByteOrder::Native => ByteOrder::Little,
            other => *other,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Native => write!(f, "native"),
            ByteOrder::Little => write!(f, "little-endian"),
            ByteOrder::Big => write!(f, "big-endian"),
        }
    }
}

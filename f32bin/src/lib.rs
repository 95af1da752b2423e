//! # f32bin
//!
//! Convert text value files into flat binary files of 32-bit floats.
//!
//! The input is a text file whose first line is a header, followed by one
//! decimal value per line. The output is a contiguous sequence of 4-byte
//! `f32` records with no header or metadata, ready to be memory-mapped or
//! read in one call by numerical tools.
//!
//! ## Quick Start
//!
//! ```no_run
//! use f32bin::{Converter, ConvertConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new(ConvertConfig::default());
//!     let summary = converter.convert_files("samples.csv", "samples.bin")?;
//!
//!     println!("Wrote {} values ({} bytes)", summary.values, summary.bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Malformed Input
//!
//! By default the first token that is not a number ends the data and the
//! rest of the file is ignored ([`ParseMode::Lenient`]). Use
//! [`ParseMode::Strict`] to fail instead.
//!
//! ## Byte Order
//!
//! Records use the host's native byte order unless [`ByteOrder::Little`] or
//! [`ByteOrder::Big`] is configured.

#![deny(missing_docs)]

// Modules
mod byte_order;
mod convert;
mod decode;
mod error;
mod reader;
mod writer;

// Public exports
pub use byte_order::{ByteOrder, RECORD_SIZE};
pub use convert::{ConversionSummary, ConvertConfig, Converter, ParseMode, Truncation};
pub use decode::{decode_records, read_records};
pub use error::{Error, Result};
pub use reader::{Value, ValueReader};
pub use writer::RecordWriter;

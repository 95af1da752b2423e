//! Command-line argument definitions using clap derive macros.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use f32bin::ByteOrder;

/// Convert a text value file to a flat binary file of 32-bit floats.
///
/// The first line of INPUT is a header and is discarded. Every following
/// line holds one decimal value, written to OUTPUT as a 4-byte float.
#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(author, version)]
#[command(override_usage = "convert INPUT OUTPUT")]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Input text file (header line, then one value per line)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output binary file (created or overwritten)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    // ========================================================================
    // Parsing
    // ========================================================================
    /// Fail on the first line that is not a number
    ///
    /// By default a malformed line ends the data and everything after it
    /// is ignored.
    #[arg(long)]
    pub strict: bool,

    // ========================================================================
    // Output Format
    // ========================================================================
    /// Byte order of the written floats
    #[arg(long, value_enum, value_name = "ORDER", default_value = "native")]
    pub byte_order: ByteOrderArg,

    /// Parse the input and report what would be written, without writing
    #[arg(long)]
    pub dry_run: bool,

    // ========================================================================
    // Output Control
    // ========================================================================
    /// Show detailed progress and information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Byte order of output records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ByteOrderArg {
    /// Byte order of this machine
    Native,
    /// Little-endian
    Little,
    /// Big-endian
    Big,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Native => ByteOrder::Native,
            ByteOrderArg::Little => ByteOrder::Little,
            ByteOrderArg::Big => ByteOrder::Big,
        }
    }
}

impl Args {
    /// Validate argument combinations.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be used together".to_string());
        }

        // Creating the output would truncate the input before it is read
        if self.input == self.output {
            return Err(format!(
                "Input and output must be different files, got '{}' for both",
                self.input.display()
            ));
        }

        Ok(())
    }
}

/// Example usage shown in --help.
const EXAMPLES: &str = r#"
EXAMPLES:
    # Convert with the legacy contract (stop at the first bad line)
    convert samples.csv samples.bin

    # Reject files with malformed lines
    convert --strict samples.csv samples.bin

    # Write little-endian floats regardless of the host
    convert --byte-order little samples.csv samples.bin

    # Count values without writing anything
    convert --dry-run samples.csv samples.bin
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, output: &str) -> Args {
        Args {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            strict: false,
            byte_order: ByteOrderArg::Native,
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(args("in.csv", "out.bin").validate().is_ok());
    }

    #[test]
    fn test_validate_same_file() {
        let err = args("data.csv", "data.csv").validate().unwrap_err();
        assert!(err.contains("different files"));
    }

    #[test]
    fn test_validate_verbose_and_quiet() {
        let mut a = args("in.csv", "out.bin");
        a.verbose = true;
        a.quiet = true;
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_parse_flags() {
        let a = Args::try_parse_from([
            "convert",
            "--strict",
            "--byte-order",
            "big",
            "in.csv",
            "out.bin",
        ])
        .unwrap();

        assert!(a.strict);
        assert_eq!(ByteOrder::from(a.byte_order), ByteOrder::Big);
        assert_eq!(a.input, PathBuf::from("in.csv"));
    }

    #[test]
    fn test_long_help_uses_doc_comment() {
        use clap::CommandFactory;

        let help = Args::command().render_long_help().to_string();
        assert!(help.contains("Convert a text value file to a flat binary file of 32-bit floats"));
        assert!(help.contains("The first line of INPUT is a header"));
    }

    #[test]
    fn test_parse_missing_output() {
        let err = Args::try_parse_from(["convert", "in.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

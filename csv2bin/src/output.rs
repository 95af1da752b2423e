//! Console reporting for the convert command.

use colored::Colorize;

use f32bin::ConversionSummary;

use crate::cli::Args;

/// Set up `log` output on stderr.
///
/// `RUST_LOG` wins when set. Otherwise verbose mode shows debug messages
/// and the default shows errors only, keeping truncation warnings silent.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

/// Print an error and its causes to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}: {}", "Error".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {}: {}", "caused by".red(), cause);
    }
}

/// Stdout reporting gated by `--quiet` and `--verbose`.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
    quiet: bool,
}

impl Reporter {
    /// Create a reporter honouring the output flags in `args`.
    pub fn new(args: &Args) -> Self {
        Reporter {
            verbose: args.verbose,
            quiet: args.quiet,
        }
    }

    /// Print the one-line result of a run unless quiet.
    pub fn result(&self, line: &str) {
        if !self.quiet {
            println!("{}", line);
        }
    }

    /// Print a progress note in verbose mode.
    pub fn note(&self, msg: &str) {
        if self.verbose {
            println!("{}: {}", "info".blue(), msg);
        }
    }

    /// Print the details of a summary in verbose mode.
    pub fn details(&self, summary: &ConversionSummary) {
        if !self.verbose {
            return;
        }

        let rows = [
            ("Records", group_digits(summary.values)),
            ("Bytes", group_digits(summary.bytes as usize)),
            ("Byte order", summary.byte_order.to_string()),
            (
                "Stopped early",
                match summary.truncation {
                    Some(ref t) => format!("line {} ('{}')", t.line, t.token),
                    None => "no".to_string(),
                },
            ),
        ];

        for (key, value) in rows {
            let label = format!("{:<14}", format!("{}:", key));
            println!("  {}{}", label.as_str().dimmed(), value);
        }
    }
}

/// Render a count with comma thousands separators.
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;

    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );

    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(12345), "12,345");
        assert_eq!(group_digits(1234567), "1,234,567");
    }
}

//! Dry-run validation command.

use anyhow::Result;
use colored::Colorize;

use f32bin::Converter;

use crate::cli::Args;
use crate::commands::convert::build_config;
use crate::output::Reporter;

/// Run the validate (dry-run) command.
pub fn run(args: &Args) -> Result<()> {
    let reporter = Reporter::new(args);

    reporter.note(&format!(
        "{} reading {} (no files will be written)",
        "Dry run".yellow(),
        args.input.display()
    ));

    let summary = Converter::new(build_config(args)).dry_run(&args.input)?;

    reporter.result(&format!(
        "Dry run: {} values ({} bytes) would be written to {}",
        summary.values,
        summary.bytes,
        args.output.display()
    ));

    reporter.details(&summary);

    Ok(())
}

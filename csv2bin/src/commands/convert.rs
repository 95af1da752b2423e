//! Main conversion command.

use std::time::Instant;

use anyhow::Result;

use f32bin::{ConvertConfig, Converter};

use crate::cli::Args;
use crate::output::Reporter;

/// Run the convert command.
pub fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();
    let reporter = Reporter::new(args);

    reporter.note(&format!(
        "Converting {} to {}",
        args.input.display(),
        args.output.display()
    ));

    let converter = Converter::new(build_config(args));

    // Library errors already name the offending path
    let summary = converter.convert_files(&args.input, &args.output)?;

    reporter.result(&format!(
        "Wrote {} values to {} ({} bytes)",
        summary.values,
        args.output.display(),
        summary.bytes
    ));

    reporter.details(&summary);
    reporter.note(&format!("Finished in {:.2?}", start_time.elapsed()));

    Ok(())
}

/// Build ConvertConfig from command line arguments.
pub(crate) fn build_config(args: &Args) -> ConvertConfig {
    ConvertConfig::new()
        .strict(args.strict)
        .byte_order(args.byte_order.into())
}

//! convert - Turn a text value file into a flat binary file of f32 records.
//!
//! The first line of the input is a header and is skipped. Each following
//! value is written as a 4-byte float, in input order.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use cli::Args;

fn main() {
    // Parse command line arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => exit_with_usage(err),
    };

    output::init_logging(args.verbose);

    // Run the appropriate command
    if let Err(e) = run(args) {
        output::print_error(&e);
        std::process::exit(1);
    }
}

/// Report a command line error and exit with status 1.
///
/// `--help` and `--version` keep clap's normal handling.
fn exit_with_usage(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

/// Main dispatch function.
fn run(args: Args) -> Result<()> {
    // Validate arguments
    args.validate().map_err(|e| anyhow::anyhow!("{}", e))?;

    // Dispatch to appropriate command
    if args.dry_run {
        commands::validate::run(&args)
    } else {
        commands::convert::run(&args)
    }
}

// CLI module
// Command-line interface, argument parsing and the top-level run loop

mod args;

pub use args::CliArgs;

use crate::core::ProcessSummary;
use crate::io::{write_statement_csv, OperationReader};
use crate::types::AccountError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints its message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run a script as described by the arguments and write the statement
///
/// Builds the accounts, replays the script and writes one CSV row per
/// account (primary first) to `output`.
///
/// # Errors
///
/// - `InvalidArgument` if an account argument is rejected
/// - `FileNotFound` / `IoError` if the script cannot be read or output fails
/// - in strict mode, the first rejected operation
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<ProcessSummary, AccountError> {
    let mut processor = args.to_processor()?;
    let reader = OperationReader::open(&args.input_file)?;

    let summary = processor.run_script(reader, args.strict)?;
    write_statement_csv(&processor.accounts(), output)?;

    Ok(summary)
}

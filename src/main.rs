//! Bank Account CLI
//!
//! Replays an operation script against an account and prints the resulting
//! balances as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --email owner@bank.com --balance 100.00 operations.csv > statement.csv
//! cargo run -- --email owner@bank.com --counterparty-email friend@bank.com operations.csv
//! RUST_LOG=debug cargo run -- --strict --email owner@bank.com operations.csv
//! ```
//!
//! Rejected operations are logged to stderr and skipped unless `--strict` is given.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid account arguments, file not found, strict-mode rejection, etc.)

use bank_account::cli;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    // Output goes to stdout
    let mut output = std::io::stdout();
    match cli::run(&args, &mut output) {
        Ok(summary) => info!(
            applied = summary.applied,
            rejected = summary.rejected,
            "script processed"
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

//! CSV format handling for operation scripts and account statements
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Statement serialization
//!
//! Conversion is pure (no I/O) for easy testing.

use crate::types::{Account, AccountError, OperationRecord, OperationType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the script format with columns: type, amount
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// Type names are case-insensitive. Every operation requires an amount.
/// Precision is not checked here; the account rejects over-precision amounts
/// with its own error.
///
/// # Errors
///
/// Returns `ParseError` (without a line number) for an unknown type, a
/// missing amount or an amount that is not a decimal number.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, AccountError> {
    let op_type = match csv_record.op_type.to_lowercase().as_str() {
        "deposit" => OperationType::Deposit,
        "withdrawal" | "withdraw" => OperationType::Withdrawal,
        "transfer" => OperationType::Transfer,
        _ => {
            return Err(AccountError::parse_error(
                None,
                format!("Invalid operation type: '{}'", csv_record.op_type),
            ))
        }
    };

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim()).map_err(|_| {
                AccountError::parse_error(None, format!("Invalid amount '{}'", amount_str))
            })?
        }
        _ => {
            return Err(AccountError::parse_error(
                None,
                format!("{:?} operation requires an amount", op_type),
            ))
        }
    };

    Ok(OperationRecord { op_type, amount })
}

/// Write account balances to CSV format
///
/// Writes accounts in the given order with columns: email, balance.
/// Balances are always printed with two decimal places.
///
/// # Errors
///
/// Returns `IoError` if writing or flushing fails.
pub fn write_statement_csv(
    accounts: &[&Account],
    output: &mut dyn Write,
) -> Result<(), AccountError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["email", "balance"])
        .map_err(|e| AccountError::IoError {
            message: format!("Failed to write CSV header: {}", e),
        })?;

    for account in accounts {
        writer
            .write_record(&[account.email().to_string(), format!("{:.2}", account.balance())])
            .map_err(|e| AccountError::IoError {
                message: format!("Failed to write account record: {}", e),
            })?;
    }

    writer.flush()?;

    Ok(())
}

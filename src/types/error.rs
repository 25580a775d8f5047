//! Error types for the bank account crate
//!
//! This module defines all error types that can occur while operating on an
//! account or replaying an operation script.
//!
//! # Error Categories
//!
//! - **Argument Errors**: malformed email, malformed amount, missing destination
//! - **Funds Errors**: withdrawal or transfer beyond the current balance
//! - **Arithmetic Errors**: a credit that would overflow the balance
//! - **File I/O and CSV Errors**: only produced by the script layers

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for account operations
///
/// Every account operation returns this type on failure. The entity itself
/// only ever produces `InvalidArgument`, `InsufficientFunds` and
/// `ArithmeticOverflow`; the remaining variants belong to the I/O layers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// A caller-supplied argument was rejected
    ///
    /// Raised for a malformed email, a negative or over-precision amount,
    /// and an absent transfer destination.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// Withdrawal requested for more than the current balance
    ///
    /// The account state is left unchanged.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// A credit would exceed the representable balance range
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Operation script not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable when replaying a script: the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for AccountError {
    fn from(error: std::io::Error) -> Self {
        AccountError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AccountError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AccountError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AccountError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AccountError::FileNotFound { path: path.into() }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        AccountError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Whether this error was produced by the account entity itself
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AccountError::InvalidArgument { .. }
                | AccountError::InsufficientFunds { .. }
                | AccountError::ArithmeticOverflow { .. }
        )
    }
}

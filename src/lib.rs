//! Bank Account Library
//!
//! # Overview
//!
//! A single bank account entity: an owner email and an exact two-decimal
//! balance, with validated deposit, withdraw and transfer operations.
//!
//! ```
//! use bank_account::{Account, AccountError};
//! use rust_decimal::Decimal;
//!
//! let mut source = Account::new("sender@pay.com", Decimal::new(50000, 2)).unwrap();
//! let mut destination = Account::new("receiver@pay.com", Decimal::ZERO).unwrap();
//!
//! source.transfer(Decimal::new(12345, 2), Some(&mut destination)).unwrap();
//! assert_eq!(source.balance(), Decimal::new(37655, 2));
//! assert_eq!(destination.balance(), Decimal::new(12345, 2));
//!
//! let err = source.withdraw(Decimal::new(100000, 2)).unwrap_err();
//! assert!(matches!(err, AccountError::InsufficientFunds { .. }));
//! ```
//!
//! # Architecture
//!
//! - [`types`] - The [`Account`] entity, script operation types and [`AccountError`]
//! - [`core`] - Business logic components:
//!   - [`core::validation`] - Amount and email predicates
//!   - [`core::shared`] - [`SharedAccount`], a mutex-guarded handle for threads
//!   - [`core::processor`] - Replays an operation script against accounts
//! - [`io`] - CSV script reading and statement writing
//! - [`cli`] - CLI arguments parsing

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{
    is_amount_valid, is_email_valid, OperationProcessor, ProcessSummary, SharedAccount,
};
pub use self::io::write_statement_csv;
pub use types::{Account, AccountError, OperationRecord, OperationType};

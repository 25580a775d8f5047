//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `account`: the Account entity
//! - `operation`: script operation types
//! - `error`: error types

pub mod account;
pub mod error;
pub mod operation;

pub use account::Account;
pub use error::AccountError;
pub use operation::{OperationRecord, OperationType};

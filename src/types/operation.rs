//! Operation script types
//!
//! This module defines the operations that can be replayed against an account
//! from a CSV script.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operation types supported by the script processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Credit funds to the primary account
    Deposit,

    /// Debit funds from the primary account
    ///
    /// Rejected when the amount exceeds the primary balance.
    Withdrawal,

    /// Move funds from the primary account to the counterparty
    ///
    /// Rejected with an invalid-argument error when no counterparty is configured.
    Transfer,
}

/// A single parsed script row
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// What to do
    pub op_type: OperationType,

    /// Amount as written in the script, not yet validated against the
    /// two-decimal rule (the account performs that check)
    pub amount: Decimal,
}

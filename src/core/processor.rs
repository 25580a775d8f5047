//! Operation script processing
//!
//! `OperationProcessor` replays script operations against a primary account
//! and an optional counterparty. It adds no rules of its own: every check is
//! made by the `Account` entity, and every rejection is that entity's error.

use crate::io::OperationReader;
use crate::types::{Account, AccountError, OperationRecord, OperationType};
use std::io::Read;
use tracing::{debug, warn};

/// Applies operations to a primary account and an optional counterparty
#[derive(Debug, Clone)]
pub struct OperationProcessor {
    primary: Account,
    counterparty: Option<Account>,
}

/// Outcome counts of a script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Operations that changed account state
    pub applied: usize,
    /// Rows that were rejected (parse errors and account errors)
    pub rejected: usize,
}

impl OperationProcessor {
    pub fn new(primary: Account, counterparty: Option<Account>) -> Self {
        OperationProcessor {
            primary,
            counterparty,
        }
    }

    /// Apply a single operation
    ///
    /// - `Deposit` / `Withdrawal` act on the primary account
    /// - `Transfer` moves funds from the primary to the counterparty; with no
    ///   counterparty configured the account rejects it as an invalid argument
    ///
    /// # Errors
    ///
    /// Any error returned by the underlying account operation, unchanged.
    pub fn process(&mut self, record: &OperationRecord) -> Result<(), AccountError> {
        match record.op_type {
            OperationType::Deposit => self.primary.deposit(record.amount),
            OperationType::Withdrawal => self.primary.withdraw(record.amount),
            OperationType::Transfer => self
                .primary
                .transfer(record.amount, self.counterparty.as_mut()),
        }
    }

    /// Replay a whole script
    ///
    /// Rejected rows are logged and skipped. With `strict` set, the first
    /// rejected row stops the run and its error is returned.
    ///
    /// # Errors
    ///
    /// Only in strict mode: the first parse or account error.
    pub fn run_script<R: Read>(
        &mut self,
        reader: OperationReader<R>,
        strict: bool,
    ) -> Result<ProcessSummary, AccountError> {
        let mut summary = ProcessSummary::default();

        for result in reader {
            let outcome = result.and_then(|record| {
                self.process(&record)?;
                debug!(?record, "operation applied");
                Ok(())
            });

            match outcome {
                Ok(()) => summary.applied += 1,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    if e.is_rejection() {
                        warn!(error = %e, "operation rejected");
                    } else {
                        warn!(error = %e, "malformed row skipped");
                    }
                    summary.rejected += 1;
                }
            }
        }

        Ok(summary)
    }

    pub fn primary(&self) -> &Account {
        &self.primary
    }

    pub fn counterparty(&self) -> Option<&Account> {
        self.counterparty.as_ref()
    }

    /// All accounts, primary first
    pub fn accounts(&self) -> Vec<&Account> {
        std::iter::once(&self.primary)
            .chain(self.counterparty.as_ref())
            .collect()
    }

    pub fn into_accounts(self) -> (Account, Option<Account>) {
        (self.primary, self.counterparty)
    }
}

//! Shared account handle
//!
//! `Account` assumes a single exclusive caller. `SharedAccount` is the
//! extension point for callers that need to operate on the same account from
//! several threads: every operation runs under the account's mutex, so the
//! single-threaded semantics of each call are preserved.

use crate::types::{Account, AccountError};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Cloneable, thread-safe handle to an account
///
/// Clones share the same underlying account.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    /// Wrap an account for shared access
    pub fn new(account: Account) -> Self {
        SharedAccount {
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.inner.lock().balance()
    }

    pub fn email(&self) -> String {
        self.inner.lock().email().to_string()
    }

    /// Copy of the current account state
    pub fn snapshot(&self) -> Account {
        self.inner.lock().clone()
    }

    /// Locked [`Account::deposit`]
    pub fn deposit(&self, amount: Decimal) -> Result<(), AccountError> {
        self.inner.lock().deposit(amount)
    }

    /// Locked [`Account::withdraw`]
    pub fn withdraw(&self, amount: Decimal) -> Result<(), AccountError> {
        self.inner.lock().withdraw(amount)
    }

    /// Locked [`Account::transfer`]
    ///
    /// Both accounts are held for the whole transfer. Locks are always taken
    /// in address order so that two opposing transfers cannot deadlock.
    ///
    /// # Errors
    ///
    /// Same as [`Account::transfer`], plus `InvalidArgument` when `destination`
    /// is a handle to this same account.
    pub fn transfer(
        &self,
        amount: Decimal,
        destination: &SharedAccount,
    ) -> Result<(), AccountError> {
        if Arc::ptr_eq(&self.inner, &destination.inner) {
            return Err(AccountError::invalid_argument(
                "Cannot transfer an account to itself.",
            ));
        }

        let source_first = Arc::as_ptr(&self.inner) < Arc::as_ptr(&destination.inner);
        let (mut source, mut target) = if source_first {
            let source = self.inner.lock();
            let target = destination.inner.lock();
            (source, target)
        } else {
            let target = destination.inner.lock();
            let source = self.inner.lock();
            (source, target)
        };

        source.transfer(amount, Some(&mut *target))
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        SharedAccount::new(account)
    }
}

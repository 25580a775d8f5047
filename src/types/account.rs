//! Account entity
//!
//! This module defines the Account structure: an owner email and a balance,
//! mutated only through validated deposit, withdraw and transfer operations.

use super::error::AccountError;
use crate::core::validation;
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

/// A single bank account
///
/// Invariants:
/// - `email` satisfies [`validation::is_email_valid`] and never changes
/// - `balance` satisfies [`validation::is_amount_valid`] (non-negative, at
///   most two decimal places)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    email: String,
    balance: Decimal,
}

impl Account {
    /// Create a new account after validating both fields
    ///
    /// # Arguments
    ///
    /// * `email` - Owner email, must be structurally valid
    /// * `initial_balance` - Opening balance, non-negative with at most two decimals
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either argument fails validation.
    pub fn new(email: &str, initial_balance: Decimal) -> Result<Self, AccountError> {
        if !validation::is_email_valid(email) {
            return Err(AccountError::invalid_argument("Invalid email format."));
        }
        if !validation::is_amount_valid(initial_balance) {
            return Err(AccountError::invalid_argument(
                "Invalid initial balance. Amount must be non-negative and have at most 2 decimal places.",
            ));
        }

        Ok(Account {
            email: email.to_string(),
            balance: initial_balance,
        })
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Owner email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// See [`validation::is_amount_valid`]
    pub fn is_amount_valid(amount: Decimal) -> bool {
        validation::is_amount_valid(amount)
    }

    /// See [`validation::is_email_valid`]
    pub fn is_email_valid(email: &str) -> bool {
        validation::is_email_valid(email)
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the amount is negative or has more than two decimals
    /// - `ArithmeticOverflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if !validation::is_amount_valid(amount) {
            return Err(AccountError::invalid_argument(
                "Deposit amount must be non-negative and have at most 2 decimal places.",
            ));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit"))?;

        debug!(email = %self.email, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Withdrawing exactly the full balance is allowed.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the amount is negative or has more than two decimals
    /// - `InsufficientFunds` if the amount exceeds the balance; the balance is unchanged
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if !validation::is_amount_valid(amount) {
            return Err(AccountError::invalid_argument(
                "Withdrawal amount must be non-negative and have at most 2 decimal places.",
            ));
        }
        if amount > self.balance {
            return Err(AccountError::insufficient_funds(self.balance, amount));
        }

        // amount <= balance, so this cannot go negative
        self.balance -= amount;

        debug!(email = %self.email, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Move funds from this account to `destination`
    ///
    /// Withdraws from `self` first, then deposits into `destination`. The
    /// amount is validated once, by the withdrawal. If the deposit overflows,
    /// the withdrawn amount is restored so neither account changes.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `destination` is `None` (nothing is mutated)
    /// - any error from [`Account::withdraw`], unchanged
    /// - `ArithmeticOverflow` if the destination balance would overflow
    pub fn transfer(
        &mut self,
        amount: Decimal,
        destination: Option<&mut Account>,
    ) -> Result<(), AccountError> {
        let Some(destination) = destination else {
            return Err(AccountError::invalid_argument(
                "Destination account cannot be absent.",
            ));
        };

        self.withdraw(amount)?;
        if let Err(error) = destination.deposit(amount) {
            self.balance += amount;
            return Err(error);
        }

        debug!(
            from = %self.email,
            to = %destination.email,
            %amount,
            "transfer applied"
        );
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.email, self.balance)
    }
}

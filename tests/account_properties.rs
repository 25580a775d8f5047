//! Property-based tests for the account entity

use bank_account::{is_amount_valid, Account, AccountError};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amounts in cents up to one hundred million dollars
fn cents() -> impl Strategy<Value = i64> {
    0i64..10_000_000_000
}

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn account(cents: i64) -> Account {
    Account::new("owner@bank.com", amount(cents)).unwrap()
}

proptest! {
    #[test]
    fn prop_construction_round_trips(balance in cents()) {
        let account = account(balance);
        prop_assert_eq!(account.balance(), amount(balance));
        prop_assert_eq!(account.email(), "owner@bank.com");
    }

    #[test]
    fn prop_two_decimal_amounts_are_valid(value in cents()) {
        prop_assert!(is_amount_valid(amount(value)));
    }

    #[test]
    fn prop_negative_amounts_are_invalid(value in 1i64..10_000_000_000) {
        prop_assert!(!is_amount_valid(amount(-value)));
    }

    #[test]
    fn prop_sub_cent_amounts_are_invalid(value in cents(), extra in 1i64..10) {
        // value cents plus a non-zero thousandth
        let amount = Decimal::new(value * 10 + extra, 3);
        prop_assert!(!is_amount_valid(amount));
    }

    #[test]
    fn prop_deposit_then_withdraw_round_trips(start in cents(), delta in cents()) {
        let mut account = account(start);

        account.deposit(amount(delta)).unwrap();
        prop_assert_eq!(account.balance(), amount(start + delta));

        account.withdraw(amount(delta)).unwrap();
        prop_assert_eq!(account.balance(), amount(start));
    }

    #[test]
    fn prop_overdraw_fails_and_preserves_balance(start in cents(), excess in 1i64..1_000_000) {
        let mut account = account(start);

        let result = account.withdraw(amount(start + excess));

        let is_insufficient = matches!(result, Err(AccountError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(account.balance(), amount(start));
    }

    #[test]
    fn prop_withdrawing_full_balance_leaves_zero(start in cents()) {
        let mut account = account(start);

        account.withdraw(amount(start)).unwrap();

        prop_assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn prop_transfer_conserves_total(source_start in cents(), destination_start in cents(), fraction in 0.0f64..=1.0) {
        let transfer = (source_start as f64 * fraction) as i64;
        let mut source = account(source_start);
        let mut destination = Account::new("friend@bank.com", amount(destination_start)).unwrap();

        source.transfer(amount(transfer), Some(&mut destination)).unwrap();

        prop_assert_eq!(source.balance(), amount(source_start - transfer));
        prop_assert_eq!(destination.balance(), amount(destination_start + transfer));
    }

    #[test]
    fn prop_transfer_to_absent_destination_mutates_nothing(start in cents(), value in cents()) {
        let mut source = account(start);

        let result = source.transfer(amount(value), None);

        let is_invalid = matches!(result, Err(AccountError::InvalidArgument { .. }));
        prop_assert!(is_invalid);
        prop_assert_eq!(source.balance(), amount(start));
    }
}

use crate::core::OperationProcessor;
use crate::types::{Account, AccountError};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay deposit, withdrawal and transfer operations against a bank account
#[derive(Parser, Debug)]
#[command(name = "bank-account")]
#[command(about = "Replay account operations from a CSV script", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the operation script (columns: type,amount)")]
    pub input_file: PathBuf,

    /// Owner email of the primary account
    #[arg(long = "email", value_name = "EMAIL")]
    pub email: String,

    /// Opening balance of the primary account
    #[arg(long = "balance", value_name = "AMOUNT", default_value = "0.00")]
    pub balance: Decimal,

    /// Owner email of the transfer destination
    #[arg(
        long = "counterparty-email",
        value_name = "EMAIL",
        help = "Destination for transfer operations (transfers are rejected without one)"
    )]
    pub counterparty_email: Option<String>,

    /// Opening balance of the transfer destination
    #[arg(
        long = "counterparty-balance",
        value_name = "AMOUNT",
        default_value = "0.00",
        requires = "counterparty_email"
    )]
    pub counterparty_balance: Decimal,

    /// Stop at the first rejected operation and exit with an error
    #[arg(long = "strict")]
    pub strict: bool,
}

impl CliArgs {
    /// Build the primary account from the arguments
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the email or opening balance is rejected.
    pub fn primary_account(&self) -> Result<Account, AccountError> {
        Account::new(&self.email, self.balance)
    }

    /// Build the counterparty account, if one was requested
    pub fn counterparty_account(&self) -> Result<Option<Account>, AccountError> {
        self.counterparty_email
            .as_deref()
            .map(|email| Account::new(email, self.counterparty_balance))
            .transpose()
    }

    pub fn to_processor(&self) -> Result<OperationProcessor, AccountError> {
        Ok(OperationProcessor::new(
            self.primary_account()?,
            self.counterparty_account()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::defaults(&["program", "--email", "a@b.com", "ops.csv"], dec!(0.00), None, dec!(0.00), false)]
    #[case::opening_balance(
        &["program", "--email", "a@b.com", "--balance", "12.34", "ops.csv"],
        dec!(12.34), None, dec!(0.00), false
    )]
    #[case::counterparty(
        &["program", "--email", "a@b.com", "--counterparty-email", "c@d.com", "--counterparty-balance", "5", "ops.csv"],
        dec!(0.00), Some("c@d.com"), dec!(5), false
    )]
    #[case::strict(&["program", "--strict", "--email", "a@b.com", "ops.csv"], dec!(0.00), None, dec!(0.00), true)]
    fn test_argument_parsing(
        #[case] args: &[&str],
        #[case] balance: Decimal,
        #[case] counterparty_email: Option<&str>,
        #[case] counterparty_balance: Decimal,
        #[case] strict: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        assert_eq!(parsed.email, "a@b.com");
        assert_eq!(parsed.input_file, PathBuf::from("ops.csv"));
        assert_eq!(parsed.balance, balance);
        assert_eq!(parsed.counterparty_email.as_deref(), counterparty_email);
        assert_eq!(parsed.counterparty_balance, counterparty_balance);
        assert_eq!(parsed.strict, strict);
    }

    #[rstest]
    #[case::missing_input(&["program", "--email", "a@b.com"])]
    #[case::missing_email(&["program", "ops.csv"])]
    #[case::non_numeric_balance(&["program", "--email", "a@b.com", "--balance", "lots", "ops.csv"])]
    #[case::counterparty_balance_without_email(
        &["program", "--email", "a@b.com", "--counterparty-balance", "1.00", "ops.csv"]
    )]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }

    #[rstest]
    #[case::bad_email(&["program", "--email", "user@domain", "ops.csv"])]
    #[case::over_precision(&["program", "--email", "a@b.com", "--balance", "1.001", "ops.csv"])]
    #[case::negative(&["program", "--email", "a@b.com", "--balance=-1.00", "ops.csv"])]
    #[case::bad_counterparty(&["program", "--email", "a@b.com", "--counterparty-email", "@x.com", "ops.csv"])]
    fn test_to_processor_rejects_invalid_accounts(#[case] args: &[&str]) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        let result = parsed.to_processor();

        assert!(matches!(result, Err(AccountError::InvalidArgument { .. })));
    }

    #[test]
    fn test_to_processor_builds_both_accounts() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--email",
            "a@b.com",
            "--balance",
            "10.00",
            "--counterparty-email",
            "c@d.com",
            "ops.csv",
        ])
        .unwrap();

        let processor = parsed.to_processor().unwrap();

        assert_eq!(processor.primary().balance(), dec!(10.00));
        assert_eq!(processor.counterparty().unwrap().email(), "c@d.com");
    }
}

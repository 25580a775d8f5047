//! Input validation predicates
//!
//! Both predicates are pure functions. They gate every constructor argument
//! and every amount passed to a mutating account operation.

use rust_decimal::Decimal;

/// Maximum number of significant decimal places allowed in an amount
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Check that an amount is non-negative with at most two decimal places
///
/// The check is exact: trailing zeros are not significant, so `1.500` is
/// accepted while `0.001` is not. Zero is a valid amount.
///
/// # Examples
///
/// ```
/// use bank_account::is_amount_valid;
/// use rust_decimal::Decimal;
///
/// assert!(is_amount_valid(Decimal::new(99, 2)));
/// assert!(!is_amount_valid(Decimal::new(1, 3)));
/// assert!(!is_amount_valid(Decimal::new(-1, 2)));
/// ```
pub fn is_amount_valid(amount: Decimal) -> bool {
    if amount < Decimal::ZERO {
        return false;
    }

    amount.normalize().scale() <= MAX_AMOUNT_SCALE
}

/// Check that an email has the structure `local@label.tld`
///
/// Rules:
/// - non-empty, with no whitespace anywhere
/// - exactly one `@`, preceded by at least one character
/// - the last `.` follows the `@` with a non-empty label in between
///   and at least one character after it
/// - no `..` anywhere
///
/// This is a structural check only; it does not implement the RFC 5322 grammar.
///
/// # Examples
///
/// ```
/// use bank_account::is_email_valid;
///
/// assert!(is_email_valid("a@b.c"));
/// assert!(!is_email_valid("user@domain"));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some(at) = email.find('@') else {
        return false;
    };
    if email.rfind('@') != Some(at) {
        return false;
    }

    // '@' and '.' are single bytes, so byte offsets are safe to compare here
    let Some(last_dot) = email.rfind('.') else {
        return false;
    };
    if at == 0 || last_dot <= at + 1 || last_dot == email.len() - 1 {
        return false;
    }

    !email.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::zero(dec!(0.0), true)]
    #[case::cents(dec!(0.99), true)]
    #[case::smallest_unit(dec!(0.01), true)]
    #[case::whole_number(dec!(100), true)]
    #[case::large_two_decimals(dec!(1234567.89), true)]
    #[case::very_large(dec!(9999999.99), true)]
    #[case::trailing_zeros(dec!(1.500), true)]
    #[case::three_decimals(dec!(0.001), false)]
    #[case::three_decimals_large(dec!(50.001), false)]
    #[case::just_below_half_cent(dec!(0.004999999), false)]
    #[case::negative_cent(dec!(-0.01), false)]
    #[case::negative_whole(dec!(-100.00), false)]
    fn test_is_amount_valid(#[case] amount: Decimal, #[case] expected: bool) {
        assert_eq!(is_amount_valid(amount), expected);
    }

    #[test]
    fn test_negative_zero_is_valid() {
        let negative_zero = -Decimal::ZERO;
        assert!(is_amount_valid(negative_zero));
    }

    #[rstest]
    #[case::dotted_local_part("first.last.name@domain.com", true)]
    #[case::short_tld("x@y.co", true)]
    #[case::single_char_tld("a@b.c", true)]
    #[case::subdomain("user@mail.example.org", true)]
    #[case::plus_tag("user+tag@domain.com", true)]
    #[case::empty("", false)]
    #[case::no_local_part("@domain.com", false)]
    #[case::inner_space("user name@domain.com", false)]
    #[case::inner_tab("user\tname@domain.com", false)]
    #[case::two_at_signs("user@name@domain.com", false)]
    #[case::no_at_sign("user.domain.com", false)]
    #[case::trailing_dot("user@domain.", false)]
    #[case::no_dot_in_domain("user@domain", false)]
    #[case::dot_right_after_at("user@.com", false)]
    #[case::dot_only_in_local_part("first.last@domain", false)]
    #[case::double_dot_local("user..name@domain.com", false)]
    #[case::double_dot_domain("user@domain..com", false)]
    #[case::leading_space(" user@domain.com", false)]
    #[case::trailing_space("user@domain.com ", false)]
    fn test_is_email_valid(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_email_valid(email), expected);
    }
}

//! Digit check - requires at least one decimal digit.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password contains at least one digit.
pub fn digit_check(password: &SecretString) -> CheckOutcome {
    let pwd = password.expose_secret();
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        CheckOutcome::passed(1.0)
    } else {
        CheckOutcome::failed("Add at least one number")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_check_with_digit() {
        let pwd = SecretString::new("abc1def".to_string().into());
        assert_eq!(digit_check(&pwd), CheckOutcome::passed(1.0));
    }

    #[test]
    fn test_digit_check_without_digit() {
        let pwd = SecretString::new("NoNumbers!".to_string().into());
        let outcome = digit_check(&pwd);
        assert_eq!(outcome.units, 0.0);
        assert_eq!(outcome.suggestion, Some("Add at least one number"));
    }

    #[test]
    fn test_digit_check_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(digit_check(&pwd).units, 0.0);
    }
}

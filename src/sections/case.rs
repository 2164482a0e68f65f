//! Case mixing check - requires both uppercase and lowercase ASCII letters.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password mixes uppercase and lowercase letters.
pub fn case_mixing_check(password: &SecretString) -> CheckOutcome {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        CheckOutcome::passed(1.0)
    } else {
        CheckOutcome::failed("Include both uppercase and lowercase letters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_check_mixed() {
        let pwd = SecretString::new("Mixed".to_string().into());
        assert_eq!(case_mixing_check(&pwd), CheckOutcome::passed(1.0));
    }

    #[test]
    fn test_case_check_only_lowercase() {
        let pwd = SecretString::new("lowercase".to_string().into());
        let outcome = case_mixing_check(&pwd);
        assert_eq!(outcome.units, 0.0);
        assert_eq!(
            outcome.suggestion,
            Some("Include both uppercase and lowercase letters")
        );
    }

    #[test]
    fn test_case_check_only_uppercase() {
        let pwd = SecretString::new("UPPERCASE".to_string().into());
        assert_eq!(case_mixing_check(&pwd).units, 0.0);
    }

    #[test]
    fn test_case_check_no_letters() {
        let pwd = SecretString::new("12345!@#".to_string().into());
        assert_eq!(case_mixing_check(&pwd).units, 0.0);
    }
}

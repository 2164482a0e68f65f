//! Pattern check - rejects runs of three identical characters.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password has no three identical consecutive characters.
///
/// Only identical runs are rejected; alternating repeats like `abab` pass.
/// Passwords shorter than three characters pass vacuously.
pub fn pattern_check(password: &SecretString) -> CheckOutcome {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= 3 {
                return CheckOutcome::failed("Avoid using repeated characters");
            }
        } else {
            run = 1;
        }
    }

    CheckOutcome::passed(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_check_triple_repeat() {
        let pwd = SecretString::new("aaaBcd12".to_string().into());
        let outcome = pattern_check(&pwd);
        assert_eq!(outcome.units, 0.0);
        assert_eq!(outcome.suggestion, Some("Avoid using repeated characters"));
    }

    #[test]
    fn test_pattern_check_triple_in_middle() {
        let pwd = SecretString::new("ab111cd".to_string().into());
        assert_eq!(pattern_check(&pwd).units, 0.0);
    }

    #[test]
    fn test_pattern_check_double_repeat_passes() {
        let pwd = SecretString::new("aabbcc".to_string().into());
        assert_eq!(pattern_check(&pwd), CheckOutcome::passed(1.0));
    }

    #[test]
    fn test_pattern_check_alternating_repeat_passes() {
        // Only identical runs are rejected, not all repetition
        let pwd = SecretString::new("abababab".to_string().into());
        assert_eq!(pattern_check(&pwd), CheckOutcome::passed(1.0));
    }

    #[test]
    fn test_pattern_check_too_short_passes() {
        let pwd = SecretString::new("aa".to_string().into());
        assert_eq!(pattern_check(&pwd), CheckOutcome::passed(1.0));
    }

    #[test]
    fn test_pattern_check_empty_passes() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(pattern_check(&pwd), CheckOutcome::passed(1.0));
    }
}

//! Length check - rewards longer passwords on a two-tier scale.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Checks password length.
///
/// Two tiers: 2 units at 12+ characters, 1 unit at 8+, otherwise a
/// suggestion. Length is counted in characters, not bytes.
pub fn length_check(password: &SecretString) -> CheckOutcome {
    let len = password.expose_secret().chars().count();
    if len >= RECOMMENDED_LENGTH {
        CheckOutcome::passed(2.0)
    } else if len >= MIN_LENGTH {
        CheckOutcome::passed(1.0)
    } else {
        CheckOutcome::failed("Make the password at least 8 characters long (12+ recommended)")
    }
}

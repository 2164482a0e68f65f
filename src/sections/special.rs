//! Special character check - requires one of a fixed symbol set.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

/// The symbol set recognized by the check. The generator draws its special
/// characters from the same set, so generated passwords always pass here.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Checks that the password contains at least one special character.
pub fn special_char_check(password: &SecretString) -> CheckOutcome {
    let pwd = password.expose_secret();
    if pwd.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        CheckOutcome::passed(1.0)
    } else {
        CheckOutcome::failed("Add at least one special character (!@#$%^&*)")
    }
}

//! Password scorer - weighted checks behind a blacklist short-circuit.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_blacklisted;
use crate::sections::{
    CheckOutcome, case_mixing_check, digit_check, length_check, pattern_check, special_char_check,
};
use crate::types::{MAX_SCORE, PasswordEvaluation, PasswordScore};

/// Weight multipliers for the scoring checks. Constant for the process
/// lifetime; public so a UI can render a criteria reference panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub length: f64,
    pub case: f64,
    pub digits: f64,
    pub special: f64,
    pub patterns: f64,
}

impl ScoreWeights {
    /// Sum of all weights, the normalization divisor.
    pub fn total(&self) -> f64 {
        self.length + self.case + self.digits + self.special + self.patterns
    }
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    length: 2.0,
    case: 1.5,
    digits: 1.0,
    special: 1.5,
    patterns: 1.0,
};

/// Evaluates password strength.
///
/// A blacklisted password (case-insensitive match) scores an absolute zero
/// with a single suggestion and no further checks. Otherwise the five
/// weighted checks run independently in fixed order, the raw sum is
/// normalized against the weight total onto `[0, 5]` and clamped. A 12+
/// character password can exceed the weight total through the length tier,
/// which the clamp absorbs.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing score and feedback.
pub fn score_password(password: &SecretString) -> PasswordEvaluation {
    if is_blacklisted(password.expose_secret()) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password matched the blacklist, skipping checks");
        return PasswordEvaluation {
            score: PasswordScore::new(0.0),
            feedback: vec![
                "This is a commonly used password. Please choose something more unique"
                    .to_string(),
            ],
        };
    }

    let checks: [(fn(&SecretString) -> CheckOutcome, f64); 5] = [
        (length_check, WEIGHTS.length),
        (case_mixing_check, WEIGHTS.case),
        (digit_check, WEIGHTS.digits),
        (special_char_check, WEIGHTS.special),
        (pattern_check, WEIGHTS.patterns),
    ];

    let mut raw = 0.0;
    let mut feedback = Vec::new();

    for (check_fn, weight) in checks {
        let outcome = check_fn(password);
        raw += outcome.units * weight;
        if let Some(suggestion) = outcome.suggestion {
            #[cfg(feature = "tracing")]
            tracing::trace!("check flagged password: {}", suggestion);
            feedback.push(suggestion.to_string());
        }
    }

    let normalized = raw / WEIGHTS.total() * MAX_SCORE;

    PasswordEvaluation {
        score: PasswordScore::new(normalized.min(MAX_SCORE)),
        feedback,
    }
}

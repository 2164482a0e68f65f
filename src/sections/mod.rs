//! Password scoring checks
//!
//! Each check inspects one aspect of the password and reports how many raw
//! units it contributes, plus a suggestion when the password falls short.
//! Checks are independent; none of them short-circuits the others.

mod case;
mod digit;
mod length;
mod pattern;
mod special;

pub use case::case_mixing_check;
pub use digit::digit_check;
pub use length::length_check;
pub use pattern::pattern_check;
pub use special::{SPECIAL_CHARS, special_char_check};

/// Outcome of a single scoring check.
///
/// `units` is the unweighted contribution (the scorer multiplies it by the
/// check's weight); `suggestion` is set when the check found something to
/// improve.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub units: f64,
    pub suggestion: Option<&'static str>,
}

impl CheckOutcome {
    pub(crate) fn passed(units: f64) -> Self {
        Self {
            units,
            suggestion: None,
        }
    }

    pub(crate) fn failed(suggestion: &'static str) -> Self {
        Self {
            units: 0.0,
            suggestion: Some(suggestion),
        }
    }
}

//! Score, evaluation and strength label types.

use std::fmt;

/// Maximum reachable score.
pub const MAX_SCORE: f64 = 5.0;

/// A password strength score, clamped to the `[0, 5]` range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PasswordScore(f64);

impl PasswordScore {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, MAX_SCORE))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score scaled to `[0, 100]`, for progress-bar style rendering.
    pub fn percent(&self) -> f64 {
        self.0 / MAX_SCORE * 100.0
    }
}

/// Coarse strength label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    /// Display color associated with the label.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "red",
            StrengthLabel::Moderate => "orange",
            StrengthLabel::Strong => "green",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        };
        write!(f, "{}", label)
    }
}

/// Maps a score to its strength label.
///
/// Thresholds are inclusive upper bounds: `score <= 2` is [`StrengthLabel::Weak`],
/// `score <= 4` is [`StrengthLabel::Moderate`], anything above is
/// [`StrengthLabel::Strong`].
pub fn classify(score: f64) -> StrengthLabel {
    if score <= 2.0 {
        StrengthLabel::Weak
    } else if score <= 4.0 {
        StrengthLabel::Moderate
    } else {
        StrengthLabel::Strong
    }
}

/// Result of a password evaluation: the score plus improvement suggestions,
/// in the fixed check order.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub feedback: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> StrengthLabel {
        classify(self.score.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamped_to_range() {
        assert_eq!(PasswordScore::new(-1.0).value(), 0.0);
        assert_eq!(PasswordScore::new(3.2).value(), 3.2);
        assert_eq!(PasswordScore::new(6.4).value(), MAX_SCORE);
    }

    #[test]
    fn test_score_percent() {
        assert_eq!(PasswordScore::new(0.0).percent(), 0.0);
        assert_eq!(PasswordScore::new(2.5).percent(), 50.0);
        assert_eq!(PasswordScore::new(5.0).percent(), 100.0);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(2.0), StrengthLabel::Weak);
        assert_eq!(classify(2.01), StrengthLabel::Moderate);
        assert_eq!(classify(4.0), StrengthLabel::Moderate);
        assert_eq!(classify(4.01), StrengthLabel::Strong);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(classify(0.0), StrengthLabel::Weak);
        assert_eq!(classify(5.0), StrengthLabel::Strong);
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(StrengthLabel::Weak.color(), "red");
        assert_eq!(StrengthLabel::Moderate.color(), "orange");
        assert_eq!(StrengthLabel::Strong.color(), "green");
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLabel::Moderate.to_string(), "Moderate");
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_classify_is_pure() {
        assert_eq!(classify(3.3), classify(3.3));
    }
}

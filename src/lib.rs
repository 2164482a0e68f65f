//! Password strength meter library
//!
//! This library provides password strength scoring, a score-to-label
//! classifier, and a random strong-password generator. Scoring runs five
//! weighted checks (length, case mixing, digits, special characters,
//! repeated-character patterns) behind a blacklist short-circuit; the
//! generator guarantees one character from each of the four character
//! classes.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_BLACKLIST_PATH`: Custom path to an optional extended
//!   blacklist file (default: `./assets/blacklist.txt`). The built-in
//!   blacklist works without any initialization.
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{DEFAULT_LENGTH, generate, score_password};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("Tr0ub4dor&3X!".to_string().into());
//! let evaluation = score_password(&password);
//!
//! assert!(evaluation.feedback.is_empty());
//! let label = evaluation.strength();
//! println!("{:.0}% - {} ({})", evaluation.score.percent(), label, label.color());
//!
//! // Generate a strong password
//! let generated = generate(DEFAULT_LENGTH).expect("length is valid");
//! ```

// Internal modules
mod blacklist;
mod generator;
mod scorer;
mod sections;
mod types;

// Public API
pub use blacklist::{
    BlacklistError, get_blacklist, get_blacklist_path, init_blacklist, init_blacklist_from_path,
    is_blacklisted,
};
pub use generator::{
    DEFAULT_LENGTH, GenerateError, MIN_GENERATED_LENGTH, generate, generate_with_rng,
};
pub use scorer::{ScoreWeights, WEIGHTS, score_password};
pub use sections::SPECIAL_CHARS;
pub use types::{MAX_SCORE, PasswordEvaluation, PasswordScore, StrengthLabel, classify};

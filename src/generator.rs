//! Random password generator with per-class guarantees.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::sections::SPECIAL_CHARS;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Default generated password length.
pub const DEFAULT_LENGTH: usize = 12;

/// Minimum generated password length: one character per mandatory class.
pub const MIN_GENERATED_LENGTH: usize = 4;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Generated password length must be at least {MIN_GENERATED_LENGTH}, got {0}")]
    LengthTooShort(usize),
}

/// Generates a random password of the given length.
///
/// The result always contains at least one lowercase letter, one uppercase
/// letter, one digit and one special character from `!@#$%^&*`, shuffled so
/// the mandatory characters sit at unpredictable positions.
///
/// Uses the thread-local generator, which is not a substitute for a CSPRNG
/// audit trail: this is a usability aid. Callers with cryptographic
/// requirements should pass their own source to [`generate_with_rng`].
///
/// # Errors
///
/// Returns [`GenerateError::LengthTooShort`] for `length < 4`.
pub fn generate(length: usize) -> Result<SecretString, GenerateError> {
    generate_with_rng(&mut rand::thread_rng(), length)
}

/// Generates a random password using the supplied randomness source.
///
/// Seed a [`rand::rngs::StdRng`] for reproducible output.
pub fn generate_with_rng<R: Rng>(rng: &mut R, length: usize) -> Result<SecretString, GenerateError> {
    if length < MIN_GENERATED_LENGTH {
        return Err(GenerateError::LengthTooShort(length));
    }

    let classes: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL_CHARS.as_bytes()];

    // One mandatory character per class
    let mut password: Vec<u8> = Vec::with_capacity(length);
    for class in classes {
        password.push(class[rng.gen_range(0..class.len())]);
    }

    // Remainder drawn from the union of all classes
    let pool: Vec<u8> = classes.concat();
    for _ in 0..length - MIN_GENERATED_LENGTH {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    password.shuffle(rng);

    let password: String = password.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into()))
}

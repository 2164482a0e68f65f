//! Blacklist of well-known weak passwords.
//!
//! A small built-in list is always active. An optional, larger list can be
//! loaded once at startup from an external file; loaded entries extend the
//! built-ins, never replace them.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in weak passwords, always checked (case-insensitive).
const BUILTIN_BLACKLIST: &[&str] = &[
    "password123",
    "qwerty123",
    "12345678",
    "admin123",
    "letmein123",
    "welcome123",
    "monkey123",
    "football123",
];

static EXTENDED_BLACKLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_METER_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

/// Loads the extended blacklist from an external file.
///
/// Optional: the built-in list works without any initialization. Call once at
/// startup if a larger list is wanted.
///
/// # Environment Variable
///
/// Set `PWD_METER_BLACKLIST_PATH` to specify a custom blacklist file location.
/// If not set, defaults to `./assets/blacklist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Loads the extended blacklist from a specific file path.
///
/// One password per line; entries are lowercased and blank lines skipped.
/// Idempotent: subsequent calls return the already-loaded count.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, BlacklistError> {
    {
        let guard = EXTENDED_BLACKLIST.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTENDED_BLACKLIST.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist extended: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns the full active blacklist (built-ins plus any loaded entries).
pub fn get_blacklist() -> HashSet<String> {
    let mut set: HashSet<String> = BUILTIN_BLACKLIST.iter().map(|p| p.to_string()).collect();
    let guard = EXTENDED_BLACKLIST.read().unwrap();
    if let Some(extended) = guard.as_ref() {
        set.extend(extended.iter().cloned());
    }
    set
}

/// Checks if a password is blacklisted (case-insensitive).
///
/// The built-in list is always consulted; the extended list only after a
/// successful `init_blacklist` call.
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if BUILTIN_BLACKLIST.contains(&lowered.as_str()) {
        return true;
    }
    let guard = EXTENDED_BLACKLIST.read().unwrap();
    guard
        .as_ref()
        .map(|bl| bl.contains(&lowered))
        .unwrap_or(false)
}

/// Resets the extended blacklist for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = EXTENDED_BLACKLIST.write().unwrap();
    *guard = None;
}

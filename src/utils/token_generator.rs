//! Short token generation and validation.
//!
//! Generated tokens are drawn from a lowercase URL-safe alphabet so that
//! case-insensitive consumers never see two tokens that differ only by case.
//! Caller-suggested tokens may use either case and are matched exactly.

use std::sync::{LazyLock, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use regex::Regex;

use crate::domain::errors::ShortenError;

/// Alphabet for generated tokens.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default length of generated tokens.
pub const DEFAULT_TOKEN_LENGTH: usize = 5;

/// Bounds for caller-suggested tokens.
pub const MIN_SUGGESTED_TOKEN_LENGTH: usize = 3;
pub const MAX_SUGGESTED_TOKEN_LENGTH: usize = 32;

/// Tokens that would be shadowed by fixed routes.
const RESERVED_TOKENS: &[&str] = &["api", "health"];

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("token regex is valid"));

/// Source of candidate tokens.
///
/// Implementations are pure: no storage access, no side effects. Collisions
/// are expected at scale and are the caller's problem.
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform random tokens over [`TOKEN_ALPHABET`], backed by any RNG.
pub struct RandomTokenGenerator<R = StdRng> {
    rng: Mutex<R>,
    length: usize,
}

impl RandomTokenGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new(length: usize) -> Self {
        Self::with_rng(StdRng::from_os_rng(), length)
    }
}

impl<R: RngCore + Send> RandomTokenGenerator<R> {
    pub fn with_rng(rng: R, length: usize) -> Self {
        Self {
            rng: Mutex::new(rng),
            length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomTokenGenerator<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_LENGTH)
    }
}

impl<R: RngCore + Send> TokenGenerator for RandomTokenGenerator<R> {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..self.length)
            .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `token` could have been stored at all.
///
/// Accepts anything a generator or a valid suggestion can produce, so a
/// `false` here means a lookup is guaranteed to miss.
pub fn is_well_formed_token(token: &str) -> bool {
    !token.is_empty() && token.len() <= MAX_SUGGESTED_TOKEN_LENGTH && TOKEN_REGEX.is_match(token)
}

/// Validates a caller-suggested token.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: letters, digits, underscores, hyphens
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`ShortenError::InvalidToken`] if any rule is violated.
pub fn validate_suggested_token(token: &str) -> Result<(), ShortenError> {
    let len = token.chars().count();
    if !(MIN_SUGGESTED_TOKEN_LENGTH..=MAX_SUGGESTED_TOKEN_LENGTH).contains(&len) {
        return Err(ShortenError::InvalidToken {
            reason: format!(
                "token must be {MIN_SUGGESTED_TOKEN_LENGTH}-{MAX_SUGGESTED_TOKEN_LENGTH} characters, got {len}"
            ),
        });
    }

    if !TOKEN_REGEX.is_match(token) {
        return Err(ShortenError::InvalidToken {
            reason: "token may only contain letters, numbers, underscores, and dashes".to_string(),
        });
    }

    if RESERVED_TOKENS.contains(&token) {
        return Err(ShortenError::InvalidToken {
            reason: format!("token '{token}' is reserved"),
        });
    }

    Ok(())
}

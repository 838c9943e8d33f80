//! Password synthesizer - derives a password deterministically from a seed phrase.
//!
//! The generator is seeded from a SHA-256 digest of the seed phrase and the
//! target length, so the same input gives the same password on every run.
//! Each call owns its generator; no state leaks into later calls.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::charset::{CharClass, random_any};
use crate::error::AnalyzerError;

/// Length used when the caller does not ask for one.
pub const DEFAULT_TARGET_LENGTH: usize = 14;

const IMPROVED_MIN_LENGTH: usize = 12;
const IMPROVED_EXTRA_LENGTH: usize = 4;

fn seeded_rng(seed: &str, target_length: usize) -> ChaCha20Rng {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update((target_length as u64).to_le_bytes());
    let digest = hasher.finalize();

    let mut key = [0u8; 32];
    key.copy_from_slice(&digest);
    ChaCha20Rng::from_seed(key)
}

/// Builds a password of exactly `target_length` characters from `seed`.
///
/// For `target_length >= 4` the result holds at least one digit, lowercase,
/// uppercase and special character.
///
/// # Errors
/// - [`AnalyzerError::EmptySeed`] if the seed is empty
/// - [`AnalyzerError::InvalidTargetLength`] if `target_length` is 0
pub fn synthesize(seed: &SecretString, target_length: usize) -> Result<SecretString, AnalyzerError> {
    let seed = seed.expose_secret();
    if seed.is_empty() {
        return Err(AnalyzerError::EmptySeed);
    }
    if target_length == 0 {
        return Err(AnalyzerError::InvalidTargetLength(target_length));
    }

    let mut rng = seeded_rng(seed, target_length);
    let password = assemble(seed, target_length, &mut rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(target_length, "password synthesized");

    Ok(SecretString::from(password))
}

/// Re-synthesizes a previously generated password at a longer length:
/// `max(previous_length + 4, 12)`.
///
/// # Errors
/// Same as [`synthesize`].
pub fn synthesize_improved(
    generated: &SecretString,
    previous_length: usize,
) -> Result<SecretString, AnalyzerError> {
    let length = (previous_length + IMPROVED_EXTRA_LENGTH).max(IMPROVED_MIN_LENGTH);
    synthesize(generated, length)
}

fn assemble<R: Rng + ?Sized>(seed: &str, target_length: usize, rng: &mut R) -> String {
    let mut chars: Vec<char> = CharClass::ALL
        .iter()
        .map(|class| class.random_char(rng))
        .collect();

    let seed_chars: Vec<char> = seed.chars().collect();
    let take = seed_chars.len().min(target_length.saturating_sub(chars.len()));
    if take > 0 {
        let start = rng.random_range(0..=seed_chars.len() - take);
        chars.extend_from_slice(&seed_chars[start..start + take]);
    }

    while chars.len() < target_length {
        chars.push(random_any(rng));
    }

    chars.shuffle(rng);
    // Only lengths below the four mandatory characters get cut here.
    chars.truncate(target_length);
    chars.into_iter().collect()
}

//! Reshape heuristics - change case, mirror or shuffle the original characters.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::RngCore;

use super::{Mutation, MutationResult};
use crate::analysis::PasswordAnalysis;
use crate::charset::CharClass;

const MIRROR_MAX_LENGTH: usize = 20;
const SHUFFLE_MAX_LENGTH: usize = 15;
const SHUFFLE_MIN_RESULT: usize = 8;

pub(super) fn can_mirror(analysis: &PasswordAnalysis) -> bool {
    analysis.length < MIRROR_MAX_LENGTH
}

pub(super) fn can_shuffle(analysis: &PasswordAnalysis) -> bool {
    analysis.length < SHUFFLE_MAX_LENGTH
}

/// Uppercases one randomly chosen ASCII lowercase letter.
pub(super) fn uppercase_random_lower(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let mut chars: Vec<char> = password.chars().collect();
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .collect();
    let &index = positions.choose(rng)?;
    chars[index] = chars[index].to_ascii_uppercase();

    Some(Mutation {
        password: chars.into_iter().collect(),
        description: format!("Uppercased a random letter (position {})", index + 1),
    })
}

/// `password + reverse(password) + digit + special`.
pub(super) fn mirror(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let suffix: String = [
        CharClass::Digit.random_char(rng),
        CharClass::Special.random_char(rng),
    ]
    .iter()
    .collect();
    let reversed: String = password.chars().rev().collect();

    Some(Mutation {
        password: format!("{}{}{}", password, reversed, suffix),
        description: format!("Mirrored the password and appended {}", suffix),
    })
}

/// Adds one character of each class, shuffles everything and keeps
/// `max(8, length + 4)` characters.
pub(super) fn shuffle_with_additions(
    password: &str,
    analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let mut chars: Vec<char> = password.chars().collect();
    for class in CharClass::ALL {
        chars.push(class.random_char(rng));
    }
    chars.shuffle(rng);
    chars.truncate(SHUFFLE_MIN_RESULT.max(analysis.length + 4));

    Some(Mutation {
        password: chars.into_iter().collect(),
        description: "Shuffled with one added character of each class".to_string(),
    })
}

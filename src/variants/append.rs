//! Append heuristics - grow the password with characters from missing classes.

use rand::RngCore;

use super::{Mutation, MutationResult};
use crate::analysis::PasswordAnalysis;
use crate::charset::{CharClass, random_block};

fn appended(password: &str, suffix: &str, description: String) -> MutationResult {
    Some(Mutation {
        password: format!("{}{}", password, suffix),
        description,
    })
}

pub(super) fn append_digit(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let digit = CharClass::Digit.random_char(rng);
    appended(password, &digit.to_string(), format!("Appended digit {}", digit))
}

pub(super) fn append_upper(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let upper = CharClass::Upper.random_char(rng);
    appended(
        password,
        &upper.to_string(),
        format!("Appended uppercase letter {}", upper),
    )
}

pub(super) fn append_special(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let special = CharClass::Special.random_char(rng);
    appended(
        password,
        &special.to_string(),
        format!("Appended special character {}", special),
    )
}

pub(super) fn append_digit_special(
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
    appended(
        password,
        &suffix,
        format!("Appended random combination {}", suffix),
    )
}

pub(super) fn append_block(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let block = random_block(rng);
    appended(password, &block, format!("Appended random pattern {}", block))
}

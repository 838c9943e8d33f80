//! Leet heuristic - swaps letters for look-alike digits and symbols.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use super::{Mutation, MutationResult};
use crate::analysis::PasswordAnalysis;

/// Chance that an eligible character gets substituted.
const SUBSTITUTION_PROBABILITY: f64 = 0.3;

/// Substitutions listed in the description before it is cut short.
const DESCRIBED_SUBSTITUTIONS: usize = 3;

fn options(c: char) -> Option<&'static [&'static str]> {
    let options: &'static [&'static str] = match c {
        'a' => &["@", "4"],
        'e' | 'E' => &["3", "€"],
        'i' | 'I' => &["1", "!"],
        'o' | 'O' => &["0", "()"],
        's' | 'S' => &["$", "5"],
        't' | 'T' => &["7", "+"],
        'A' => &["4", "@"],
        'b' => &["8", "|3"],
        'g' => &["9", "&"],
        'l' => &["1", "|"],
        'z' => &["2", "%"],
        _ => return None,
    };
    Some(options)
}

/// Substitutes each eligible character independently with probability 0.3.
///
/// Produces nothing when no substitution happened.
pub(super) fn substitute(
    password: &str,
    _analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let mut result = String::with_capacity(password.len());
    let mut substitutions = Vec::new();

    for c in password.chars() {
        let replacement = options(c)
            .filter(|_| rng.random_bool(SUBSTITUTION_PROBABILITY))
            .and_then(|opts| opts.choose(rng));
        match replacement {
            Some(&rep) => {
                result.push_str(rep);
                substitutions.push(format!("'{}' -> '{}'", c, rep));
            }
            None => result.push(c),
        }
    }

    if substitutions.is_empty() {
        return None;
    }

    let mut description = format!(
        "Substituted characters: {}",
        substitutions
            .iter()
            .take(DESCRIBED_SUBSTITUTIONS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );
    if substitutions.len() > DESCRIBED_SUBSTITUTIONS {
        description.push_str(" and more");
    }

    Some(Mutation {
        password: result,
        description,
    })
}

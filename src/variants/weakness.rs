//! Smart heuristic - targets one randomly chosen weakness of the original.

use rand::seq::IndexedRandom;
use rand::RngCore;

use super::{Mutation, MutationResult};
use crate::analysis::{PasswordAnalysis, Weakness};
use crate::charset::{CharClass, random_block};

pub(super) fn fix_random_weakness(
    password: &str,
    analysis: &PasswordAnalysis,
    rng: &mut dyn RngCore,
) -> MutationResult {
    let weaknesses = analysis.weaknesses();
    let &weakness = weaknesses.choose(rng)?;

    let fixed = match weakness {
        Weakness::NoDigits => {
            let digits: String = [
                CharClass::Digit.random_char(rng),
                CharClass::Digit.random_char(rng),
            ]
            .iter()
            .collect();
            format!("{}{}", password, digits)
        }
        Weakness::NoUppercase => uppercase_random_letter(password, rng),
        Weakness::NoSpecial => format!("{}{}", password, CharClass::Special.random_char(rng)),
        Weakness::TooShort(_) => format!("{}{}", password, random_block(rng)),
    };

    Some(Mutation {
        password: fixed,
        description: format!("Fixed: {}", weakness),
    })
}

/// Uppercases a random ASCII letter, or appends an uppercase letter when
/// the password has none.
fn uppercase_random_letter(password: &str, rng: &mut dyn RngCore) -> String {
    let mut chars: Vec<char> = password.chars().collect();
    let letters: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();

    match letters.choose(rng) {
        Some(&index) => {
            chars[index] = chars[index].to_ascii_uppercase();
            chars.into_iter().collect()
        }
        None => format!("{}{}", password, CharClass::Upper.random_char(rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_str;
    use crate::charset::classify;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_no_weakness_no_candidate() {
        let pwd = "StrongPass123!";
        let mut rng = StdRng::seed_from_u64(0);
        assert!(fix_random_weakness(pwd, &analyze_str(pwd).unwrap(), &mut rng).is_none());
    }

    #[test]
    fn test_only_missing_digits() {
        let pwd = "Password!";
        let mut rng = StdRng::seed_from_u64(0);
        let m = fix_random_weakness(pwd, &analyze_str(pwd).unwrap(), &mut rng).unwrap();
        assert_eq!(m.password.len(), pwd.len() + 2);
        assert!(m.password[pwd.len()..].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(m.description, "Fixed: no digits");
    }

    #[test]
    fn test_only_missing_uppercase() {
        let pwd = "password1!";
        let mut rng = StdRng::seed_from_u64(0);
        let m = fix_random_weakness(pwd, &analyze_str(pwd).unwrap(), &mut rng).unwrap();
        assert_eq!(m.password.len(), pwd.len());
        assert!(classify(&m.password).has_upper);
        assert_eq!(m.description, "Fixed: no uppercase letters");
    }

    #[test]
    fn test_uppercase_appended_without_letters() {
        let pwd = "12345678!";
        let mut rng = StdRng::seed_from_u64(0);
        let m = fix_random_weakness(pwd, &analyze_str(pwd).unwrap(), &mut rng).unwrap();
        assert_eq!(m.password.len(), pwd.len() + 1);
        assert!(classify(&m.password).has_upper);
    }

    #[test]
    fn test_only_missing_special() {
        let pwd = "Password1";
        let mut rng = StdRng::seed_from_u64(0);
        let m = fix_random_weakness(pwd, &analyze_str(pwd).unwrap(), &mut rng).unwrap();
        assert!(classify(&m.password).has_special);
        assert_eq!(m.description, "Fixed: no special characters");
    }

    #[test]
    fn test_only_too_short() {
        let pwd = "Pa1!";
        let mut rng = StdRng::seed_from_u64(0);
        let m = fix_random_weakness(pwd, &analyze_str(pwd).unwrap(), &mut rng).unwrap();
        assert_eq!(m.password.len(), 8);
        assert_eq!(m.description, "Fixed: too short (4 characters)");
    }

    #[test]
    fn test_random_weakness_is_one_of_the_list() {
        let pwd = "weak";
        let analysis = analyze_str(pwd).unwrap();
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let m = fix_random_weakness(pwd, &analysis, &mut rng).unwrap();
            let fixed = analysis
                .weaknesses()
                .iter()
                .any(|w| m.description == format!("Fixed: {}", w));
            assert!(fixed, "unexpected description {}", m.description);
        }
    }
}

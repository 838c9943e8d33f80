//! Variant generator - proposes higher-scoring mutations of a password.
//!
//! Each heuristic lives in a small module and is registered in [`HEURISTICS`]
//! together with its category and a gate on the original analysis.

mod append;
mod leet;
mod reshape;
mod weakness;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, RngCore};
use secrecy::{ExposeSecret, SecretString};

use crate::analysis::{PasswordAnalysis, analyze_str};
use crate::error::AnalyzerError;

/// Upper bound on the number of variants returned.
pub const MAX_VARIANTS: usize = 5;

/// Mutation style used to deduplicate candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantCategory {
    Simple,
    Moderate,
    Good,
    Better,
    Excellent,
    Strong,
    Creative,
    Smart,
}

impl VariantCategory {
    pub const ALL: [VariantCategory; 8] = [
        VariantCategory::Simple,
        VariantCategory::Moderate,
        VariantCategory::Good,
        VariantCategory::Better,
        VariantCategory::Excellent,
        VariantCategory::Strong,
        VariantCategory::Creative,
        VariantCategory::Smart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantCategory::Simple => "simple",
            VariantCategory::Moderate => "moderate",
            VariantCategory::Good => "good",
            VariantCategory::Better => "better",
            VariantCategory::Excellent => "excellent",
            VariantCategory::Strong => "strong",
            VariantCategory::Creative => "creative",
            VariantCategory::Smart => "smart",
        }
    }
}

impl std::fmt::Display for VariantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed replacement whose score is strictly higher than the original's.
#[derive(Debug)]
pub struct ImprovementVariant {
    pub password: SecretString,
    pub score: f64,
    pub description: String,
    pub category: VariantCategory,
}

/// Output of a single heuristic before it is scored.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Mutation {
    pub password: String,
    pub description: String,
}

/// Result of a heuristic:
/// - `Some(mutation)` - heuristic produced a candidate
/// - `None` - heuristic had nothing to change
pub(crate) type MutationResult = Option<Mutation>;

type MutateFn = fn(&str, &PasswordAnalysis, &mut dyn RngCore) -> MutationResult;

pub(crate) struct Heuristic {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub name: &'static str,
    pub category: VariantCategory,
    pub gate: fn(&PasswordAnalysis) -> bool,
    pub mutate: MutateFn,
}

fn always(_: &PasswordAnalysis) -> bool {
    true
}

fn lacks_digit(analysis: &PasswordAnalysis) -> bool {
    !analysis.classes.has_digit
}

fn lacks_upper(analysis: &PasswordAnalysis) -> bool {
    !analysis.classes.has_upper
}

fn lacks_special(analysis: &PasswordAnalysis) -> bool {
    !analysis.classes.has_special
}

fn has_lower(analysis: &PasswordAnalysis) -> bool {
    analysis.classes.has_lower
}

fn has_weakness(analysis: &PasswordAnalysis) -> bool {
    !analysis.weaknesses().is_empty()
}

/// Evaluated in order; each produces at most one candidate.
pub(crate) const HEURISTICS: [Heuristic; 10] = [
    Heuristic {
        name: "append_digit",
        category: VariantCategory::Simple,
        gate: lacks_digit,
        mutate: append::append_digit,
    },
    Heuristic {
        name: "append_upper",
        category: VariantCategory::Moderate,
        gate: lacks_upper,
        mutate: append::append_upper,
    },
    Heuristic {
        name: "append_special",
        category: VariantCategory::Good,
        gate: lacks_special,
        mutate: append::append_special,
    },
    Heuristic {
        name: "append_digit_special",
        category: VariantCategory::Better,
        gate: always,
        mutate: append::append_digit_special,
    },
    Heuristic {
        name: "append_block",
        category: VariantCategory::Excellent,
        gate: always,
        mutate: append::append_block,
    },
    Heuristic {
        name: "uppercase_letter",
        category: VariantCategory::Moderate,
        gate: has_lower,
        mutate: reshape::uppercase_random_lower,
    },
    Heuristic {
        name: "mirror",
        category: VariantCategory::Strong,
        gate: reshape::can_mirror,
        mutate: reshape::mirror,
    },
    Heuristic {
        name: "leet",
        category: VariantCategory::Creative,
        gate: always,
        mutate: leet::substitute,
    },
    Heuristic {
        name: "fix_weakness",
        category: VariantCategory::Smart,
        gate: has_weakness,
        mutate: weakness::fix_random_weakness,
    },
    Heuristic {
        name: "shuffle",
        category: VariantCategory::Strong,
        gate: reshape::can_shuffle,
        mutate: reshape::shuffle_with_additions,
    },
];

/// Generates up to [`MAX_VARIANTS`] higher-scoring variants using the
/// thread-local random generator.
///
/// # Errors
/// Returns [`AnalyzerError::EmptyPassword`] if the password is empty.
pub fn generate_variants(
    password: &SecretString,
) -> Result<Vec<ImprovementVariant>, AnalyzerError> {
    generate_variants_with_rng(password, &mut rand::rng())
}

/// Generates variants drawing all randomness from `rng`.
///
/// The result holds at most one variant per category, sorted by ascending score.
///
/// # Errors
/// Returns [`AnalyzerError::EmptyPassword`] if the password is empty.
pub fn generate_variants_with_rng<R: Rng>(
    password: &SecretString,
    rng: &mut R,
) -> Result<Vec<ImprovementVariant>, AnalyzerError> {
    let pwd = password.expose_secret();
    let original = analyze_str(pwd)?;
    let rng: &mut dyn RngCore = rng;

    let mut candidates = Vec::new();
    for heuristic in HEURISTICS.iter().filter(|h| (h.gate)(&original)) {
        let Some(mutation) = (heuristic.mutate)(pwd, &original, rng) else {
            continue;
        };
        let score = analyze_str(&mutation.password)?.score;
        if score <= original.score {
            continue;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(heuristic = heuristic.name, score, "variant candidate accepted");

        candidates.push(ImprovementVariant {
            password: SecretString::from(mutation.password),
            score,
            description: mutation.description,
            category: heuristic.category,
        });
    }

    let variants = select_variants(candidates, rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        original_score = original.score,
        count = variants.len(),
        "improvement variants generated"
    );

    Ok(variants)
}

/// Keeps one random candidate per category, samples [`MAX_VARIANTS`] of them
/// when more survive and sorts by ascending score.
fn select_variants<R: Rng + ?Sized>(
    candidates: Vec<ImprovementVariant>,
    rng: &mut R,
) -> Vec<ImprovementVariant> {
    let mut pool: Vec<Option<ImprovementVariant>> = candidates.into_iter().map(Some).collect();
    let mut selected = Vec::new();

    for category in VariantCategory::ALL {
        let indices: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_ref().is_some_and(|v| v.category == category))
            .map(|(i, _)| i)
            .collect();
        if let Some(variant) = indices.choose(rng).and_then(|&i| pool[i].take()) {
            selected.push(variant);
        }
    }

    if selected.len() > MAX_VARIANTS {
        selected.shuffle(rng);
        selected.truncate(MAX_VARIANTS);
    }
    selected.sort_by(|a, b| a.score.total_cmp(&b.score));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    fn variant(category: VariantCategory, score: f64) -> ImprovementVariant {
        ImprovementVariant {
            password: secret("x"),
            score,
            description: String::new(),
            category,
        }
    }

    fn assert_variant_invariants(pwd: &str, seed: u64) {
        let original = analyze_str(pwd).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let variants = generate_variants_with_rng(&secret(pwd), &mut rng).unwrap();

        assert!(variants.len() <= MAX_VARIANTS);
        let categories: HashSet<_> = variants.iter().map(|v| v.category).collect();
        assert_eq!(categories.len(), variants.len(), "duplicate category for {}", pwd);

        for pair in variants.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
        for v in &variants {
            let improved = v.password.expose_secret();
            assert!(v.score > original.score, "{} did not improve {}", improved, pwd);
            assert_eq!(analyze_str(improved).unwrap().score, v.score);
            assert!(improved.chars().count() >= original.length);
            assert!(!v.description.is_empty());
        }
    }

    #[test]
    fn test_variants_invariants_across_seeds() {
        for pwd in ["weak", "test123", "123", "a", "password", "VeryStrongPass123!", "пароль", "ab cd"] {
            for seed in 0..25 {
                assert_variant_invariants(pwd, seed);
            }
        }
    }

    #[test]
    fn test_weak_password_gets_variants() {
        let variants = generate_variants(&secret("weak")).unwrap();
        assert!(!variants.is_empty());
        assert!(variants.len() <= MAX_VARIANTS);
    }

    #[test]
    fn test_every_variant_beats_original() {
        let original = analyze_str("test123").unwrap().score;
        for v in generate_variants(&secret("test123")).unwrap() {
            assert!(v.score > original);
        }
    }

    #[test]
    fn test_empty_password() {
        assert!(matches!(
            generate_variants(&secret("")),
            Err(AnalyzerError::EmptyPassword)
        ));
    }

    #[test]
    fn test_same_seed_same_variants() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_variants_with_rng(&secret("summer"), &mut rng)
                .unwrap()
                .into_iter()
                .map(|v| (v.password.expose_secret().to_string(), v.category))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_maxed_out_password_has_no_variants() {
        let pwd = "Aa1!".repeat(10);
        assert_eq!(analyze_str(&pwd).unwrap().score, 10.0);
        let variants = generate_variants(&secret(&pwd)).unwrap();
        assert!(variants.is_empty());
    }

    #[test]
    fn test_select_keeps_one_per_category() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidates = vec![
            variant(VariantCategory::Strong, 6.0),
            variant(VariantCategory::Strong, 4.0),
            variant(VariantCategory::Simple, 3.0),
        ];
        let selected = select_variants(candidates, &mut rng);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].category, VariantCategory::Simple);
        assert_eq!(selected[1].category, VariantCategory::Strong);
    }

    #[test]
    fn test_select_caps_and_sorts() {
        let mut rng = StdRng::seed_from_u64(9);
        let candidates = VariantCategory::ALL
            .iter()
            .enumerate()
            .map(|(i, &c)| variant(c, 9.0 - i as f64))
            .collect();
        let selected = select_variants(candidates, &mut rng);
        assert_eq!(selected.len(), MAX_VARIANTS);
        for pair in selected.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_heuristic_table_order() {
        let names: Vec<_> = HEURISTICS.iter().map(|h| h.name).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "append_digit");
        assert_eq!(names[9], "shuffle");
    }

    #[test]
    fn test_gates() {
        let strong = analyze_str("VeryStrongPass123!").unwrap();
        let gated: Vec<_> = HEURISTICS
            .iter()
            .filter(|h| (h.gate)(&strong))
            .map(|h| h.name)
            .collect();
        assert_eq!(
            gated,
            vec!["append_digit_special", "append_block", "uppercase_letter", "mirror", "leet"]
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(VariantCategory::Excellent.to_string(), "excellent");
        assert_eq!(VariantCategory::ALL.len(), 8);
    }
}

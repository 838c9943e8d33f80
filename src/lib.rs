//! Password entropy library
//!
//! Scores passwords from character-class diversity and length, proposes
//! randomized higher-scoring variants and derives new passwords
//! deterministically from a seed phrase.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_SYNTH_MIN_LENGTH` / `PWD_SYNTH_MAX_LENGTH`: bounds used by
//!   [`SynthesisLimits::from_env`] (default: `8` / `50`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_entropy::{analyze_password, generate_variants, recommendation_text, synthesize};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::from("summer2024".to_string());
//!
//! let analysis = analyze_password(&password).expect("non-empty password");
//! println!("Score: {}/10 ({} bits)", analysis.score, analysis.entropy_bits);
//!
//! for variant in generate_variants(&password).expect("non-empty password") {
//!     println!("{} [{}] {}", variant.score, variant.category, recommendation_text(variant.score));
//! }
//!
//! let seed = SecretString::from("correct horse".to_string());
//! let generated = synthesize(&seed, 14).expect("non-empty seed");
//! println!("Generated: {}", generated.expose_secret());
//! ```

// Internal modules
mod advice;
mod analysis;
mod charset;
mod config;
mod error;
mod synthesizer;
mod variants;

// Public API
pub use advice::{Recommendation, is_affirmative, recommendation_text};
pub use analysis::{
    MIN_RECOMMENDED_LENGTH, PasswordAnalysis, Weakness, alphabet_size, analyze_password,
    entropy_bits, round_to_tenth, score_from_entropy,
};
pub use charset::{CharClass, CharacterClasses, classify};
pub use config::SynthesisLimits;
pub use error::AnalyzerError;
pub use synthesizer::{DEFAULT_TARGET_LENGTH, synthesize, synthesize_improved};
pub use variants::{
    ImprovementVariant, MAX_VARIANTS, VariantCategory, generate_variants,
    generate_variants_with_rng,
};

#[cfg(feature = "async")]
pub use analysis::analyze_password_tx;

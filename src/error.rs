//! Error type shared by analysis, variant generation and synthesis.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Seed phrase must not be empty")]
    EmptySeed,
    #[error("Target length must be at least 1, got {0}")]
    InvalidTargetLength(usize),
    #[error("Entropy cannot be negative: {0}")]
    NegativeEntropy(f64),
}

impl AnalyzerError {
    /// Returns `true` for errors caused by caller input, which an interactive
    /// caller can recover from by asking again.
    ///
    /// `NegativeEntropy` signals a broken invariant and is never user-recoverable.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AnalyzerError::NegativeEntropy(_))
    }
}

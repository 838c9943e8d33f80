//! Complexity scorer - alphabet size, entropy estimate and 0-10 score.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{CharClass, CharacterClasses, classify};
use crate::error::AnalyzerError;

/// Passwords shorter than this are reported as [`Weakness::TooShort`].
pub const MIN_RECOMMENDED_LENGTH: usize = 8;

const MAX_SCORE: f64 = 10.0;

/// Result of scoring a single password. Built fresh on every analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordAnalysis {
    /// Score in `[0, 10]`, one decimal place.
    pub score: f64,
    /// Entropy in bits, one decimal place.
    pub entropy_bits: f64,
    pub classes: CharacterClasses,
    /// Length in characters.
    pub length: usize,
    pub alphabet_size: usize,
}

/// A gap in a password that the smart variant heuristic can fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weakness {
    NoDigits,
    NoUppercase,
    NoSpecial,
    TooShort(usize),
}

impl std::fmt::Display for Weakness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weakness::NoDigits => write!(f, "no digits"),
            Weakness::NoUppercase => write!(f, "no uppercase letters"),
            Weakness::NoSpecial => write!(f, "no special characters"),
            Weakness::TooShort(len) => write!(f, "too short ({} characters)", len),
        }
    }
}

impl PasswordAnalysis {
    /// Lists the weaknesses in a fixed order: digits, uppercase, special, length.
    pub fn weaknesses(&self) -> Vec<Weakness> {
        let mut found = Vec::new();
        if !self.classes.has_digit {
            found.push(Weakness::NoDigits);
        }
        if !self.classes.has_upper {
            found.push(Weakness::NoUppercase);
        }
        if !self.classes.has_special {
            found.push(Weakness::NoSpecial);
        }
        if self.length < MIN_RECOMMENDED_LENGTH {
            found.push(Weakness::TooShort(self.length));
        }
        found
    }
}

/// Sums the fixed class sizes (10, 26, 26, 32) over the classes present.
pub fn alphabet_size(classes: &CharacterClasses) -> usize {
    CharClass::ALL
        .into_iter()
        .filter(|&class| classes.contains(class))
        .map(CharClass::size)
        .sum()
}

/// `log2(alphabet_size ^ length)`, computed in log form so long inputs do not overflow.
///
/// Returns 0 when either argument is 0.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if length == 0 || alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

/// Rounds half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Maps entropy to the 0-10 score: `min(entropy / 10, 10)` rounded to one decimal.
///
/// # Errors
/// Returns [`AnalyzerError::NegativeEntropy`] for negative input.
pub fn score_from_entropy(entropy: f64) -> Result<f64, AnalyzerError> {
    if entropy < 0.0 {
        return Err(AnalyzerError::NegativeEntropy(entropy));
    }
    if entropy == 0.0 {
        return Ok(0.0);
    }
    Ok(round_to_tenth((entropy / 10.0).min(MAX_SCORE)))
}

pub(crate) fn analyze_str(password: &str) -> Result<PasswordAnalysis, AnalyzerError> {
    if password.is_empty() {
        return Err(AnalyzerError::EmptyPassword);
    }

    let classes = classify(password);
    let length = password.chars().count();
    let alphabet_size = alphabet_size(&classes);
    let entropy = entropy_bits(length, alphabet_size);
    let score = score_from_entropy(entropy)?.clamp(0.0, MAX_SCORE);

    Ok(PasswordAnalysis {
        score,
        entropy_bits: round_to_tenth(entropy),
        classes,
        length,
        alphabet_size,
    })
}

/// Scores a password from its character-class diversity and length.
///
/// # Errors
/// Returns [`AnalyzerError::EmptyPassword`] if the password is empty.
pub fn analyze_password(password: &SecretString) -> Result<PasswordAnalysis, AnalyzerError> {
    let analysis = analyze_str(password.expose_secret())?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = analysis.length,
        alphabet = analysis.alphabet_size,
        score = analysis.score,
        "password analyzed"
    );

    Ok(analysis)
}

/// Async version that debounces, then sends the analysis via channel.
///
/// Nothing is sent if `token` is cancelled before the analysis runs.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordAnalysis, AnalyzerError>>,
) {
    use std::time::Duration;

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password analysis cancelled");
        return;
    }

    let analysis = analyze_password(password);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::from("TestPass123!".to_string());

        analyze_password_tx(&pwd, token, tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert!(analysis.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_password_tx_forwards_errors() {
        let (tx, mut rx) = mpsc::channel(1);
        let pwd = SecretString::from(String::new());

        analyze_password_tx(&pwd, CancellationToken::new(), tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis, Err(AnalyzerError::EmptyPassword));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::from("SomePassword123!".to_string());

        analyze_password_tx(&pwd, token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}

//! Recommendation tiers and confirmation parsing for interactive callers.

/// Tokens accepted as "yes", compared after trimming and lowercasing.
const AFFIRMATIVE: [&str; 5] = ["да", "д", "y", "yes", "1"];

/// Verdict shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Minimal,
    Good,
    Excellent,
    Superb,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            Recommendation::Minimal
        } else if score < 6.0 {
            Recommendation::Good
        } else if score < 8.0 {
            Recommendation::Excellent
        } else {
            Recommendation::Superb
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::Minimal => "MINIMAL IMPROVEMENT - still a weak password",
            Recommendation::Good => "GOOD IMPROVEMENT - acceptable security",
            Recommendation::Excellent => "EXCELLENT IMPROVEMENT - good security",
            Recommendation::Superb => "SUPERB - very high level of security",
        }
    }
}

/// Returns the recommendation text for a score in `[0, 10]`.
pub fn recommendation_text(score: f64) -> &'static str {
    Recommendation::from_score(score).text()
}

/// Checks whether a user response means "yes".
pub fn is_affirmative(response: &str) -> bool {
    let normalized = response.trim().to_lowercase();
    AFFIRMATIVE.contains(&normalized.as_str())
}

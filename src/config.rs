//! Target-length limits applied by interactive callers before synthesis.

use crate::synthesizer::DEFAULT_TARGET_LENGTH;

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_MAX_LENGTH: usize = 50;

pub const MIN_LENGTH_ENV: &str = "PWD_SYNTH_MIN_LENGTH";
pub const MAX_LENGTH_ENV: &str = "PWD_SYNTH_MAX_LENGTH";

/// Floor, ceiling and default for requested password lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisLimits {
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
}

impl Default for SynthesisLimits {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            default_length: DEFAULT_TARGET_LENGTH,
        }
    }
}

fn env_length(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring invalid {} value: {:?}", key, raw);
            None
        }
    }
}

impl SynthesisLimits {
    /// Returns the limits, with bounds overridden from the environment.
    ///
    /// Priority:
    /// 1. Environment variables `PWD_SYNTH_MIN_LENGTH` / `PWD_SYNTH_MAX_LENGTH`
    /// 2. Defaults `8` / `50`
    ///
    /// An inverted pair falls back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let min_length = env_length(MIN_LENGTH_ENV).unwrap_or(defaults.min_length);
        let max_length = env_length(MAX_LENGTH_ENV).unwrap_or(defaults.max_length);

        if min_length > max_length {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Length limits inverted ({} > {}), using defaults",
                min_length,
                max_length
            );
            return defaults;
        }

        Self {
            min_length,
            max_length,
            default_length: defaults.default_length.clamp(min_length, max_length),
        }
    }

    /// Resolves a requested length: the default when `None`, otherwise
    /// clamped to `[min_length, max_length]`.
    pub fn clamp(&self, requested: Option<usize>) -> usize {
        match requested {
            None => self.default_length,
            Some(length) => length.clamp(self.min_length, self.max_length),
        }
    }
}

//! Generator configuration.

use crate::error::{OrderingError, OrderingResult};

/// Environment variable overriding the default permutation limit.
pub const MAX_PERMUTATIONS_ENV: &str = "QUIZIT_MAX_PERMUTATIONS";

/// Number of orderings returned when the caller does not choose a limit.
pub const DEFAULT_MAX_PERMUTATIONS: usize = 3;

/// Configuration for [`crate::OrderingGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Upper bound on the number of orderings returned after selection.
    pub max_permutations: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_permutations: DEFAULT_MAX_PERMUTATIONS,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with an explicit limit.
    ///
    /// Returns [`OrderingError::InvalidLimit`] when `max_permutations` is zero.
    pub fn new(max_permutations: usize) -> OrderingResult<Self> {
        Self::default().with_max_permutations(max_permutations)
    }

    /// Set the permutation limit.
    pub fn with_max_permutations(mut self, max_permutations: usize) -> OrderingResult<Self> {
        if max_permutations == 0 {
            return Err(OrderingError::InvalidLimit {
                value: max_permutations,
            });
        }
        self.max_permutations = max_permutations;
        Ok(self)
    }

    /// Create from environment variables
    ///
    /// Reads:
    /// - QUIZIT_MAX_PERMUTATIONS (optional, default: 3)
    pub fn from_env() -> OrderingResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> OrderingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(MAX_PERMUTATIONS_ENV) {
            None => Ok(Self::default()),
            Some(raw) => {
                let value = raw.trim().parse::<usize>().map_err(|_| {
                    OrderingError::InvalidConfig(format!(
                        "{MAX_PERMUTATIONS_ENV} must be a positive integer, got {raw:?}"
                    ))
                })?;
                Self::new(value)
            }
        }
    }
}

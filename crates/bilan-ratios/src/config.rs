//! Ratio engine configuration.

use serde::{Deserialize, Serialize};

/// Default denominator stabilizer.
///
/// Added to every ratio denominator, so a true zero denominator yields a large
/// finite value instead of an infinity. Growth rates are not stabilized.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Configuration for the ratio engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioConfig {
    /// Value added to ratio denominators (default: 1e-9)
    pub epsilon: f64,
}

impl RatioConfig {
    /// Returns a copy of this configuration with a different epsilon.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

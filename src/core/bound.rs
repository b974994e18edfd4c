use std::fmt::Display;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{core::utils::SampleFloat, errors::ConfigError, Float};

/// The closed interval `[minimum, maximum]` every coordinate of the swarm lives in.
///
/// The same interval bounds both positions *and* velocities: the position limits double as the
/// velocity clamp, and recorded runs depend on that behavior (see the crate-level docs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    minimum: Float,
    maximum: Float,
}

impl SearchSpace {
    /// Creates a new search space from the given limits.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::InvalidSearchSpace`] unless `minimum < maximum` and both
    /// limits are finite.
    pub fn new(minimum: Float, maximum: Float) -> Result<Self, ConfigError> {
        if !(minimum.is_finite() && maximum.is_finite() && minimum < maximum) {
            return Err(ConfigError::InvalidSearchSpace { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }
    /// Returns the lower limit.
    pub const fn minimum(&self) -> Float {
        self.minimum
    }
    /// Returns the upper limit.
    pub const fn maximum(&self) -> Float {
        self.maximum
    }
    /// Clamps `value` into the interval.
    pub fn clip(&self, value: Float) -> Float {
        value.clamp(self.minimum, self.maximum)
    }
    /// Checks whether the given `value` lies inside the interval.
    pub fn contains(&self, value: Float) -> bool {
        value >= self.minimum && value <= self.maximum
    }
    /// Draws a uniform random value from the interval.
    pub fn sample(&self, rng: &mut Rng) -> Float {
        rng.range(self.minimum, self.maximum)
    }
}

impl Display for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.minimum, self.maximum)
    }
}

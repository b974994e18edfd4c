use thiserror::Error;

use crate::Float;

/// Errors raised while validating a [`PSOConfig`](`crate::swarm::PSOConfig`) or constructing a
/// [`ParticleSwarmState`](`crate::swarm::ParticleSwarmState`).
///
/// All configuration problems are detected eagerly at construction; the iteration loop itself
/// never raises one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The search space is inverted or degenerate.
    #[error("invalid search space: minimum ({minimum}) must be strictly less than maximum ({maximum}) and both must be finite")]
    InvalidSearchSpace {
        /// The offending lower limit.
        minimum: Float,
        /// The offending upper limit.
        maximum: Float,
    },
    /// The swarm must contain at least one particle.
    #[error("particle_amount must be at least 1")]
    EmptySwarm,
    /// The search space must have at least one coordinate.
    #[error("dimensions must be at least 1")]
    ZeroDimensions,
    /// The range for the stochastic scaling factors is inverted.
    #[error("invalid stochastic range: r_minimum ({minimum}) must not exceed r_maximum ({maximum})")]
    InvalidStochasticRange {
        /// The offending lower limit.
        minimum: Float,
        /// The offending upper limit.
        maximum: Float,
    },
    /// A scaling coefficient is negative.
    #[error("coefficient {name} must be non-negative (got {value})")]
    NegativeCoefficient {
        /// The name of the offending coefficient.
        name: &'static str,
        /// The offending value.
        value: Float,
    },
    /// A custom position initializer does not match the configured swarm shape.
    #[error("custom initial positions must contain {expected_particles} vectors of length {expected_dimensions}")]
    CustomPositionShape {
        /// The configured number of particles.
        expected_particles: usize,
        /// The configured number of coordinates per particle.
        expected_dimensions: usize,
    },
}

/// Error raised when querying a history that has not recorded any value yet.
///
/// Position and velocity histories are populated at construction, so this can only occur for
/// personal/global best queries before the first iteration completes (in particular, after a
/// run with `iteration_amount = 0`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// No value of the named field has been recorded.
    #[error("no {0} has been recorded yet")]
    Empty(&'static str),
}

/// Errors raised by [`PSO::optimize`](`crate::swarm::PSO::optimize`).
///
/// The generic `E` is the error type of the user-supplied
/// [`CostFunction`](`crate::traits::CostFunction`); objectives which cannot fail should use
/// [`std::convert::Infallible`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError<E> {
    /// The optimizer has already run; the iteration loop executes exactly once per optimizer.
    #[error("optimize() was already called on this optimizer")]
    AlreadyOptimized,
    /// The objective function failed. The failure is not retried or swallowed; the recorded
    /// state remains consistent through the last fully committed pass.
    #[error("objective function evaluation failed")]
    Objective(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ConfigError::InvalidSearchSpace {
            minimum: 2.0,
            maximum: -2.0,
        };
        assert!(e.to_string().contains("strictly less"));
        let e = HistoryError::Empty("global best");
        assert_eq!(e.to_string(), "no global best has been recorded yet");
        let e: RunError<std::convert::Infallible> = RunError::AlreadyOptimized;
        assert!(e.to_string().contains("already called"));
    }
}

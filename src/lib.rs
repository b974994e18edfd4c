//! `bhramari` (/bɹɑːˈmɑːɹi/), named after the Hindu goddess of bees, is a particle swarm
//! optimization (PSO) engine: a population-based, derivative-free minimizer for a scalar
//! objective function over an axis-aligned box in $`\mathbb{R}^n`$. The user implements the
//! [`CostFunction`](`traits::CostFunction`) trait on some struct which takes a vector of
//! parameters and returns a single-valued [`Result`] ($`f(\mathbb{R}^n) \to \mathbb{R}`$,
//! lower is better).
//!
//! Unlike most optimizers, the swarm here is fully *recorded*: every particle's position,
//! velocity, and personal best, along with the swarm's global best, is kept as an append-only
//! per-iteration history inside a [`ParticleSwarmState`](`swarm::ParticleSwarmState`).
//! Downstream consumers (tables, plots, animations) read that history after the run; the
//! optimizer never depends on them. All recorded state is [`serde::Serialize`], so exporting a
//! run for external tooling is a one-liner.
//!
//! # Key features
//! * An explicit, seedable random number generator ([`fastrand::Rng`]) threaded through
//!   construction and the iteration loop: two runs with the same seed and configuration
//!   produce bit-identical histories.
//! * A reproducible precision contract: every fitness value, velocity, and position is rounded
//!   to four decimal places before being stored or compared (see [`core::utils::round4`]).
//! * Ties always favor the incumbent: a personal or global best is only replaced by a strictly
//!   better candidate, and equal-fitness candidates resolve to the lowest particle index.
//!
//! # Quick start
//!
//! Minimize $`f(x) = (3x^2 + 2x - 2)^2`$ over $`[-2, 2]`$ with ten particles:
//!
//! ```rust
//! use bhramari::prelude::*;
//! use bhramari::test_functions::SquaredQuadratic;
//!
//! let config = PSOConfig::new(-2.0, 2.0, 10, 1, 100)
//!     .with_c1(0.5)
//!     .with_c2(1.0)
//!     .with_omega(1.0);
//! let mut pso = PSO::new(config, fastrand::Rng::with_seed(0)).unwrap();
//! pso.optimize(&SquaredQuadratic::new(3.0, 2.0, -2.0), &mut ())
//!     .unwrap();
//! let summary = pso.summarize().unwrap();
//! println!("{}", summary);
//! assert_eq!(summary.iterations, 100);
//! assert!((-2.0..=2.0).contains(&summary.x[0]));
//! ```
//!
//! # Bounds
//!
//! The search space is a single closed interval shared by every coordinate. The *velocity* is
//! deliberately clipped into the same interval as the position rather than a separate velocity
//! clamp; recorded runs depend on this, so it is part of the crate's reproducibility contract.
//! See [`core::SearchSpace`].
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing domain-neutral building blocks ([`SearchSpace`](`core::SearchSpace`),
/// [`Point`](`core::Point`), [`History`](`core::History`), [`SwarmSummary`](`core::SwarmSummary`)).
pub mod core;
/// Module containing the error types returned by this crate.
pub mod errors;
/// Module containing the swarm state and the [`PSO`](`swarm::PSO`) optimizer.
pub mod swarm;
/// Module containing standard functions for testing the optimizer.
pub mod test_functions;
/// Module containing the [`CostFunction`](`traits::CostFunction`) trait.
pub mod traits;

/// A module containing everything someone should need to use this crate for non-development
/// purposes.
pub mod prelude {
    pub use crate::{
        core::{Point, SearchSpace, SwarmSummary},
        errors::{ConfigError, HistoryError, RunError},
        swarm::{ParticleSwarmState, PositionInitializer, PSOConfig, PSO},
        traits::CostFunction,
        DVector, Float,
    };
}

#[cfg(not(feature = "f32"))]
/// A type alias for the floating-point precision used by the crate (default: [`f64`], or
/// [`f32`] with the `f32` feature enabled).
pub type Float = f64;

#[cfg(feature = "f32")]
/// A type alias for the floating-point precision used by the crate (default: [`f64`], or
/// [`f32`] with the `f32` feature enabled).
pub type Float = f32;

pub use nalgebra::DVector;

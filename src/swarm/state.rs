use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{utils::round4, History, Point, SearchSpace},
    errors::{ConfigError, HistoryError},
    swarm::ParticleHistory,
    DVector, Float,
};

/// Methods to choose the initial positions of the particles in a swarm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PositionInitializer {
    /// Draw each coordinate of each particle independently and uniformly at random from the
    /// search space (rounded to four decimal places, like every other recorded coordinate).
    #[default]
    RandomUniform,
    /// Start the particles from the given positions (one vector per particle). Coordinates are
    /// rounded and clipped into the search space.
    Custom(Vec<DVector<Float>>),
}

impl PositionInitializer {
    fn init_positions(
        &self,
        rng: &mut Rng,
        space: SearchSpace,
        particle_amount: usize,
        dimensions: usize,
    ) -> Result<Vec<DVector<Float>>, ConfigError> {
        match self {
            Self::RandomUniform => Ok((0..particle_amount)
                .map(|_| {
                    DVector::from_iterator(
                        dimensions,
                        (0..dimensions).map(|_| space.clip(round4(space.sample(rng)))),
                    )
                })
                .collect()),
            Self::Custom(positions) => {
                if positions.len() != particle_amount
                    || positions.iter().any(|p| p.len() != dimensions)
                {
                    return Err(ConfigError::CustomPositionShape {
                        expected_particles: particle_amount,
                        expected_dimensions: dimensions,
                    });
                }
                Ok(positions
                    .iter()
                    .map(|p| p.map(|x_d| space.clip(round4(x_d))))
                    .collect())
            }
        }
    }
}

/// The recorded state of the swarm: every particle's per-iteration history plus the swarm-wide
/// global-best history.
///
/// The state is created once at optimizer construction and mutated only by the optimizer's
/// iteration loop, which appends once per field per iteration and never overwrites. Once
/// the configured iteration count has run, the state is effectively immutable and downstream
/// consumers (tables, plots) read it through the accessors here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSwarmState {
    space: SearchSpace,
    dimensions: usize,
    particles: Vec<ParticleHistory>,
    global_bests: History<Point>,
}

impl ParticleSwarmState {
    /// Allocates the swarm: initial positions come from the given initializer, initial
    /// velocities are zero, and the personal/global best histories stay empty until the first
    /// iteration completes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `particle_amount` or `dimensions` is zero, or if a custom
    /// initializer does not match the swarm shape.
    pub fn new(
        space: SearchSpace,
        particle_amount: usize,
        dimensions: usize,
        initializer: &PositionInitializer,
        rng: &mut Rng,
    ) -> Result<Self, ConfigError> {
        if particle_amount < 1 {
            return Err(ConfigError::EmptySwarm);
        }
        if dimensions < 1 {
            return Err(ConfigError::ZeroDimensions);
        }
        let particles = initializer
            .init_positions(rng, space, particle_amount, dimensions)?
            .into_iter()
            .map(|position| ParticleHistory::new(position, DVector::zeros(dimensions)))
            .collect();
        Ok(Self {
            space,
            dimensions,
            particles,
            global_bests: History::default(),
        })
    }

    /// The search space shared by every coordinate.
    pub const fn space(&self) -> SearchSpace {
        self.space
    }
    /// The number of coordinates per particle.
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }
    /// The number of particles in the swarm.
    pub fn particle_amount(&self) -> usize {
        self.particles.len()
    }
    /// All particle records, in stable index order.
    pub fn particles(&self) -> &[ParticleHistory] {
        &self.particles
    }
    /// The record of one particle.
    ///
    /// # Panics
    ///
    /// Panics if `index >= particle_amount`.
    pub fn particle(&self, index: usize) -> &ParticleHistory {
        &self.particles[index]
    }

    /// The most recently recorded position of one particle.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] if nothing has been recorded; see
    /// [`ParticleHistory::latest_position`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= particle_amount`.
    pub fn latest_position(&self, index: usize) -> Result<&DVector<Float>, HistoryError> {
        self.particles[index].latest_position()
    }
    /// The most recently recorded velocity of one particle.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] if nothing has been recorded; see
    /// [`ParticleHistory::latest_velocity`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= particle_amount`.
    pub fn latest_velocity(&self, index: usize) -> Result<&DVector<Float>, HistoryError> {
        self.particles[index].latest_velocity()
    }
    /// The most recently recorded personal best of one particle.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] before the first iteration completes.
    ///
    /// # Panics
    ///
    /// Panics if `index >= particle_amount`.
    pub fn latest_personal_best(&self, index: usize) -> Result<&Point, HistoryError> {
        self.particles[index].latest_personal_best()
    }
    /// The most recently recorded personal best of every particle, in index order.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] before the first iteration completes.
    pub fn latest_personal_bests(&self) -> Result<Vec<&Point>, HistoryError> {
        self.particles
            .iter()
            .map(ParticleHistory::latest_personal_best)
            .collect()
    }
    /// The most recently recorded global best.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] before the first iteration completes.
    pub fn latest_global_best(&self) -> Result<&Point, HistoryError> {
        self.global_bests
            .latest()
            .ok_or(HistoryError::Empty("global best"))
    }
    /// The ordered global-best history, indexed by iteration.
    pub const fn global_best_history(&self) -> &History<Point> {
        &self.global_bests
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [ParticleHistory] {
        &mut self.particles
    }
    pub(crate) fn push_global_best(&mut self, best: Point) {
        self.global_bests.push(best);
    }
}

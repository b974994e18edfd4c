use fastrand::Rng;

use crate::{
    core::{
        utils::{round4, SampleFloat},
        Point, SearchSpace, SwarmSummary,
    },
    errors::{ConfigError, HistoryError, RunError},
    swarm::{ParticleSwarmState, PositionInitializer},
    traits::CostFunction,
    DVector, Float,
};

/// The configuration for the [`PSO`] optimizer.
///
/// [`PSOConfig::new`] takes the required shape of the problem; the coefficients default to
/// $`c_1 = 0.5`$, $`c_2 = 1`$, $`\omega = 1`$, and $`r \in [0, 1]`$ and can be changed with the
/// chainable setters. Nothing is validated until [`PSO::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct PSOConfig {
    /// The lower limit of the search space (shared by positions and velocities).
    pub parameter_minimum: Float,
    /// The upper limit of the search space (shared by positions and velocities).
    pub parameter_maximum: Float,
    /// The number of particles in the swarm.
    pub particle_amount: usize,
    /// The number of coordinates per particle.
    pub dimensions: usize,
    /// The cognitive weight $`c_1`$ which scales the pull toward a particle's personal best.
    pub c1: Float,
    /// The social weight $`c_2`$ which scales the pull toward the swarm's global best.
    pub c2: Float,
    /// The lower limit for the two stochastic scaling factors drawn every particle every
    /// iteration.
    pub r_minimum: Float,
    /// The upper limit for the stochastic scaling factors.
    pub r_maximum: Float,
    /// The inertial weight $`\omega`$ which scales a particle's carried-over velocity.
    pub omega: Float,
    /// The number of iterations to run. There is no convergence or stagnation test; the loop
    /// always runs exactly this many iterations.
    pub iteration_amount: usize,
    /// How the initial particle positions are chosen.
    pub position_initializer: PositionInitializer,
}

impl PSOConfig {
    /// Creates a configuration with the given problem shape and the default coefficients.
    pub const fn new(
        parameter_minimum: Float,
        parameter_maximum: Float,
        particle_amount: usize,
        dimensions: usize,
        iteration_amount: usize,
    ) -> Self {
        Self {
            parameter_minimum,
            parameter_maximum,
            particle_amount,
            dimensions,
            c1: 0.5,
            c2: 1.0,
            r_minimum: 0.0,
            r_maximum: 1.0,
            omega: 1.0,
            iteration_amount,
            position_initializer: PositionInitializer::RandomUniform,
        }
    }
    /// Sets the cognitive weight $`c_1`$ (default = `0.5`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ (default = `1.0`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `1.0`).
    pub const fn with_omega(mut self, value: Float) -> Self {
        self.omega = value;
        self
    }
    /// Sets the sampling range for the stochastic scaling factors `r1` and `r2`
    /// (default = `[0, 1]`). A degenerate range (`minimum == maximum`) pins both factors.
    pub const fn with_r_range(mut self, minimum: Float, maximum: Float) -> Self {
        self.r_minimum = minimum;
        self.r_maximum = maximum;
        self
    }
    /// Sets the [`PositionInitializer`] (default = [`PositionInitializer::RandomUniform`]).
    pub fn with_position_initializer(mut self, initializer: PositionInitializer) -> Self {
        self.position_initializer = initializer;
        self
    }

    /// Validates the configuration and builds the search space.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid box, an inverted or non-finite stochastic
    /// range, or a negative coefficient. Swarm-shape errors are reported by
    /// [`ParticleSwarmState::new`].
    pub fn validate(&self) -> Result<SearchSpace, ConfigError> {
        let space = SearchSpace::new(self.parameter_minimum, self.parameter_maximum)?;
        if !(self.r_minimum.is_finite()
            && self.r_maximum.is_finite()
            && self.r_minimum <= self.r_maximum)
        {
            return Err(ConfigError::InvalidStochasticRange {
                minimum: self.r_minimum,
                maximum: self.r_maximum,
            });
        }
        for (name, value) in [("c1", self.c1), ("c2", self.c2), ("omega", self.omega)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeCoefficient { name, value });
            }
        }
        Ok(space)
    }
}

/// The particle swarm optimizer.
///
/// Each iteration runs three strictly ordered passes over the swarm:
///
/// 1. a personal-best pass, which evaluates every particle's current position and keeps the
///    better of it and the incumbent personal best (ties keep the incumbent);
/// 2. a global-best pass, which takes the first-occurrence minimum over the latest personal
///    bests (ties keep the incumbent global best, and equal candidates resolve to the lowest
///    particle index);
/// 3. a velocity/position pass, which applies
///    ```math
///    v_i^{t+1} = \omega v_i^t + c_1 r_1 (p_i^t - x_i^t) + c_2 r_2 (g^t - x_i^t)
///    ```
///    componentwise, with `r1` and `r2` drawn uniformly per particle and shared across that
///    particle's coordinates, then clips *both* the new velocity and the new position into the
///    search space (the shared bound is deliberate, see the crate docs) and records them.
///
/// Every recorded value is rounded to four decimal places first. The loop runs exactly
/// [`PSOConfig::iteration_amount`] times; there is no early exit.
pub struct PSO {
    config: PSOConfig,
    space: SearchSpace,
    state: ParticleSwarmState,
    rng: Rng,
    n_f_evals: usize,
    iterations_run: usize,
    started: bool,
}

impl PSO {
    /// Creates a new optimizer, validating the full configuration eagerly and drawing the
    /// initial particle positions from the given random number generator.
    ///
    /// Seed the generator ([`fastrand::Rng::with_seed`]) to make the entire run reproducible:
    /// identical configuration and seed produce bit-identical histories.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid configuration value found.
    pub fn new(config: PSOConfig, mut rng: Rng) -> Result<Self, ConfigError> {
        let space = config.validate()?;
        let state = ParticleSwarmState::new(
            space,
            config.particle_amount,
            config.dimensions,
            &config.position_initializer,
            &mut rng,
        )?;
        Ok(Self {
            config,
            space,
            state,
            rng,
            n_f_evals: 0,
            iterations_run: 0,
            started: false,
        })
    }

    /// The recorded swarm, including mid-run state after a failed [`PSO::optimize`] call.
    pub const fn state(&self) -> &ParticleSwarmState {
        &self.state
    }
    /// The configuration this optimizer was built with.
    pub const fn config(&self) -> &PSOConfig {
        &self.config
    }

    /// Runs the iteration loop to completion.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::AlreadyOptimized`] if this optimizer has run (or started to run)
    /// before, and [`RunError::Objective`] if the objective function fails. A failure is
    /// propagated immediately and the recorded state is left consistent through the last
    /// fully committed pass.
    pub fn optimize<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), RunError<E>> {
        if self.started {
            return Err(RunError::AlreadyOptimized);
        }
        self.started = true;
        for _ in 0..self.config.iteration_amount {
            self.update_personal_bests(func, user_data)?;
            self.update_global_best();
            self.advance_particles();
            self.iterations_run += 1;
        }
        Ok(())
    }

    /// Summarizes the run: the final global best, its fitness, and the evaluation counts.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] if no global best has been recorded, which happens
    /// before [`PSO::optimize`] and after a run with `iteration_amount = 0`.
    pub fn summarize(&self) -> Result<SwarmSummary, HistoryError> {
        let gbest = self.state.latest_global_best()?;
        Ok(SwarmSummary {
            space: self.space,
            particle_amount: self.state.particle_amount(),
            iterations: self.iterations_run,
            x: gbest.x.iter().copied().collect(),
            fx: gbest.fx,
            cost_evals: self.n_f_evals,
        })
    }

    /// The rounded-fitness contract: every comparison the optimizer makes uses this value.
    fn fitness<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        x: &DVector<Float>,
        user_data: &mut U,
    ) -> Result<Float, RunError<E>> {
        self.n_f_evals += 1;
        func.evaluate(x, user_data)
            .map(round4)
            .map_err(RunError::Objective)
    }

    fn update_personal_bests<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), RunError<E>> {
        // The pass is buffered and committed only once every evaluation has succeeded, so an
        // objective failure cannot leave some particles' bests advanced and others not.
        let mut new_bests = Vec::with_capacity(self.state.particle_amount());
        for index in 0..self.state.particle_amount() {
            let x = self.state.particle(index).current_position().clone();
            let fx = self.fitness(func, &x, user_data)?;
            let new_best = match self.state.particle(index).personal_bests().latest() {
                // on a tie, the incumbent survives
                Some(incumbent) if incumbent.fx <= fx => incumbent.clone(),
                _ => Point::new(x, fx),
            };
            new_bests.push(new_best);
        }
        for (particle, best) in self.state.particles_mut().iter_mut().zip(new_bests) {
            particle.push_personal_best(best);
        }
        Ok(())
    }

    fn update_global_best(&mut self) {
        // first-occurrence argmin: scanning in index order with a strict comparison keeps the
        // lowest-indexed particle on ties
        let mut best: Option<&Point> = None;
        for particle in self.state.particles() {
            if let Some(candidate) = particle.personal_bests().latest() {
                if best.map_or(true, |b| candidate.fx < b.fx) {
                    best = Some(candidate);
                }
            }
        }
        let Some(best) = best else { return };
        let chosen = match self.state.global_best_history().latest() {
            Some(incumbent) if incumbent.fx <= best.fx => incumbent.clone(),
            _ => best.clone(),
        };
        self.state.push_global_best(chosen);
    }

    fn advance_particles(&mut self) {
        let Ok(gbest) = self.state.latest_global_best().map(|p| p.x.clone()) else {
            return;
        };
        let PSOConfig {
            c1,
            c2,
            omega,
            r_minimum,
            r_maximum,
            ..
        } = self.config;
        let space = self.space;
        for particle in self.state.particles_mut() {
            // one r1/r2 pair per particle, shared across its coordinates
            let r1 = round4(self.rng.range(r_minimum, r_maximum));
            let r2 = round4(self.rng.range(r_minimum, r_maximum));
            let pbest = &particle.current_personal_best().x;
            let x_old = particle.current_position();
            let v_old = particle.current_velocity();
            let dim = x_old.len();
            let v_new = DVector::from_iterator(
                dim,
                (0..dim).map(|d| {
                    let raw = omega * v_old[d]
                        + c1 * r1 * (pbest[d] - x_old[d])
                        + c2 * r2 * (gbest[d] - x_old[d]);
                    space.clip(round4(raw))
                }),
            );
            let x_new = DVector::from_iterator(
                dim,
                (0..dim).map(|d| space.clip(round4(x_old[d] + v_new[d]))),
            );
            particle.push_velocity(v_new);
            particle.push_position(x_new);
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::{
    core::{History, Point},
    errors::HistoryError,
    DVector, Float,
};

/// The full per-iteration record of a single particle.
///
/// After `T` iterations the position and velocity histories hold `T + 1` entries (index 0 is
/// the pre-optimization initial state, with zero velocity) and the personal-best history holds
/// `T` entries. Every entry lies inside the swarm's
/// [`SearchSpace`](`crate::core::SearchSpace`), componentwise, for velocities as well as
/// positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleHistory {
    positions: History<DVector<Float>>,
    velocities: History<DVector<Float>>,
    personal_bests: History<Point>,
}

impl ParticleHistory {
    /// Seeds a particle with its initial position and velocity; the personal-best history
    /// stays empty until the first iteration completes.
    pub(crate) fn new(position: DVector<Float>, velocity: DVector<Float>) -> Self {
        let mut positions = History::default();
        positions.push(position);
        let mut velocities = History::default();
        velocities.push(velocity);
        Self {
            positions,
            velocities,
            personal_bests: History::default(),
        }
    }

    /// The ordered position history, indexed by iteration.
    pub const fn positions(&self) -> &History<DVector<Float>> {
        &self.positions
    }
    /// The ordered velocity history, indexed by iteration.
    pub const fn velocities(&self) -> &History<DVector<Float>> {
        &self.velocities
    }
    /// The ordered personal-best history, indexed by iteration.
    pub const fn personal_bests(&self) -> &History<Point> {
        &self.personal_bests
    }

    /// The most recently recorded position.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] if no position has been recorded (this cannot occur
    /// for a particle created by the optimizer, which seeds the history at construction).
    pub fn latest_position(&self) -> Result<&DVector<Float>, HistoryError> {
        self.positions.latest().ok_or(HistoryError::Empty("position"))
    }
    /// The most recently recorded velocity.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] if no velocity has been recorded (this cannot occur
    /// for a particle created by the optimizer, which seeds the history at construction).
    pub fn latest_velocity(&self) -> Result<&DVector<Float>, HistoryError> {
        self.velocities.latest().ok_or(HistoryError::Empty("velocity"))
    }
    /// The most recently recorded personal best.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError::Empty`] before the first iteration completes.
    pub fn latest_personal_best(&self) -> Result<&Point, HistoryError> {
        self.personal_bests
            .latest()
            .ok_or(HistoryError::Empty("personal best"))
    }

    // The seeded histories are never empty, so plain indexing is safe inside the loop.
    pub(crate) fn current_position(&self) -> &DVector<Float> {
        &self.positions[self.positions.len() - 1]
    }
    pub(crate) fn current_velocity(&self) -> &DVector<Float> {
        &self.velocities[self.velocities.len() - 1]
    }
    pub(crate) fn current_personal_best(&self) -> &Point {
        &self.personal_bests[self.personal_bests.len() - 1]
    }

    pub(crate) fn push_position(&mut self, position: DVector<Float>) {
        self.positions.push(position);
    }
    pub(crate) fn push_velocity(&mut self, velocity: DVector<Float>) {
        self.velocities.push(velocity);
    }
    pub(crate) fn push_personal_best(&mut self, best: Point) {
        self.personal_bests.push(best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_seeded_histories() {
        let p = ParticleHistory::new(dvector![0.5, -0.5], DVector::zeros(2));
        assert_eq!(p.positions().len(), 1);
        assert_eq!(p.velocities().len(), 1);
        assert!(p.personal_bests().is_empty());
        assert_eq!(p.latest_position().unwrap(), &dvector![0.5, -0.5]);
        assert_eq!(p.latest_velocity().unwrap(), &dvector![0.0, 0.0]);
        assert_eq!(
            p.latest_personal_best(),
            Err(HistoryError::Empty("personal best"))
        );
    }

    #[test]
    fn test_appends_never_overwrite() {
        let mut p = ParticleHistory::new(dvector![1.0], dvector![0.0]);
        p.push_velocity(dvector![0.25]);
        p.push_position(dvector![1.25]);
        p.push_personal_best(Point::new(dvector![1.0], 1.0));
        assert_eq!(p.positions()[0], dvector![1.0]);
        assert_eq!(p.positions()[1], dvector![1.25]);
        assert_eq!(p.velocities()[1], dvector![0.25]);
        assert_eq!(p.latest_personal_best().unwrap().fx, 1.0);
    }
}

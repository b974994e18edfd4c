use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::SearchSpace;
use crate::Float;

/// A struct that holds the results of an optimization run.
///
/// This is a snapshot taken after the final iteration; the full per-iteration record stays in
/// the [`ParticleSwarmState`](`crate::swarm::ParticleSwarmState`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmSummary {
    /// The search space the swarm operated in.
    pub space: SearchSpace,
    /// The number of particles in the swarm.
    pub particle_amount: usize,
    /// The number of iterations executed.
    pub iterations: usize,
    /// The best position found by any particle.
    pub x: Vec<Float>,
    /// The rounded fitness at [`SwarmSummary::x`].
    pub fx: Float,
    /// The number of objective function evaluations.
    pub cost_evals: usize,
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╒══════════════════════════════════════════════════════╕"
        )?;
        writeln!(f, "│{:^54}│", "SWARM RESULTS")?;
        writeln!(
            f,
            "╞══════════════════════════════════════════════════════╡"
        )?;
        writeln!(
            f,
            "│ f(gBest): {:>+12.4} │ #fcn: {:>6} │ #iter: {:>6} │",
            self.fx, self.cost_evals, self.iterations
        )?;
        writeln!(
            f,
            "├──────────────────────────────────────────────────────┤"
        )?;
        writeln!(
            f,
            "│ Particles: {:>5}      Bounds: {:<23}│",
            self.particle_amount, self.space
        )?;
        writeln!(
            f,
            "├───────╥──────────────────────────────────────────────┤"
        )?;
        for (i, x_i) in self.x.iter().enumerate() {
            writeln!(f, "│ {:>5} ║ {:>+12.4}{:>32}│", i, x_i, "")?;
        }
        write!(
            f,
            "└───────╨──────────────────────────────────────────────┘"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_result_fields() {
        let summary = SwarmSummary {
            space: SearchSpace::new(-2.0, 2.0).unwrap(),
            particle_amount: 10,
            iterations: 100,
            x: vec![0.5486, -1.2153],
            fx: 0.0,
            cost_evals: 1000,
        };
        let rendered = summary.to_string();
        assert!(rendered.contains("SWARM RESULTS"));
        assert!(rendered.contains("100"));
        assert!(rendered.contains("+0.5486"));
        assert!(rendered.contains("-1.2153"));
    }
}

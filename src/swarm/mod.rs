/// [`ParticleHistory`] type recording a single particle across iterations.
pub mod particle;
/// The [`PSO`] optimizer and its configuration.
pub mod pso;
/// [`ParticleSwarmState`] type owning the recorded swarm.
pub mod state;

pub use particle::ParticleHistory;
pub use pso::{PSOConfig, PSO};
pub use state::{ParticleSwarmState, PositionInitializer};

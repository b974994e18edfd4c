/// [`SearchSpace`] type for the box the swarm searches in.
pub mod bound;
/// [`History`] type for append-only per-iteration records.
pub mod history;
/// [`Point`] type for a position paired with its fitness.
pub mod point;
/// [`SwarmSummary`] type for the result of an optimization run.
pub mod summary;
/// Rounding and sampling helpers.
pub mod utils;

pub use bound::SearchSpace;
pub use history::History;
pub use point::Point;
pub use summary::SwarmSummary;

use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{DVector, Float};

/// A recorded best: a position in parameter space paired with its rounded fitness.
///
/// Personal and global best histories store [`Point`]s rather than bare vectors so that
/// read-only consumers can report fitness-at-best without re-evaluating the objective, and so
/// that best-vs-best comparisons always use the exact value the optimizer compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// The position.
    pub x: DVector<Float>,
    /// The rounded fitness of the objective at [`Point::x`].
    pub fx: Float,
}

impl Point {
    /// Creates a new point from a position and its rounded fitness.
    pub const fn new(x: DVector<Float>, fx: Float) -> Self {
        Self { x, fx }
    }
    /// Compare two points by their `fx` value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.fx.total_cmp(&other.fx)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?}, f(x): {}", self.x.as_slice(), self.fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_total_cmp() {
        let better = Point::new(dvector![1.0], 1.0);
        let worse = Point::new(dvector![2.0], 2.0);
        assert_eq!(better.total_cmp(&worse), Ordering::Less);
        assert_eq!(worse.total_cmp(&better), Ordering::Greater);
        assert_eq!(better.total_cmp(&better.clone()), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        let p = Point::new(dvector![0.5, -0.5], 4.0);
        let s = p.to_string();
        assert!(s.contains("x:"));
        assert!(s.contains("f(x): 4"));
    }
}

use fastrand::Rng;

use crate::Float;

/// Rounds a value to four decimal places.
///
/// Every fitness value, velocity, and position this crate stores or compares goes through this
/// function first. The fixed precision is a reproducibility contract: two positions the raw
/// objective would rank as distinct may tie after rounding, and all tie-break rules are defined
/// in terms of the rounded values. Rounding follows Rust's [`f64::round`] convention
/// (half away from zero).
pub fn round4(value: Float) -> Float {
    const SCALE: Float = 1e4;
    (value * SCALE).round() / SCALE
}

/// A helper trait to get feature-gated floating-point random values.
pub trait SampleFloat {
    /// Get a random value in the range `[0, 1)`.
    fn float(&mut self) -> Float;
    /// Get a uniform random value in `[lower, upper)`.
    ///
    /// Degenerate ranges are allowed: `lower == upper` pins the draw to that value.
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        lower + (upper - lower) * self.float()
    }
}

impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.23456789), 1.2346);
        assert_eq!(round4(-1.23454), -1.2345);
        assert_eq!(round4(4.0), 4.0);
        assert_eq!(round4(0.000049), 0.0);
    }

    #[test]
    fn test_range_degenerate() {
        let mut rng = Rng::with_seed(0);
        assert_eq!(rng.range(0.5, 0.5), 0.5);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = Rng::with_seed(0);
        for _ in 0..1000 {
            let r = rng.range(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_range_reproducible() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.range(0.0, 1.0), b.range(0.0, 1.0));
        }
    }
}

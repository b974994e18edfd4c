#![allow(clippy::suboptimal_flops)]
use std::convert::Infallible;

#[cfg(not(feature = "f32"))]
use std::f64::consts::PI;
#[cfg(feature = "f32")]
use std::f32::consts::PI;

use crate::{traits::CostFunction, DVector, Float};

/// The squared quadratic, a one-dimensional objective with two global minima at the roots of
/// the underlying quadratic.
///
/// ```math
/// f(x) = (ax^2 + bx + c)^2
/// ```
/// For $`a = 3`$, $`b = 2`$, $`c = -2`$, the minima $`f(x) = 0`$ sit at
/// $`x = (-1 \pm \sqrt{7})/3`$, both inside $`[-2, 2]`$.
pub struct SquaredQuadratic {
    /// Quadratic coefficient
    pub a: Float,
    /// Linear coefficient
    pub b: Float,
    /// Constant term
    pub c: Float,
}
impl SquaredQuadratic {
    /// Creates the function $`f(x) = (ax^2 + bx + c)^2`$.
    pub const fn new(a: Float, b: Float, c: Float) -> Self {
        Self { a, b, c }
    }
}
impl CostFunction for SquaredQuadratic {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((self.a * x[0].powi(2) + self.b * x[0] + self.c).powi(2))
    }
}

/// A generalized spherical function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} x_i^2
/// ```
/// The global minimum is at $`f(\vec{0}) = 0`$.
pub struct Sphere {
    /// Number of dimensions
    pub n: usize,
}
impl CostFunction for Sphere {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((0..self.n).map(|i| x[i].powi(2)).sum())
    }
}

/// The Rastrigin function, a non-convex function with multiple modes.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^{n} [x_i^2 - 10\cos(2\pi x_i)]
/// ```
/// where $`x_i \in [-5.12, 5.12]`$. The global minimum is $`f(\vec{0}) = 0`$.
pub struct Rastrigin {
    /// Number of dimensions
    pub n: usize,
}
impl CostFunction for Rastrigin {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(10.0 * (self.n as Float)
            + (0..self.n)
                .map(|i| x[i].powi(2) - 10.0 * Float::cos(2.0 * PI * x[i]))
                .sum::<Float>())
    }
}

/// The Rosenbrock function, a non-convex function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n-1} \left[100(x_{i+1} - x_i^2)^2 + (1 - x_i)^2 \right]
/// ```
/// where $`n \geq 2`$. This function has a minimum at $`f(\vec{1}) = 0`$.
pub struct Rosenbrock {
    /// Number of dimensions (must be at least 2)
    pub n: usize,
}
impl CostFunction for Rosenbrock {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((0..(self.n - 1))
            .map(|i| 100.0 * (x[i + 1] - x[i].powi(2)).powi(2) + (1.0 - x[i]).powi(2))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dvector;

    use super::*;

    #[test]
    fn test_known_minima() {
        assert_eq!(
            SquaredQuadratic::new(3.0, 2.0, -2.0)
                .evaluate(&dvector![0.0], &mut ())
                .unwrap(),
            4.0
        );
        assert_eq!(
            Sphere { n: 3 }
                .evaluate(&dvector![0.0, 0.0, 0.0], &mut ())
                .unwrap(),
            0.0
        );
        assert_eq!(
            Rastrigin { n: 2 }
                .evaluate(&dvector![0.0, 0.0], &mut ())
                .unwrap(),
            0.0
        );
        assert_eq!(
            Rosenbrock { n: 2 }
                .evaluate(&dvector![1.0, 1.0], &mut ())
                .unwrap(),
            0.0
        );
    }
}

use std::convert::Infallible;

use crate::{DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$ to be minimized
/// (lower is better).
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass external
/// arguments to the function during optimization, or can be modified by the function itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution. The objective is assumed total over the search box and side-effect-free; the
/// optimizer calls it once per particle per iteration and does not catch failures.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return
    /// a [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &DVector<Float>, user_data: &mut U) -> Result<Float, E>;
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct TestFunction;
    impl CostFunction for TestFunction {
        fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
            Ok(x[0].powi(2) + x[1].powi(2) + 1.0)
        }
    }

    struct Counting;
    impl CostFunction<usize> for Counting {
        fn evaluate(&self, x: &DVector<Float>, user_data: &mut usize) -> Result<Float, Infallible> {
            *user_data += 1;
            Ok(x[0])
        }
    }

    #[test]
    fn test_cost_function() {
        let x: DVector<Float> = DVector::from_vec(vec![1.0, 2.0]);
        let y = TestFunction.evaluate(&x, &mut ()).unwrap();
        assert_eq!(y, 6.0);
    }

    #[test]
    fn test_user_data_is_threaded_through() {
        let x: DVector<Float> = DVector::from_vec(vec![3.0]);
        let mut calls = 0;
        let _ = Counting.evaluate(&x, &mut calls).unwrap();
        let _ = Counting.evaluate(&x, &mut calls).unwrap();
        assert_eq!(calls, 2);
    }
}

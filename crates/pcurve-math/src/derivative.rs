//! Numerical differentiation of vector-valued functions.

use crate::{Point3, Vector3};

/// Approximate `f'(t)` with the central difference `(f(t + h) - f(t - h)) / 2h`.
///
/// The truncation error is `O(h^2)`; `h` around `1e-5` balances it against
/// cancellation for unit-scale inputs.
pub fn central_difference<F>(f: F, t: f64, h: f64) -> Vector3
where
    F: Fn(f64) -> Point3,
{
    (f(t + h) - f(t - h)) / (2.0 * h)
}

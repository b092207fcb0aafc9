use crate::utils::{cast, constant, sample_points, step};
use num::Float;

/// Trapezoidal estimate of the integral of `f` from `a` to `b` with `n`
/// subintervals, accumulated over the shared `n - 1` point anchor grid.
///
/// This keeps the historical behaviour of the demonstration: the panel
/// `[b - h, b]` is never visited, so the estimate undercounts the composite
/// trapezoid. See [`composite_trapezoid`] for the textbook rule.
///
/// # Arguments
///
/// * `f` - Function to integrate.
/// * `a` - Lower bound of integration.
/// * `b` - Upper bound of integration.
/// * `n` - Number of subintervals. Not validated: `n == 1` returns zero.
pub fn trapezoidal_rule<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    let half = constant::<T>(0.5);

    let mut value = T::zero();
    for &x in sample_points(a, b, n).iter() {
        value = value + half * (f(x + h) + f(x));
    }
    value * h
}

/// Composite trapezoidal rule over `n` equal subintervals of `[a, b]`.
pub fn composite_trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    let half = constant::<T>(0.5);

    let mut interior = T::zero();
    for i in 1..n {
        interior = interior + f(a + cast::<T>(i) * h);
    }
    h * (half * f(a) + interior + half * f(b))
}

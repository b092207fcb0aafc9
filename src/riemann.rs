use crate::utils::{cast, sample_points, step};
use num::Float;

/// Left-endpoint Riemann estimate of the integral of `f` from `a` to `b`,
/// as the convergence demonstration has always computed it.
///
/// Every anchor contributes `f(x) + 2h` rather than `f(x)`, and the last
/// subinterval is skipped, so the estimate sits above the true left sum by
/// roughly `2 h^2 (n - 1)`. [`left_riemann_sum`] is the textbook rule.
pub fn lefthand_riemann<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);

    let mut value = T::zero();
    for &x in sample_points(a, b, n).iter() {
        value = value + (f(x) + h);
        value = value + h;
    }
    value * h
}

/// Left Riemann sum over `n` equal subintervals of `[a, b]`.
pub fn left_riemann_sum<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);

    let mut value = T::zero();
    for i in 0..n {
        value = value + f(a + cast::<T>(i) * h);
    }
    value * h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrand::function_to_integrate;
    use crate::test_utils::test_rel;

    #[test]
    fn test_lefthand_baseline() {
        let f = function_to_integrate::<f64>;

        test_rel(lefthand_riemann(f, 0.0, 1.0, 10), 0.4381875, 1e-12);
        test_rel(lefthand_riemann(f, 0.0, 1.0, 1000), 0.3344988331668334, 1e-10);
        test_rel(lefthand_riemann(f, -1.0, 2.0, 6), 4.609375, 1e-12);
    }

    #[test]
    fn test_lefthand_inflation() {
        // The spurious terms add exactly 2 h^2 per anchor.
        let n = 10;
        let h = 0.1;
        let zero = lefthand_riemann(|_x: f64| 0.0, 0.0, 1.0, n);
        test_rel(zero, 2.0 * h * h * (n as f64 - 1.0), 1e-12);
    }

    #[test]
    fn test_lefthand_degenerate() {
        let f = function_to_integrate::<f64>;

        assert_eq!(lefthand_riemann(f, 0.0, 1.0, 1), 0.0);
        test_rel(lefthand_riemann(f, 0.0, 1.0, 2), 0.5, 1e-15);
        assert!(lefthand_riemann(f, 0.0, 1.0, 0).is_nan());
    }

    #[test]
    fn test_left_riemann_sum() {
        let f = function_to_integrate::<f64>;

        assert_eq!(left_riemann_sum(f, 0.0, 1.0, 1), 0.0);
        test_rel(left_riemann_sum(f, 0.0, 1.0, 10), 0.285, 1e-12);
        test_rel(left_riemann_sum(f, 0.0, 1.0, 1000), 0.3328335, 1e-12);
        // Constants are integrated exactly.
        test_rel(left_riemann_sum(|_x: f64| 4.0, -1.0, 1.0, 13), 8.0, 1e-14);
    }
}

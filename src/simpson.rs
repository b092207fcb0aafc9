use crate::utils::{cast, constant, sample_points, step};
use num::Float;

/// Simpson estimate of the integral of `f` from `a` to `b` as used by the
/// convergence demonstration.
///
/// A three point parabola `f(x), f(x + h), f(x + 2h)` is fitted at every
/// anchor, so neighbouring parabolas overlap, and the accumulated sum is
/// halved to land near the true value. This is not the composite rule; use
/// [`composite_simpson`] for that.
///
/// # Arguments
///
/// * `f` - Function to integrate.
/// * `a` - Lower bound of integration.
/// * `b` - Upper bound of integration.
/// * `n` - Number of subintervals. Not validated: `n <= 1` returns zero.
pub fn simpson_rule<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    let third = h / constant(3.0);
    let four = constant::<T>(4.0);

    let mut value = T::zero();
    for &x in sample_points(a, b, n).iter() {
        value = value + third * (f(x) + four * f(x + h) + f(x + h + h));
    }
    value / constant(2.0)
}

/// Composite Simpson rule with weights 1, 4, 2, 4, ..., 4, 1 over `n`
/// subintervals of `[a, b]`.
///
/// `n` should be even; the weights are still applied for odd `n` but the
/// result is no longer a Simpson estimate. The study builder rejects odd
/// counts for this rule.
pub fn composite_simpson<T, F>(f: F, a: T, b: T, n: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = step(a, b, n);
    let two = constant::<T>(2.0);
    let four = constant::<T>(4.0);

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { four } else { two };
        sum = sum + weight * f(a + cast::<T>(i) * h);
    }
    sum * h / constant(3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrand::function_to_integrate;
    use crate::test_utils::test_rel;

    #[test]
    fn test_simpson_baseline() {
        let f = function_to_integrate::<f64>;

        test_rel(simpson_rule(f, 0.0, 1.0, 10), 0.3511875, 1e-12);
        test_rel(simpson_rule(f, 0.0, 1.0, 100), 0.3350161683673469, 1e-12);
        test_rel(simpson_rule(f, -1.0, 2.0, 6), 3.567708333333333, 1e-12);
    }

    #[test]
    fn test_simpson_degenerate() {
        let f = function_to_integrate::<f64>;

        assert_eq!(simpson_rule(f, 0.0, 1.0, 1), 0.0);
        test_rel(simpson_rule(f, 0.0, 1.0, 2), 1.0 / 6.0, 1e-15);
        // Empty grid, nothing to halve.
        assert_eq!(simpson_rule(f, 0.0, 1.0, 0), 0.0);
    }

    #[test]
    fn test_composite_simpson_is_exact_for_cubics() {
        let f = function_to_integrate::<f64>;

        for &n in [2, 10, 100, 1000].iter() {
            test_rel(composite_simpson(f, 0.0, 1.0, n), 1.0 / 3.0, 1e-12);
        }

        let cubic = |x: f64| x * x * x - x;
        test_rel(composite_simpson(cubic, 0.0, 2.0, 4), 2.0, 1e-14);
    }
}

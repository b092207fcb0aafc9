use crate::utils::constant;
use num::Float;

/// The integrand used by the convergence study: f(x) = x^2.
pub fn function_to_integrate<T: Float>(x: T) -> T {
    x * x
}

/// Closed form of the integral of [`function_to_integrate`] from `a` to `b`,
/// (b^3 - a^3) / 3. Used as ground truth for the relative error.
pub fn analytic_integral_of_f<T: Float>(a: T, b: T) -> T {
    constant::<T>(1.0 / 3.0) * (b.powi(3) - a.powi(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_rel;

    #[test]
    fn test_unit_interval() {
        assert_eq!(analytic_integral_of_f(0.0, 1.0), 1.0 / 3.0);
        test_rel(analytic_integral_of_f(0.0f32, 1.0) as f64, 1.0 / 3.0, 1e-7);
    }

    #[test]
    fn test_reversed_and_negative_bounds() {
        test_rel(analytic_integral_of_f(-1.0, 2.0), 3.0, 1e-15);
        test_rel(analytic_integral_of_f(1.0, 0.0), -1.0 / 3.0, 1e-15);
        assert_eq!(analytic_integral_of_f(2.0, 2.0), 0.0);
    }

    #[test]
    fn test_integrand() {
        assert_eq!(function_to_integrate(3.0), 9.0);
        assert_eq!(function_to_integrate(-0.5), 0.25);
    }
}

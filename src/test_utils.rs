use approx::relative_eq;

/// Assert that `result` agrees with `expected` to within `relative_error`.
///
/// `NaN` only matches `NaN`; infinities must match exactly. Subnormal
/// expectations are refused.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    assert!(
        expected == 0.0 || !expected.is_finite() || expected.is_normal(),
        "[Test uses subnormal value]"
    );

    let ok = if result.is_nan() || expected.is_nan() {
        result.is_nan() && expected.is_nan()
    } else {
        relative_eq!(result, expected, max_relative = relative_error)
    };

    assert!(ok, "observed: {:?}, expected: {:?}", result, expected);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_accepts_close_values() {
        test_rel(1.0 + 1e-13, 1.0, 1e-12);
        test_rel(f64::NAN, f64::NAN, 1e-12);
        test_rel(f64::INFINITY, f64::INFINITY, 1e-12);
        test_rel(0.0, 0.0, 1e-12);
    }

    #[test]
    #[should_panic(expected = "observed")]
    fn test_rel_rejects_distant_values() {
        test_rel(1.001, 1.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "observed")]
    fn test_rel_rejects_nan_against_number() {
        test_rel(f64::NAN, 1.0, 1e-6);
    }
}

use ndarray::Array1;
use num::Float;

/// Convert an `f64` literal into the working float type.
#[inline]
pub fn constant<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Convert a count into the working float type.
#[inline]
pub fn cast<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Width of one of the `n` equal subintervals of `[a, b]`.
#[inline]
pub fn step<T: Float>(a: T, b: T, n: usize) -> T {
    (b - a) / cast(n)
}

/// Anchor points shared by the fixed-grid rules: `n - 1` points spread
/// evenly from `a` to `b - h` inclusive.
///
/// The spacing is `(b - h - a) / (n - 2)`, not `h`, so for `n > 2` the
/// anchors do not coincide with the subinterval edges. A single point
/// yields `[a]`; `n <= 1` yields an empty grid.
pub fn sample_points<T: Float>(a: T, b: T, n: usize) -> Array1<T> {
    let h = step(a, b, n);
    Array1::linspace(a, b - h, n.saturating_sub(1))
}

use thiserror::Error;

/// Problems detected while configuring or reporting a convergence study.
///
/// The raw rules never return these; degenerate input flows through them as
/// `NaN`, infinity or zero.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuadratureError {
    /// The study was given an empty list of sample counts
    #[error("No sample counts were requested")]
    NoSamples,

    /// A sample count of zero leaves the step width undefined
    #[error("Number of subintervals must be at least one")]
    ZeroSamples,

    /// The composite Simpson rule pairs subintervals
    #[error("Composite Simpson requires an even number of subintervals, got {n}")]
    OddSimpsonSamples { n: usize },

    /// Bounds must be finite with a < b
    #[error("Invalid integration bounds: a = {a}, b = {b}")]
    InvalidBounds { a: f64, b: f64 },

    /// The chart backend failed
    #[error("Could not render chart: {0}")]
    Chart(String),
}

pub use crate::chart::{PlottersChart, SeriesRenderer};
pub use crate::convergence::{
    relative_error, ConvergenceStudy, ConvergenceStudyBuilder, ConvergenceTable, ErrorSeries,
    DEFAULT_SAMPLE_COUNTS,
};
pub use crate::error::QuadratureError;
pub use crate::integrand::{analytic_integral_of_f, function_to_integrate};
pub use crate::riemann::{left_riemann_sum, lefthand_riemann};
pub use crate::rule::{Rule, Variant};
pub use crate::simpson::{composite_simpson, simpson_rule};
pub use crate::trapezoid::{composite_trapezoid, trapezoidal_rule};

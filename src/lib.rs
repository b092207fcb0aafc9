//! Fixed-grid quadrature rules (left Riemann, trapezoid, Simpson) and a
//! study of how their relative error behaves as the number of subintervals
//! grows.
//!
//! Each rule comes in two renditions. The `Verbatim` ones reproduce the
//! historical demonstration exactly, including its known defects, so that
//! its numbers can be regression tested. The `Textbook` ones are the
//! composite rules proper.
//!
//! ```
//! use elementary_quadrature::prelude::*;
//!
//! let study = ConvergenceStudyBuilder::<f64>::new()
//!     .variant(Variant::Textbook)
//!     .build()
//!     .unwrap();
//! let table = study.run();
//! assert!(table.error(Rule::Simpson, 0).unwrap() < 1e-12);
//! ```

pub mod chart;
pub mod convergence;
pub mod error;
pub mod integrand;
pub mod prelude;
pub mod report;
pub mod riemann;
pub mod rule;
pub mod simpson;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod trapezoid;
pub(crate) mod utils;

use crate::riemann::{left_riemann_sum, lefthand_riemann};
use crate::simpson::{composite_simpson, simpson_rule};
use crate::trapezoid::{composite_trapezoid, trapezoidal_rule};
use num::Float;
use std::fmt;

/// The quadrature rules compared by the convergence study.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Rule {
    /// Left-endpoint rectangles
    LefthandRiemann,
    /// Trapezoids fitted between neighbouring points
    Trapezoidal,
    /// Three point parabolas
    Simpson,
}

/// Which rendition of each rule to evaluate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Variant {
    /// The historical estimators, defects included.
    Verbatim,
    /// The composite rules as found in textbooks.
    Textbook,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Verbatim
    }
}

impl Rule {
    /// Chart order.
    pub const ALL: [Rule; 3] = [Rule::LefthandRiemann, Rule::Trapezoidal, Rule::Simpson];

    /// Order in which the text report lists the rules.
    pub const REPORT_ORDER: [Rule; 3] = [Rule::Simpson, Rule::LefthandRiemann, Rule::Trapezoidal];

    /// Short name used in the text report.
    pub fn name(&self) -> &'static str {
        match *self {
            Rule::LefthandRiemann => "Lefthand",
            Rule::Trapezoidal => "Trapezoidal",
            Rule::Simpson => "Simpson",
        }
    }

    /// Legend entry for the error chart.
    pub fn series_label(&self) -> &'static str {
        match *self {
            Rule::LefthandRiemann => "Lefthand Riemann Error",
            Rule::Trapezoidal => "Trapezoidal Error",
            Rule::Simpson => "Simpson Error",
        }
    }

    /// Estimate the integral of `f` from `a` to `b` with `n` subintervals.
    ///
    /// No validation happens here; see
    /// [`ConvergenceStudyBuilder`](crate::convergence::ConvergenceStudyBuilder)
    /// for the checked path.
    pub fn estimate<T, F>(&self, variant: Variant, f: F, a: T, b: T, n: usize) -> T
    where
        T: Float,
        F: Fn(T) -> T,
    {
        match (variant, *self) {
            (Variant::Verbatim, Rule::LefthandRiemann) => lefthand_riemann(f, a, b, n),
            (Variant::Verbatim, Rule::Trapezoidal) => trapezoidal_rule(f, a, b, n),
            (Variant::Verbatim, Rule::Simpson) => simpson_rule(f, a, b, n),
            (Variant::Textbook, Rule::LefthandRiemann) => left_riemann_sum(f, a, b, n),
            (Variant::Textbook, Rule::Trapezoidal) => composite_trapezoid(f, a, b, n),
            (Variant::Textbook, Rule::Simpson) => composite_simpson(f, a, b, n),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

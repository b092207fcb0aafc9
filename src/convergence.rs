//! Relative error of each rule over a sequence of sample counts.

use crate::error::QuadratureError;
use crate::integrand::{analytic_integral_of_f, function_to_integrate};
use crate::rule::{Rule, Variant};
use log::{debug, info, warn};
use num::Float;
use std::fmt;

/// Sample counts used by the demonstration: 10^1 through 10^4.
pub const DEFAULT_SAMPLE_COUNTS: [usize; 4] = [10, 100, 1000, 10000];

/// Relative error `|exact - estimate| / |exact|`.
///
/// Nothing is validated: an exact value of zero yields infinity, or `NaN`
/// when the estimate is zero as well.
pub fn relative_error<T: Float>(exact: T, estimate: T) -> T {
    (exact - estimate).abs() / exact.abs()
}

/// Estimates and relative errors of one rule, one entry per sample count.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorSeries<T> {
    pub rule: Rule,
    pub estimates: Vec<T>,
    pub errors: Vec<T>,
}

/// Outcome of a [`ConvergenceStudy`].
#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceTable<T> {
    /// Lower bound of integration
    pub a: T,
    /// Upper bound of integration
    pub b: T,
    /// Reference value the estimates are measured against
    pub exact: T,
    pub variant: Variant,
    pub sample_counts: Vec<usize>,
    /// One series per rule, in [`Rule::ALL`] order
    pub series: Vec<ErrorSeries<T>>,
}

impl<T: Float> ConvergenceTable<T> {
    pub fn series(&self, rule: Rule) -> Option<&ErrorSeries<T>> {
        self.series.iter().find(|s| s.rule == rule)
    }

    /// Relative error of `rule` at the `index`-th sample count.
    pub fn error(&self, rule: Rule, index: usize) -> Option<T> {
        self.series(rule).and_then(|s| s.errors.get(index).copied())
    }

    /// Estimate of `rule` at the `index`-th sample count.
    pub fn estimate(&self, rule: Rule, index: usize) -> Option<T> {
        self.series(rule).and_then(|s| s.estimates.get(index).copied())
    }
}

/// A validated study: every rule evaluated at every sample count.
#[derive(Clone, Debug)]
pub struct ConvergenceStudy<T> {
    a: T,
    b: T,
    exact: T,
    sample_counts: Vec<usize>,
    variant: Variant,
}

impl<T: Float + fmt::Display> ConvergenceStudy<T> {
    /// Run the study on f(x) = x^2.
    pub fn run(&self) -> ConvergenceTable<T> {
        self.run_with(function_to_integrate)
    }

    /// Run the study on an arbitrary integrand. The exact value must have
    /// been supplied to the builder for the errors to mean anything.
    pub fn run_with<F>(&self, f: F) -> ConvergenceTable<T>
    where
        F: Fn(T) -> T,
    {
        info!(
            "Running {:?} convergence study on [{}, {}] with {} sample counts",
            self.variant,
            self.a,
            self.b,
            self.sample_counts.len()
        );

        let series = Rule::ALL
            .iter()
            .map(|&rule| {
                let mut estimates = Vec::with_capacity(self.sample_counts.len());
                let mut errors = Vec::with_capacity(self.sample_counts.len());
                for &n in self.sample_counts.iter() {
                    let estimate = rule.estimate(self.variant, &f, self.a, self.b, n);
                    let error = relative_error(self.exact, estimate);
                    debug!("{} n = {}: estimate = {}, relative error = {}", rule, n, estimate, error);
                    if !error.is_finite() {
                        warn!("{} produced a non-finite relative error at n = {}", rule, n);
                    }
                    estimates.push(estimate);
                    errors.push(error);
                }
                ErrorSeries {
                    rule,
                    estimates,
                    errors,
                }
            })
            .collect();

        ConvergenceTable {
            a: self.a,
            b: self.b,
            exact: self.exact,
            variant: self.variant,
            sample_counts: self.sample_counts.clone(),
            series,
        }
    }
}

/// Builder struct used to configure a [`ConvergenceStudy`].
#[derive(Clone, Debug)]
pub struct ConvergenceStudyBuilder<T> {
    /// Lower bound of integration.
    a: Option<T>,
    /// Upper bound of integration.
    b: Option<T>,
    /// Reference value; defaults to the analytic integral of x^2.
    exact: Option<T>,
    sample_counts: Option<Vec<usize>>,
    variant: Option<Variant>,
}

impl<T: Float> Default for ConvergenceStudyBuilder<T> {
    fn default() -> Self {
        ConvergenceStudyBuilder {
            a: None,
            b: None,
            exact: None,
            sample_counts: None,
            variant: None,
        }
    }
}

impl<T: Float> ConvergenceStudyBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Set both bounds of integration.
    pub fn bounds(mut self, a: T, b: T) -> Self {
        self.a = Some(a);
        self.b = Some(b);
        self
    }
    /// Override the reference value.
    pub fn exact(mut self, exact: T) -> Self {
        self.exact = Some(exact);
        self
    }
    /// Set the subinterval counts, in the order they should be reported.
    pub fn sample_counts(mut self, sample_counts: Vec<usize>) -> Self {
        self.sample_counts = Some(sample_counts);
        self
    }
    /// Choose between the historical and the textbook rules.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
    /// Validate the configuration and build the study.
    pub fn build(self) -> Result<ConvergenceStudy<T>, QuadratureError> {
        let a = self.a.unwrap_or_else(T::zero);
        let b = self.b.unwrap_or_else(T::one);
        let sample_counts = self
            .sample_counts
            .unwrap_or_else(|| DEFAULT_SAMPLE_COUNTS.to_vec());
        let variant = self.variant.unwrap_or_default();

        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(QuadratureError::InvalidBounds {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }
        if sample_counts.is_empty() {
            return Err(QuadratureError::NoSamples);
        }
        if sample_counts.contains(&0) {
            return Err(QuadratureError::ZeroSamples);
        }
        if variant == Variant::Textbook {
            if let Some(&n) = sample_counts.iter().find(|&&n| n % 2 == 1) {
                return Err(QuadratureError::OddSimpsonSamples { n });
            }
        }

        Ok(ConvergenceStudy {
            a,
            b,
            exact: self.exact.unwrap_or_else(|| analytic_integral_of_f(a, b)),
            sample_counts,
            variant,
        })
    }
}

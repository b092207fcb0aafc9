//! Plain text rendering of a [`ConvergenceTable`].

use crate::convergence::ConvergenceTable;
use crate::rule::Rule;
use num::Float;
use std::fmt;

impl<T: Float + fmt::Display> fmt::Display for ConvergenceTable<T> {
    /// One block per sample count, blocks separated by a blank line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, n) in self.sample_counts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "For number of steps equals: {}", n)?;
            for rule in Rule::REPORT_ORDER.iter() {
                match self.error(*rule, i) {
                    Some(err) => writeln!(f, "{} error: {}", rule, err)?,
                    None => writeln!(f, "{} error: n/a", rule)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::convergence::ConvergenceStudyBuilder;

    #[test]
    fn test_report_layout() {
        let table = ConvergenceStudyBuilder::<f64>::new()
            .sample_counts(vec![10, 100])
            .build()
            .unwrap()
            .run();
        let report = table.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "For number of steps equals: 10");
        assert!(lines[1].starts_with("Simpson error: 0.0535"));
        assert!(lines[2].starts_with("Lefthand error: 0.3145"));
        assert!(lines[3].starts_with("Trapezoidal error: 0.0904"));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "For number of steps equals: 100");
    }

    #[test]
    fn test_report_non_finite() {
        let table = ConvergenceStudyBuilder::<f64>::new()
            .exact(0.0)
            .sample_counts(vec![1])
            .build()
            .unwrap()
            .run();
        assert!(table.to_string().contains("Simpson error: NaN"));
    }
}

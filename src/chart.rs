//! Log-scale chart of relative error against sample count.

use crate::convergence::ConvergenceTable;
use crate::error::QuadratureError;
use crate::rule::Rule;
use log::{info, warn};
use num::Float;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

pub const CHART_TITLE: &str = "Integration Methods and Relative Error";
pub const X_AXIS_LABEL: &str = "Powers of 10 for number of points between 0 and 1";
pub const Y_AXIS_LABEL: &str = "Error values";

const PURPLE: RGBColor = RGBColor(128, 0, 128);
const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Anything able to present the error series of a study.
pub trait SeriesRenderer<T> {
    fn render(&self, table: &ConvergenceTable<T>) -> Result<(), QuadratureError>;
}

/// Draws the error series to an SVG file with `plotters`.
///
/// Only `.svg` paths are accepted: SVG keeps the title, axis labels and
/// legend as text elements, while raster output would need a font stack the
/// crate does not build.
#[derive(Clone, Debug)]
pub struct PlottersChart {
    path: PathBuf,
    size: (u32, u32),
}

impl PlottersChart {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        PlottersChart {
            path: path.as_ref().to_path_buf(),
            size: (1024, 768),
        }
    }

    fn is_svg(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("svg"))
    }
}

impl<T: Float> SeriesRenderer<T> for PlottersChart {
    fn render(&self, table: &ConvergenceTable<T>) -> Result<(), QuadratureError> {
        if !self.is_svg() {
            return Err(QuadratureError::Chart(format!(
                "unsupported chart format for {}, expected an .svg path",
                self.path.display()
            )));
        }

        let lines: Vec<(Rule, Vec<(f64, f64)>)> = table
            .series
            .iter()
            .map(|s| (s.rule, plottable_points(s.rule, &s.errors)))
            .collect();
        let x_max = table.sample_counts.len().saturating_sub(1).max(1) as f64;

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        draw(&root, &lines, x_max).map_err(|e| QuadratureError::Chart(e.to_string()))?;

        info!("Wrote error chart to {}", self.path.display());
        Ok(())
    }
}

/// `(index, error)` pairs that can sit on a log axis. Zero, negative and
/// non-finite errors are dropped.
pub fn plottable_points<T: Float>(rule: Rule, errors: &[T]) -> Vec<(f64, f64)> {
    errors
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            let e = e.to_f64().unwrap_or(f64::NAN);
            if e.is_finite() && e > 0.0 {
                Some((i as f64, e))
            } else {
                warn!("Skipping {} error {} at index {}: not plottable on a log axis", rule, e, i);
                None
            }
        })
        .collect()
}

/// Whole decades enclosing every point, `1e-16..1` when there are none.
pub fn log_bounds<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (1e-16, 1.0);
    }

    let lo = 10f64.powf(lo.log10().floor());
    let mut hi = 10f64.powf(hi.log10().ceil());
    if hi <= lo {
        hi = lo * 10.0;
    }
    (lo, hi)
}

fn colour(rule: Rule) -> RGBColor {
    match rule {
        Rule::LefthandRiemann => BLUE,
        Rule::Trapezoidal => PURPLE,
        Rule::Simpson => ORANGE,
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    lines: &[(Rule, Vec<(f64, f64)>)],
    x_max: f64,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (lo, hi) = log_bounds(lines.iter().flat_map(|(_, pts)| pts.iter().map(|&(_, y)| y)));

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 28).into_font().color(&BLACK))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, (lo..hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()?;

    for (rule, points) in lines.iter() {
        let c = colour(*rule);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), c))?
            .label(rule.series_label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], c.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

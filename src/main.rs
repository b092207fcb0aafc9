use elementary_quadrature::prelude::*;
use std::error::Error;

const CHART_PATH: &str = "integration_errors.svg";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let table = ConvergenceStudyBuilder::<f64>::new().build()?.run();
    print!("{}", table);

    PlottersChart::new(CHART_PATH).render(&table)?;
    Ok(())
}

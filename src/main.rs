//! Iris EDA - loads the bundled Iris dataset, prints statistics and shows four charts.
//!
//! Takes no arguments and reads no files. The only environment input is
//! `RUST_LOG`, which sets the `env_logger` filter (default `warn`) and
//! affects diagnostics only, never the analysis output.

use anyhow::{Context, Result};
use iris_eda::charts::ChartBuilder;
use iris_eda::config::AnalysisConfig;
use iris_eda::data::{DataLoader, DataProcessor};
use iris_eda::stats::StatsCalculator;
use iris_eda::{gui, report};
use log::{debug, warn};
use std::process::ExitCode;

fn run(config: &AnalysisConfig) -> Result<()> {
    // Nothing downstream can run without the data
    let dataset = DataLoader::load_bundled()?;
    report::print_loaded(&dataset, config.preview_rows).context("printing dataset overview")?;

    let dataset = DataProcessor::drop_missing(&dataset).context("cleaning dataset")?;

    let summary = StatsCalculator::describe(&dataset);
    report::print_summary(&summary).context("printing summary statistics")?;

    let grouped = StatsCalculator::grouped_means(&dataset).context("grouping by species")?;
    report::print_grouped(&grouped);

    let charts = ChartBuilder::build_all(&dataset, &config.charts).context("building charts")?;
    if let Err(e) = gui::show_charts(charts, &config.window, config.charts.plot_height) {
        warn!("{e}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AnalysisConfig::default();
    if let Ok(json) = serde_json::to_string(&config) {
        debug!("config: {json}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("⚠️ Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

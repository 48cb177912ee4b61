//! Charts module - Chart data and rendering

mod builder;
mod plotter;

pub use builder::{CategoryBar, Chart, ChartBuilder, ChartKind, HistogramBin, ScatterSeries};
pub use plotter::ChartPlotter;

//! GUI module - chart window

mod app;
mod chart_viewer;

pub use app::{show_charts, ChartWindow, ViewerError};
pub use chart_viewer::ChartViewer;

//! Chart Window
//! Native window that shows the chart cards until it is closed.

use crate::charts::Chart;
use crate::config::WindowConfig;
use crate::gui::ChartViewer;
use eframe::egui;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to open chart window: {0}")]
    Display(String),
}

/// Main application window.
pub struct ChartWindow {
    chart_viewer: ChartViewer,
}

impl ChartWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, charts: Vec<Chart>, plot_height: f32) -> Self {
        Self {
            chart_viewer: ChartViewer::new(charts, plot_height),
        }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Display the charts, blocking until the window is closed. Nothing is saved.
pub fn show_charts(
    charts: Vec<Chart>,
    window: &WindowConfig,
    plot_height: f32,
) -> Result<(), ViewerError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window.inner_size)
            .with_min_inner_size(window.min_inner_size)
            .with_title(window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &window.title,
        options,
        Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, charts, plot_height)))),
    )
    .map_err(|e| ViewerError::Display(e.to_string()))
}

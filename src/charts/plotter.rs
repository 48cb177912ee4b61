//! Chart Plotter Module
//! Draws chart data as interactive plots using egui_plot.

use crate::charts::{Chart, ChartKind};
use egui::{Color32, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

pub const LINE_COLOR: Color32 = Color32::from_rgb(0, 0, 255); // Blue
pub const HISTOGRAM_FILL: Color32 = Color32::from_rgb(255, 165, 0); // Orange
pub const HISTOGRAM_EDGE: Color32 = Color32::BLACK;

/// Viridis sampled at 1/4, 1/2, 3/4
pub const VIRIDIS: [Color32; 3] = [
    Color32::from_rgb(59, 82, 139),
    Color32::from_rgb(33, 145, 140),
    Color32::from_rgb(94, 201, 98),
];

/// Categorical palette for species
pub const DEEP: [Color32; 10] = [
    Color32::from_rgb(76, 114, 176),  // Blue
    Color32::from_rgb(221, 132, 82),  // Orange
    Color32::from_rgb(85, 168, 104),  // Green
    Color32::from_rgb(196, 78, 82),   // Red
    Color32::from_rgb(129, 114, 179), // Purple
    Color32::from_rgb(147, 120, 96),  // Brown
    Color32::from_rgb(218, 139, 195), // Pink
    Color32::from_rgb(140, 140, 140), // Grey
    Color32::from_rgb(204, 185, 116), // Olive
    Color32::from_rgb(100, 181, 205), // Cyan
];

/// Draws [`Chart`]s with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the n-th category of a chart.
    pub fn category_color(palette: &[Color32], index: usize) -> Color32 {
        palette[index % palette.len()]
    }

    /// Draw any chart kind into the given ui.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &Chart, height: f32) {
        let plot = Plot::new(format!("plot_{}", chart.id))
            .height(height)
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .allow_scroll(false);

        match &chart.kind {
            ChartKind::Line {
                series_name,
                points,
            } => {
                plot.legend(Legend::default()).show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::new(points.clone()))
                            .color(LINE_COLOR)
                            .width(1.5)
                            .name(series_name),
                    );
                });
            }
            ChartKind::Bar { bars } => {
                // X-axis: categories at integer positions, labeled by name
                let x_labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
                let elements: Vec<Bar> = bars
                    .iter()
                    .enumerate()
                    .filter(|(_, bar)| bar.value.is_finite())
                    .map(|(i, bar)| {
                        Bar::new(i as f64, bar.value)
                            .width(0.8)
                            .fill(Self::category_color(&VIRIDIS, i))
                            .name(&bar.label)
                    })
                    .collect();

                plot.include_y(0.0)
                    .x_axis_formatter(move |mark, _range| {
                        let idx = mark.value.round();
                        if idx >= 0.0 && (mark.value - idx).abs() < 1e-6 {
                            x_labels.get(idx as usize).cloned().unwrap_or_default()
                        } else {
                            String::new()
                        }
                    })
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(BarChart::new(elements));
                    });
            }
            ChartKind::Histogram { bins } => {
                let elements: Vec<Bar> = bins
                    .iter()
                    .map(|bin| {
                        Bar::new(bin.center(), bin.count as f64)
                            .width(bin.width())
                            .fill(HISTOGRAM_FILL)
                            .stroke(Stroke::new(1.0, HISTOGRAM_EDGE))
                    })
                    .collect();

                plot.include_y(0.0).show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(elements).color(HISTOGRAM_FILL));
                });
            }
            ChartKind::Scatter { series, .. } => {
                plot.legend(Legend::default()).show(ui, |plot_ui| {
                    for (i, s) in series.iter().enumerate() {
                        plot_ui.points(
                            Points::new(PlotPoints::new(s.points.clone()))
                                .shape(MarkerShape::Circle)
                                .radius(3.5)
                                .color(Self::category_color(&DEEP, i))
                                .name(&s.label),
                        );
                    }
                });
            }
        }
    }
}

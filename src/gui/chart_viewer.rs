//! Chart Viewer Widget
//! Scrollable grid of chart cards, two per row when the window is wide enough.

use crate::charts::{Chart, ChartKind, ChartPlotter};
use egui::{Color32, RichText, ScrollArea};

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;
const CARD_WIDTH: f32 = 640.0;
const CARD_BORDER: Color32 = Color32::from_rgb(52, 152, 219);

/// Lays out chart cards in display order.
pub struct ChartViewer {
    pub charts: Vec<Chart>,
    pub plot_height: f32,
}

impl ChartViewer {
    pub fn new(charts: Vec<Chart>, plot_height: f32) -> Self {
        Self {
            charts,
            plot_height,
        }
    }

    /// Number of cards per row for the available width.
    pub fn columns_for_width(avail_width: f32) -> usize {
        ((avail_width / (CARD_WIDTH + CHART_SPACING)).floor() as usize).clamp(1, 2)
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Charts").size(20.0));
            });
            return;
        }

        let num_columns = Self::columns_for_width(ui.available_width());

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in self.charts.chunks(num_columns) {
                    ui.horizontal(|ui| {
                        for chart in row {
                            self.draw_chart_card(ui, chart);
                            ui.add_space(CHART_SPACING);
                        }
                    });
                    ui.add_space(CHART_SPACING);
                }
            });
    }

    fn draw_chart_card(&self, ui: &mut egui::Ui, chart: &Chart) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.5, CARD_BORDER))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH - 24.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(&chart.title).size(16.0).strong());

                    if let ChartKind::Scatter { legend_title, .. } = &chart.kind {
                        ui.label(RichText::new(format!("Legend: {}", legend_title)).size(12.0));
                    }

                    ui.add_space(6.0);
                    ChartPlotter::draw_chart(ui, chart, self.plot_height);
                });
            });
    }
}

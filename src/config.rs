//! Analysis settings. Compiled-in defaults only; nothing is read at runtime.

use serde::{Deserialize, Serialize};

/// Settings for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rows shown in the head preview
    pub preview_rows: usize,
    pub charts: ChartConfig,
    pub window: WindowConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            charts: ChartConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub histogram_bins: usize,
    /// Plot area height inside a chart card
    pub plot_height: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 15,
            plot_height: 320.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Iris EDA".to_string(),
            inner_size: [1400.0, 900.0],
            min_inner_size: [900.0, 600.0],
        }
    }
}

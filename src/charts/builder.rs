//! Chart Builder Module
//! Turns a cleaned dataset into chart-ready data. Drawing lives in the plotter.

use crate::config::ChartConfig;
use crate::data::{Dataset, Feature};
use crate::stats::StatsCalculator;
use log::info;
use polars::prelude::*;
use std::collections::BTreeMap;

/// One bar of a category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub value: f64,
}

/// Half-open `[start, end)` bin; the last bin of a histogram also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Points belonging to one species.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Line {
        series_name: String,
        points: Vec<[f64; 2]>,
    },
    Bar {
        bars: Vec<CategoryBar>,
    },
    Histogram {
        bins: Vec<HistogramBin>,
    },
    Scatter {
        legend_title: String,
        series: Vec<ScatterSeries>,
    },
}

/// A titled chart with labeled axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: &'static str,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
}

impl Chart {
    /// Labels shown in the chart legend.
    pub fn legend_entries(&self) -> Vec<&str> {
        match &self.kind {
            ChartKind::Line { series_name, .. } => vec![series_name.as_str()],
            ChartKind::Scatter { series, .. } => series.iter().map(|s| s.label.as_str()).collect(),
            ChartKind::Bar { .. } | ChartKind::Histogram { .. } => Vec::new(),
        }
    }
}

/// Builds the four exploratory charts.
pub struct ChartBuilder;

impl ChartBuilder {
    /// Line, bar, histogram and scatter charts, in that order.
    pub fn build_all(dataset: &Dataset, config: &ChartConfig) -> PolarsResult<Vec<Chart>> {
        let charts = vec![
            Self::line_chart(dataset),
            Self::bar_chart(dataset)?,
            Self::histogram(dataset, config.histogram_bins),
            Self::scatter_chart(dataset),
        ];
        info!("built {} charts from {} records", charts.len(), dataset.len());
        Ok(charts)
    }

    /// Petal length against 0-based record position.
    pub fn line_chart(dataset: &Dataset) -> Chart {
        let points = dataset
            .feature_column(Feature::PetalLength)
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| [i as f64, v]))
            .collect();

        Chart {
            id: "line",
            title: "Line Chart: Petal Length over Samples".to_string(),
            x_label: "Sample Index".to_string(),
            y_label: "Petal Length (cm)".to_string(),
            kind: ChartKind::Line {
                series_name: "Petal Length".to_string(),
                points,
            },
        }
    }

    /// Mean petal length per species, labels ascending.
    pub fn bar_chart(dataset: &Dataset) -> PolarsResult<Chart> {
        let grouped = StatsCalculator::grouped_means(dataset)?;
        let bars = grouped
            .groups
            .iter()
            .map(|g| CategoryBar {
                label: g.label.clone(),
                value: g.mean(Feature::PetalLength),
            })
            .collect();

        Ok(Chart {
            id: "bar",
            title: "Bar Chart: Average Petal Length by Species".to_string(),
            x_label: "Species".to_string(),
            y_label: "Average Petal Length (cm)".to_string(),
            kind: ChartKind::Bar { bars },
        })
    }

    /// Sepal width distribution over `bins` equal-width bins.
    pub fn histogram(dataset: &Dataset, bins: usize) -> Chart {
        let values = dataset.feature_values(Feature::SepalWidth);

        Chart {
            id: "histogram",
            title: "Histogram: Sepal Width Distribution".to_string(),
            x_label: "Sepal Width (cm)".to_string(),
            y_label: "Frequency".to_string(),
            kind: ChartKind::Histogram {
                bins: Self::histogram_bins(&values, bins),
            },
        }
    }

    /// Sepal length against petal length, one series per species.
    pub fn scatter_chart(dataset: &Dataset) -> Chart {
        let xs = dataset.feature_column(Feature::SepalLength);
        let ys = dataset.feature_column(Feature::PetalLength);
        let labels = dataset.species_labels();

        let mut by_label: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
        for ((x, y), label) in xs.into_iter().zip(ys).zip(labels) {
            if let (Some(x), Some(y), Some(label)) = (x, y, label) {
                by_label.entry(label).or_default().push([x, y]);
            }
        }

        let series = by_label
            .into_iter()
            .map(|(label, points)| ScatterSeries { label, points })
            .collect();

        Chart {
            id: "scatter",
            title: "Scatter Plot: Sepal Length vs Petal Length".to_string(),
            x_label: "Sepal Length (cm)".to_string(),
            y_label: "Petal Length (cm)".to_string(),
            kind: ChartKind::Scatter {
                legend_title: "Species".to_string(),
                series,
            },
        }
    }

    /// Equal-width bins over `[min, max]`, last bin right-inclusive.
    ///
    /// A constant sample is widened to `[v - 0.5, v + 0.5]` and an empty one
    /// is binned over `[0, 1]`.
    pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
        if bins == 0 {
            return Vec::new();
        }

        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let (lo, hi) = match (
            finite.iter().copied().reduce(f64::min),
            finite.iter().copied().reduce(f64::max),
        ) {
            (Some(lo), Some(hi)) if lo < hi => (lo, hi),
            (Some(v), Some(_)) => (v - 0.5, v + 0.5),
            _ => (0.0, 1.0),
        };

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for v in &finite {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + i as f64 * width,
                end: if i + 1 == bins {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count,
            })
            .collect()
    }
}

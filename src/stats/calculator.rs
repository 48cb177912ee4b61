//! Statistics Calculator Module
//! Handles descriptive statistics and per-species mean aggregates.

use crate::data::{Dataset, Feature, SPECIES_COLUMN};
use polars::prelude::*;
use statrs::statistics::Statistics;

/// Row labels of the describe table, in print order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics for a single column.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl DescriptiveStats {
    /// Values in [`STAT_LABELS`] order.
    pub fn as_row(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Whole-dataset statistics, one entry per feature.
#[derive(Debug, Clone)]
pub struct Summary {
    pub columns: Vec<(Feature, DescriptiveStats)>,
}

impl Summary {
    pub fn get(&self, feature: Feature) -> Option<&DescriptiveStats> {
        self.columns
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, stats)| stats)
    }

    /// Describe table: a `statistic` column followed by one column per feature.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut columns = vec![Column::new("statistic".into(), STAT_LABELS.to_vec())];
        for (feature, stats) in &self.columns {
            columns.push(Column::new(
                feature.column_name().into(),
                stats.as_row().to_vec(),
            ));
        }
        DataFrame::new(columns)
    }
}

/// Mean of every feature for one species label.
#[derive(Debug, Clone)]
pub struct GroupMean {
    pub label: String,
    pub means: [f64; 4],
}

impl GroupMean {
    pub fn mean(&self, feature: Feature) -> f64 {
        self.means[feature.index()]
    }
}

/// Per-species means, ordered by label ascending.
#[derive(Debug, Clone)]
pub struct GroupedMeans {
    pub frame: DataFrame,
    pub groups: Vec<GroupMean>,
}

impl GroupedMeans {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&GroupMean> {
        self.groups.iter().find(|g| g.label == label)
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// Standard deviation uses n - 1 and is NaN below two values; an empty
    /// slice yields count 0 and NaN everywhere else.
    pub fn compute_descriptive_stats(values: &[f64]) -> DescriptiveStats {
        let n = values.len();
        if n == 0 {
            return DescriptiveStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        DescriptiveStats {
            count: n,
            mean: Statistics::mean(values),
            std: Statistics::std_dev(values),
            min: Statistics::min(values),
            q25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: Statistics::max(values),
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Statistics of every feature over the whole dataset.
    pub fn describe(dataset: &Dataset) -> Summary {
        let columns = Feature::ALL
            .iter()
            .map(|&feature| {
                let values = dataset.feature_values(feature);
                (feature, Self::compute_descriptive_stats(&values))
            })
            .collect();
        Summary { columns }
    }

    /// Mean of each feature per distinct species label, labels ascending.
    pub fn grouped_means(dataset: &Dataset) -> PolarsResult<GroupedMeans> {
        let aggs: Vec<Expr> = Feature::ALL
            .iter()
            .map(|f| col(f.column_name()).mean())
            .collect();

        let frame = dataset
            .frame()
            .clone()
            .lazy()
            .group_by([col(SPECIES_COLUMN)])
            .agg(aggs)
            .sort([SPECIES_COLUMN], SortMultipleOptions::default())
            .collect()?;

        let labels = frame.column(SPECIES_COLUMN)?.str()?;
        let mut feature_means: Vec<&Float64Chunked> = Vec::with_capacity(Feature::ALL.len());
        for feature in Feature::ALL {
            feature_means.push(frame.column(feature.column_name())?.f64()?);
        }

        let groups: Vec<GroupMean> = labels
            .into_iter()
            .enumerate()
            .filter_map(|(i, label)| {
                let label = label?.to_string();
                let mut means = [f64::NAN; 4];
                for (slot, ca) in means.iter_mut().zip(&feature_means) {
                    *slot = ca.get(i).unwrap_or(f64::NAN);
                }
                Some(GroupMean { label, means })
            })
            .collect();

        Ok(GroupedMeans { frame, groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, Species};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn descriptive_stats_match_pandas_describe() {
        let stats = StatsCalculator::compute_descriptive_stats(&[4.0, 1.0, 3.0, 2.0]);

        assert_eq!(stats.count, 4);
        assert_close(stats.mean, 2.5);
        assert_close(stats.std, (5.0f64 / 3.0).sqrt());
        assert_close(stats.min, 1.0);
        assert_close(stats.q25, 1.75);
        assert_close(stats.median, 2.5);
        assert_close(stats.q75, 3.25);
        assert_close(stats.max, 4.0);
    }

    #[test]
    fn empty_input_is_count_zero_and_nan() {
        let stats = StatsCalculator::compute_descriptive_stats(&[]);

        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.std.is_nan());
        assert!(stats.min.is_nan());
        assert!(stats.median.is_nan());
    }

    #[test]
    fn single_value_has_undefined_std() {
        let stats = StatsCalculator::compute_descriptive_stats(&[3.5]);

        assert_eq!(stats.count, 1);
        assert_close(stats.mean, 3.5);
        assert!(stats.std.is_nan());
        assert_close(stats.q25, 3.5);
        assert_close(stats.q75, 3.5);
    }

    #[test]
    fn describe_count_equals_record_count() {
        let dataset = Dataset::from_records(&[
            Record::new(5.1, 3.5, 1.4, 0.2, Species::Setosa),
            Record::new(7.0, 3.2, 4.7, 1.4, Species::Versicolor),
            Record::new(6.3, 3.3, 6.0, 2.5, Species::Virginica),
        ])
        .unwrap();

        let summary = StatsCalculator::describe(&dataset);

        assert_eq!(summary.columns.len(), 4);
        for (_, stats) in &summary.columns {
            assert_eq!(stats.count, dataset.len());
        }
        let frame = summary.to_frame().unwrap();
        assert_eq!(frame.shape(), (8, 5));
    }

    #[test]
    fn describe_empty_dataset_does_not_fail() {
        let dataset = Dataset::from_records(&[]).unwrap();

        let summary = StatsCalculator::describe(&dataset);

        let stats = summary.get(Feature::SepalWidth).unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.std.is_nan());
        assert!(summary.to_frame().is_ok());
    }

    #[test]
    fn grouped_means_use_only_their_label() {
        let dataset = Dataset::from_records(&[
            Record::new(6.0, 3.0, 5.0, 2.0, Species::Virginica),
            Record::new(5.0, 3.0, 1.0, 0.2, Species::Setosa),
            Record::new(6.0, 2.0, 4.0, 1.0, Species::Versicolor),
            Record::new(7.0, 3.0, 6.0, 2.4, Species::Virginica),
            Record::new(5.2, 4.0, 2.0, 0.4, Species::Setosa),
            Record::new(6.2, 3.0, 5.0, 1.6, Species::Versicolor),
        ])
        .unwrap();

        let grouped = StatsCalculator::grouped_means(&dataset).unwrap();

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped.frame.height(), 3);
        let labels: Vec<&str> = grouped.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["setosa", "versicolor", "virginica"]);

        let setosa = grouped.get("setosa").unwrap();
        assert_close(setosa.mean(Feature::SepalLength), 5.1);
        assert_close(setosa.mean(Feature::PetalLength), 1.5);
        let versicolor = grouped.get("versicolor").unwrap();
        assert_close(versicolor.mean(Feature::SepalWidth), 2.5);
        let virginica = grouped.get("virginica").unwrap();
        assert_close(virginica.mean(Feature::PetalWidth), 2.2);
    }

    #[test]
    fn grouped_means_of_empty_dataset_is_empty() {
        let dataset = Dataset::from_records(&[]).unwrap();
        let grouped = StatsCalculator::grouped_means(&dataset).unwrap();
        assert!(grouped.is_empty());
    }
}

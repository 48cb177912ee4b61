//! End-to-end checks of load → clean → summarize → aggregate → visualize.

use iris_eda::charts::{ChartBuilder, ChartKind};
use iris_eda::config::AnalysisConfig;
use iris_eda::data::{DataLoader, DataProcessor, Dataset, Feature, Record, Species};
use iris_eda::stats::StatsCalculator;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual}"
    );
}

#[cfg(feature = "bundled-dataset")]
mod bundled {
    use super::*;

    fn cleaned() -> Dataset {
        let loaded = DataLoader::load_bundled().unwrap();
        DataProcessor::drop_missing(&loaded).unwrap()
    }

    #[test]
    fn cleaner_is_a_no_op_on_the_standard_dataset() {
        let loaded = DataLoader::load_bundled().unwrap();
        let cleaned = DataProcessor::drop_missing(&loaded).unwrap();

        assert_eq!(loaded.len(), 150);
        assert_eq!(cleaned.len(), 150);
        assert_eq!(cleaned.records(), loaded.records());
    }

    #[test]
    fn summary_matches_reference_values() {
        let summary = StatsCalculator::describe(&cleaned());

        for (_, stats) in &summary.columns {
            assert_eq!(stats.count, 150);
        }

        let expected = [
            (Feature::SepalLength, 5.843333, 0.828066, 4.3, 5.8, 7.9),
            (Feature::SepalWidth, 3.057333, 0.435866, 2.0, 3.0, 4.4),
            (Feature::PetalLength, 3.758, 1.765298, 1.0, 4.35, 6.9),
            (Feature::PetalWidth, 1.199333, 0.762238, 0.1, 1.3, 2.5),
        ];
        for (feature, mean, std, min, median, max) in expected {
            let stats = summary.get(feature).unwrap();
            assert_close(stats.mean, mean, 1e-6);
            assert_close(stats.std, std, 1e-6);
            assert_close(stats.min, min, 1e-12);
            assert_close(stats.median, median, 1e-9);
            assert_close(stats.max, max, 1e-12);
        }

        let petal_length = summary.get(Feature::PetalLength).unwrap();
        assert_close(petal_length.q25, 1.6, 1e-9);
        assert_close(petal_length.q75, 5.1, 1e-9);
    }

    #[test]
    fn grouped_means_have_one_row_per_species() {
        let grouped = StatsCalculator::grouped_means(&cleaned()).unwrap();

        assert_eq!(grouped.len(), 3);
        let expected = [
            ("setosa", [5.006, 3.428, 1.462, 0.246]),
            ("versicolor", [5.936, 2.770, 4.260, 1.326]),
            ("virginica", [6.588, 2.974, 5.552, 2.026]),
        ];
        for ((label, means), group) in expected.iter().zip(&grouped.groups) {
            assert_eq!(group.label, *label);
            for feature in Feature::ALL {
                assert_close(group.mean(feature), means[feature.index()], 1e-9);
            }
        }
    }

    #[test]
    fn visualizer_builds_four_charts() {
        let dataset = cleaned();
        let charts = ChartBuilder::build_all(&dataset, &AnalysisConfig::default().charts).unwrap();

        assert_eq!(charts.len(), 4);
        assert_eq!(charts[3].legend_entries().len(), 3);

        match &charts[2].kind {
            ChartKind::Histogram { bins } => {
                assert_eq!(bins.len(), 15);
                assert_close(bins[0].start, 2.0, 1e-12);
                assert_close(bins[14].end, 4.4, 1e-12);
                assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 150);
            }
            other => panic!("expected histogram, got {:?}", other),
        }

        match &charts[0].kind {
            ChartKind::Line { points, .. } => {
                assert_eq!(points.len(), 150);
                assert_eq!(points[149][0], 149.0);
            }
            other => panic!("expected line chart, got {:?}", other),
        }
    }
}

#[test]
fn cleaning_removes_records_missing_a_value() {
    let mut records: Vec<Record> = (0..6)
        .map(|i| {
            let species = Species::ALL[i % 3];
            Record::new(5.0 + i as f64 * 0.1, 3.0, 1.5 + i as f64, 0.2, species)
        })
        .collect();
    records[4].sepal_width = None;
    let dataset = Dataset::from_records(&records).unwrap();

    let cleaned = DataProcessor::drop_missing(&dataset).unwrap();

    assert_eq!(cleaned.len(), dataset.len() - 1);
    assert!(cleaned.records().iter().all(Record::is_complete));
    let summary = StatsCalculator::describe(&cleaned);
    for (_, stats) in &summary.columns {
        assert_eq!(stats.count, cleaned.len());
    }
}

#[test]
fn nan_in_the_csv_is_cleaned_like_an_empty_field() {
    let manifest = r#"{
        "name": "mini",
        "version": "0.1",
        "n_samples": 3,
        "feature_names": ["sepal length (cm)", "sepal width (cm)", "petal length (cm)", "petal width (cm)"],
        "target_column": "target",
        "target_names": ["setosa", "versicolor", "virginica"]
    }"#;
    let csv = "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
5.1,3.5,1.4,0.2,0
7.0,NaN,4.7,1.4,1
6.3,3.3,6.0,2.5,2
";
    let loaded = DataLoader::load_from_sources(manifest, csv).unwrap();

    let cleaned = DataProcessor::drop_missing(&loaded).unwrap();

    assert_eq!(loaded.len(), 3);
    assert_eq!(cleaned.len(), 2);
    assert_eq!(cleaned.incomplete_count(), 0);
    let summary = StatsCalculator::describe(&cleaned);
    for (_, stats) in &summary.columns {
        assert_eq!(stats.count, cleaned.len());
    }
}

#[test]
fn empty_dataset_flows_through_every_stage() {
    let dataset = Dataset::from_records(&[]).unwrap();
    let cleaned = DataProcessor::drop_missing(&dataset).unwrap();

    let summary = StatsCalculator::describe(&cleaned);
    for (_, stats) in &summary.columns {
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.std.is_nan());
    }

    let grouped = StatsCalculator::grouped_means(&cleaned).unwrap();
    assert!(grouped.is_empty());

    let charts = ChartBuilder::build_all(&cleaned, &AnalysisConfig::default().charts).unwrap();
    assert_eq!(charts.len(), 4);
}

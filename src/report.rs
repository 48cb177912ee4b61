//! Console Report
//! Human-readable output of each pipeline stage, printed with Polars' table formatter.

use crate::data::{DataProcessor, Dataset, Feature};
use crate::stats::{GroupedMeans, Summary};
use polars::prelude::*;

/// Column-level metadata: position, name, non-null count and dtype.
pub fn info_frame(dataset: &Dataset) -> PolarsResult<DataFrame> {
    let columns = dataset.frame().get_columns();

    let positions: Vec<u32> = (0..columns.len() as u32).collect();
    let names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
    let non_null: Vec<u32> = columns
        .iter()
        .map(|c| (c.len() - c.null_count()) as u32)
        .collect();
    let dtypes: Vec<String> = columns.iter().map(|c| c.dtype().to_string()).collect();

    DataFrame::new(vec![
        Column::new("#".into(), positions),
        Column::new("column".into(), names),
        Column::new("non-null count".into(), non_null),
        Column::new("dtype".into(), dtypes),
    ])
}

/// Missing-value count per column.
pub fn missing_frame(dataset: &Dataset) -> PolarsResult<DataFrame> {
    let (names, counts): (Vec<String>, Vec<u32>) = DataProcessor::null_counts(dataset)
        .into_iter()
        .map(|(name, count)| (name, count as u32))
        .unzip();

    DataFrame::new(vec![
        Column::new("column".into(), names),
        Column::new("missing".into(), counts),
    ])
}

/// Sentence comparing average petal length across species.
pub fn observation(grouped: &GroupedMeans) -> String {
    let petal: Vec<(&str, f64)> = grouped
        .groups
        .iter()
        .map(|g| (g.label.as_str(), g.mean(Feature::PetalLength)))
        .filter(|(_, mean)| mean.is_finite())
        .collect();

    let largest = petal.iter().copied().max_by(|a, b| a.1.total_cmp(&b.1));
    let smallest = petal.iter().copied().min_by(|a, b| a.1.total_cmp(&b.1));

    match (largest, smallest) {
        (Some((high, high_mean)), Some((low, low_mean))) if petal.len() > 1 => format!(
            "Observation: Different species show different average petal lengths and widths \
             ({} averages {:.2} cm petal length, {} only {:.2} cm).",
            high, high_mean, low, low_mean
        ),
        _ => "Observation: Not enough species groups to compare average petal dimensions."
            .to_string(),
    }
}

/// Load acknowledgement, head preview, info and missing-value tables.
pub fn print_loaded(dataset: &Dataset, preview_rows: usize) -> PolarsResult<()> {
    println!("✅ Dataset loaded successfully!");

    println!("\n--- First {} Rows ---", preview_rows);
    println!("{}", dataset.head(preview_rows));

    println!("\n--- Dataset Info ---");
    println!(
        "{} entries, {} columns, ~{} bytes",
        dataset.len(),
        dataset.frame().width(),
        dataset.frame().estimated_size()
    );
    println!("{}", info_frame(dataset)?);

    println!("\n--- Missing Values ---");
    println!("{}", missing_frame(dataset)?);
    Ok(())
}

pub fn print_summary(summary: &Summary) -> PolarsResult<()> {
    println!("\n--- Summary Statistics ---");
    println!("{}", summary.to_frame()?);
    Ok(())
}

pub fn print_grouped(grouped: &GroupedMeans) {
    println!("\n--- Mean values by species ---");
    println!("{}", grouped.frame);
    println!("\n{}", observation(grouped));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, Species};
    use crate::stats::StatsCalculator;

    fn dataset() -> Dataset {
        Dataset::from_records(&[
            Record::new(5.1, 3.5, 1.4, 0.2, Species::Setosa),
            Record {
                petal_width: None,
                ..Record::new(7.0, 3.2, 4.7, 1.4, Species::Versicolor)
            },
            Record::new(6.3, 3.3, 6.0, 2.5, Species::Virginica),
        ])
        .unwrap()
    }

    #[test]
    fn info_frame_reports_non_null_counts() {
        let info = info_frame(&dataset()).unwrap();

        assert_eq!(info.height(), 5);
        let non_null: Vec<Option<u32>> = info
            .column("non-null count")
            .unwrap()
            .u32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(non_null, vec![Some(3), Some(3), Some(3), Some(2), Some(3)]);
    }

    #[test]
    fn missing_frame_lists_every_column() {
        let missing = missing_frame(&dataset()).unwrap();

        assert_eq!(missing.shape(), (5, 2));
        let counts: Vec<Option<u32>> = missing
            .column("missing")
            .unwrap()
            .u32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(counts, vec![Some(0), Some(0), Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn observation_names_extreme_species() {
        let grouped = StatsCalculator::grouped_means(&dataset()).unwrap();

        let sentence = observation(&grouped);

        assert!(sentence.starts_with("Observation: Different species"));
        assert!(sentence.contains("virginica averages 6.00"));
        assert!(sentence.contains("setosa only 1.40"));
    }

    #[test]
    fn observation_with_single_group_is_neutral() {
        let single = Dataset::from_records(&[Record::new(5.1, 3.5, 1.4, 0.2, Species::Setosa)])
            .unwrap();
        let grouped = StatsCalculator::grouped_means(&single).unwrap();

        assert!(observation(&grouped).contains("Not enough species groups"));
    }
}

//! Data Processor Module
//! Handles data cleaning (missing-value removal).

use super::model::{Dataset, DatasetError};
use log::info;
use polars::prelude::*;

/// Handles data cleaning operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Drop every record with at least one missing attribute.
    ///
    /// Record order is preserved. Cleaning a clean dataset returns an equal
    /// dataset, and an empty result is valid.
    pub fn drop_missing(dataset: &Dataset) -> Result<Dataset, DatasetError> {
        let df = dataset.frame().clone().lazy().drop_nulls(None).collect()?;

        let dropped = dataset.len() - df.height();
        if dropped > 0 {
            info!("dropped {} of {} records with missing values", dropped, dataset.len());
        }

        Dataset::from_frame(df)
    }

    /// Missing-value count per column, in column order.
    pub fn null_counts(dataset: &Dataset) -> Vec<(String, usize)> {
        dataset
            .frame()
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }
}

//! Dataset Loader Module
//! Materializes the bundled Iris table using serde for the manifest and Polars for the CSV body.

use super::model::{Dataset, Feature, Species, SPECIES_COLUMN};
use log::{debug, info};
use polars::prelude::*;
use serde::Deserialize;
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "bundled-dataset")]
const BUNDLED_MANIFEST: Option<&str> = Some(include_str!("../../data/iris.json"));
#[cfg(feature = "bundled-dataset")]
const BUNDLED_CSV: Option<&str> = Some(include_str!("../../data/iris.csv"));

#[cfg(not(feature = "bundled-dataset"))]
const BUNDLED_MANIFEST: Option<&str> = None;
#[cfg(not(feature = "bundled-dataset"))]
const BUNDLED_CSV: Option<&str> = None;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(String),
}

impl LoaderError {
    fn unavailable(reason: impl Into<String>) -> Self {
        LoaderError::DataUnavailable(reason.into())
    }
}

/// Describes the embedded CSV: expected shape, column names and label names.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub source: String,
    pub n_samples: usize,
    pub feature_names: Vec<String>,
    pub target_column: String,
    pub target_names: Vec<Species>,
}

/// Loads the built-in dataset. No file path is involved.
pub struct DataLoader;

impl DataLoader {
    /// Load the dataset embedded at build time.
    pub fn load_bundled() -> Result<Dataset, LoaderError> {
        let (Some(manifest), Some(csv)) = (BUNDLED_MANIFEST, BUNDLED_CSV) else {
            return Err(LoaderError::unavailable(
                "binary was built without the `bundled-dataset` feature",
            ));
        };
        Self::load_from_sources(manifest, csv)
    }

    /// Load a dataset from a JSON manifest and a CSV body.
    pub fn load_from_sources(manifest_json: &str, csv: &str) -> Result<Dataset, LoaderError> {
        let manifest: DatasetManifest = serde_json::from_str(manifest_json)
            .map_err(|e| LoaderError::unavailable(format!("malformed manifest: {e}")))?;
        debug!(
            "manifest: {} v{} ({}), {} samples",
            manifest.name, manifest.version, manifest.source, manifest.n_samples
        );

        Self::validate_manifest(&manifest)?;

        let raw = CsvReadOptions::default()
            .with_has_header(true)
            .with_schema(Some(Arc::new(Self::csv_schema(&manifest))))
            .into_reader_with_file_handle(Cursor::new(csv.to_string()))
            .finish()
            .map_err(|e| LoaderError::unavailable(format!("unreadable data: {e}")))?;

        if raw.height() != manifest.n_samples {
            return Err(LoaderError::unavailable(format!(
                "expected {} samples, found {}",
                manifest.n_samples,
                raw.height()
            )));
        }

        let species = Self::map_target_codes(&raw, &manifest)?;

        let mut columns: Vec<Column> = Vec::with_capacity(Feature::ALL.len() + 1);
        for feature in Feature::ALL {
            let column = raw
                .column(feature.column_name())
                .map_err(|e| LoaderError::unavailable(e.to_string()))?;
            columns.push(column.clone());
        }
        columns.push(Column::new(SPECIES_COLUMN.into(), species));

        let dataset = DataFrame::new(columns)
            .map_err(|e| LoaderError::unavailable(e.to_string()))
            .and_then(|df| {
                Dataset::from_frame(df).map_err(|e| LoaderError::unavailable(e.to_string()))
            })?;

        info!(
            "loaded {} v{}: {} records",
            manifest.name,
            manifest.version,
            dataset.len()
        );
        Ok(dataset)
    }

    /// The manifest must name exactly the feature columns this crate analyses.
    fn validate_manifest(manifest: &DatasetManifest) -> Result<(), LoaderError> {
        let expected: Vec<&str> = Feature::ALL.iter().map(|f| f.column_name()).collect();
        if manifest.feature_names != expected {
            return Err(LoaderError::unavailable(format!(
                "feature columns {:?} do not match {:?}",
                manifest.feature_names, expected
            )));
        }
        if manifest.target_names.is_empty() {
            return Err(LoaderError::unavailable("manifest lists no target names"));
        }
        Ok(())
    }

    fn csv_schema(manifest: &DatasetManifest) -> Schema {
        let mut fields: Vec<Field> = manifest
            .feature_names
            .iter()
            .map(|name| Field::new(name.as_str().into(), DataType::Float64))
            .collect();
        fields.push(Field::new(
            manifest.target_column.as_str().into(),
            DataType::Int64,
        ));
        Schema::from_iter(fields)
    }

    /// Replace integer target codes with species labels.
    fn map_target_codes(
        df: &DataFrame,
        manifest: &DatasetManifest,
    ) -> Result<Vec<Option<&'static str>>, LoaderError> {
        let target = df
            .column(&manifest.target_column)
            .map_err(|e| LoaderError::unavailable(format!("target column: {e}")))?;
        let codes = target
            .i64()
            .map_err(|e| LoaderError::unavailable(format!("target column: {e}")))?;

        codes
            .into_iter()
            .map(|code| match code {
                None => Ok(None),
                Some(code) => usize::try_from(code)
                    .ok()
                    .and_then(|idx| manifest.target_names.get(idx))
                    .map(|species| Some(species.label()))
                    .ok_or_else(|| {
                        LoaderError::unavailable(format!("unknown target code {code}"))
                    }),
            })
            .collect()
    }
}

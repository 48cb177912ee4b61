//! Dataset Model
//! Record, Feature and Species types plus the polars-backed Dataset table.

use log::error;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name of the categorical label column.
pub const SPECIES_COLUMN: &str = "species";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Column '{column}' has type {found}, expected {expected}")]
    ColumnType {
        column: String,
        found: DataType,
        expected: DataType,
    },
}

/// The four numeric measurements of a sample, all in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    /// Column order of the table.
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Feature::SepalLength => 0,
            Feature::SepalWidth => 1,
            Feature::PetalLength => 2,
            Feature::PetalWidth => 3,
        }
    }
}

/// Iris species. Ascending label order matches the dataset's target codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn label(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }

    pub fn from_label(label: &str) -> Option<Species> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sample. `None` marks a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Record {
    pub sepal_length: Option<f64>,
    pub sepal_width: Option<f64>,
    pub petal_length: Option<f64>,
    pub petal_width: Option<f64>,
    pub species: Option<Species>,
}

impl Record {
    /// A record with every attribute present.
    pub fn new(
        sepal_length: f64,
        sepal_width: f64,
        petal_length: f64,
        petal_width: f64,
        species: Species,
    ) -> Self {
        Self {
            sepal_length: Some(sepal_length),
            sepal_width: Some(sepal_width),
            petal_length: Some(petal_length),
            petal_width: Some(petal_width),
            species: Some(species),
        }
    }

    pub fn feature(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::SepalLength => self.sepal_length,
            Feature::SepalWidth => self.sepal_width,
            Feature::PetalLength => self.petal_length,
            Feature::PetalWidth => self.petal_width,
        }
    }

    /// True when no attribute is missing (NaN counts as missing).
    pub fn is_complete(&self) -> bool {
        self.species.is_some()
            && Feature::ALL
                .iter()
                .all(|&f| self.feature(f).is_some_and(|v| !v.is_nan()))
    }
}

/// Ordered table of records backed by a polars DataFrame.
///
/// Columns: the four [`Feature`] columns as `Float64`, then [`SPECIES_COLUMN`]
/// as `String`. Missing values are nulls.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
}

impl Dataset {
    /// Wrap a frame after checking the column set and types.
    ///
    /// NaN feature values are turned into nulls, so every consumer sees a
    /// single representation of "missing".
    pub fn from_frame(df: DataFrame) -> Result<Self, DatasetError> {
        for feature in Feature::ALL {
            Self::check_column(&df, feature.column_name(), DataType::Float64)?;
        }
        Self::check_column(&df, SPECIES_COLUMN, DataType::String)?;

        let mut names: Vec<&str> = Feature::ALL.iter().map(|f| f.column_name()).collect();
        names.push(SPECIES_COLUMN);

        let nan_to_null: Vec<Expr> = Feature::ALL
            .iter()
            .map(|f| col(f.column_name()).fill_nan(lit(NULL)))
            .collect();
        let df = df.select(names)?.lazy().with_columns(nan_to_null).collect()?;

        Ok(Self { df })
    }

    fn check_column(df: &DataFrame, name: &str, expected: DataType) -> Result<(), DatasetError> {
        let column = df
            .column(name)
            .map_err(|_| DatasetError::MissingColumn(name.to_string()))?;
        if column.dtype() != &expected {
            return Err(DatasetError::ColumnType {
                column: name.to_string(),
                found: column.dtype().clone(),
                expected,
            });
        }
        Ok(())
    }

    /// Build a table from records; NaN feature values become missing.
    pub fn from_records(records: &[Record]) -> Result<Self, DatasetError> {
        let mut columns: Vec<Column> = Feature::ALL
            .iter()
            .map(|&feature| {
                let values: Vec<Option<f64>> = records
                    .iter()
                    .map(|r| r.feature(feature).filter(|v| !v.is_nan()))
                    .collect();
                Column::new(feature.column_name().into(), values)
            })
            .collect();

        let species: Vec<Option<&str>> = records
            .iter()
            .map(|r| r.species.map(Species::label))
            .collect();
        columns.push(Column::new(SPECIES_COLUMN.into(), species));

        Ok(Self {
            df: DataFrame::new(columns)?,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Non-missing values of a feature column, in record order.
    pub fn feature_values(&self, feature: Feature) -> Vec<f64> {
        self.feature_column(feature)
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect()
    }

    /// Feature column with missing values kept as `None`.
    pub fn feature_column(&self, feature: Feature) -> Vec<Option<f64>> {
        match self.df.column(feature.column_name()).and_then(|c| c.f64()) {
            Ok(ca) => ca.into_iter().collect(),
            Err(e) => Self::schema_violation(e),
        }
    }

    /// Species label of every record, in record order.
    pub fn species_labels(&self) -> Vec<Option<String>> {
        match self.df.column(SPECIES_COLUMN).and_then(|c| c.str()) {
            Ok(ca) => ca.into_iter().map(|v| v.map(str::to_string)).collect(),
            Err(e) => Self::schema_violation(e),
        }
    }

    // from_frame checks the schema, so reaching this is a bug.
    fn schema_violation<T>(e: PolarsError) -> Vec<T> {
        if cfg!(debug_assertions) {
            panic!("dataset schema violated: {e}");
        }
        error!("dataset schema violated: {e}");
        Vec::new()
    }

    /// Distinct species labels, ascending.
    pub fn distinct_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.species_labels().into_iter().flatten().collect();
        labels.sort();
        labels.dedup();
        labels
    }

    /// Materialize the table back into records.
    pub fn records(&self) -> Vec<Record> {
        let columns: Vec<Vec<Option<f64>>> = Feature::ALL
            .iter()
            .map(|&f| self.feature_column(f))
            .collect();
        let labels = self.species_labels();

        (0..self.len())
            .map(|i| {
                let value = |f: Feature| columns[f.index()].get(i).copied().flatten();
                Record {
                    sepal_length: value(Feature::SepalLength),
                    sepal_width: value(Feature::SepalWidth),
                    petal_length: value(Feature::PetalLength),
                    petal_width: value(Feature::PetalWidth),
                    species: labels
                        .get(i)
                        .and_then(|l| l.as_deref())
                        .and_then(Species::from_label),
                }
            })
            .collect()
    }

    /// Number of records with at least one missing attribute.
    pub fn incomplete_count(&self) -> usize {
        self.records().iter().filter(|r| !r.is_complete()).count()
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> DataFrame {
        self.df.head(Some(n))
    }
}

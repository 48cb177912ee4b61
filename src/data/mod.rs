//! Data module - dataset model, loading and cleaning

mod loader;
mod model;
mod processor;

pub use loader::{DataLoader, DatasetManifest, LoaderError};
pub use model::{Dataset, DatasetError, Feature, Record, Species, SPECIES_COLUMN};
pub use processor::DataProcessor;

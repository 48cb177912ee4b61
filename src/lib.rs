//! Iris EDA - Exploratory Data Analysis of the bundled Iris dataset
//!
//! Pipeline: load → clean → summarize → aggregate → visualize.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;
pub mod stats;

//! Stats module - descriptive statistics and grouped aggregates

mod calculator;

pub use calculator::{
    DescriptiveStats, GroupMean, GroupedMeans, StatsCalculator, Summary, STAT_LABELS,
};

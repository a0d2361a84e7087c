//! Dataset shape and missing-value summary.
//!
//! The summary is a pure function of the dataset: recomputing it for an
//! unchanged dataset yields an identical record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{DataType, Dataset};

/// Structured snapshot of dataset shape, column types, and missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Count of columns per type category
    pub dtype_counts: BTreeMap<DataType, usize>,
    /// Missing-value count per column; columns with zero missing are omitted
    pub missing: BTreeMap<String, usize>,
}

/// Summarizes a dataset: shape, per-type column counts, and per-column
/// missing-value counts.
///
/// Only columns with at least one missing value appear in `missing`.
/// The operation has no side effects and never fails: a dataset
/// reference is always present and readable in safe Rust, so the
/// unreadable-input case of the original lives in the ingest layer.
///
/// # Example
///
/// ```
/// use csvsight_core::eda::summarize;
/// use csvsight_core::models::{Column, DataType, Dataset};
///
/// let mut dataset = Dataset::new();
/// dataset
///     .add_column("a", Column::Numeric(vec![Some(1.0), Some(2.0), None]))
///     .unwrap();
/// dataset
///     .add_column(
///         "b",
///         Column::Text(vec![Some("x".into()), Some("y".into()), Some("x".into())]),
///     )
///     .unwrap();
///
/// let summary = summarize(&dataset);
/// assert_eq!(summary.rows, 3);
/// assert_eq!(summary.columns, 2);
/// assert_eq!(summary.missing.get("a"), Some(&1));
/// assert_eq!(summary.dtype_counts[&DataType::Numeric], 1);
/// assert_eq!(summary.dtype_counts[&DataType::Categorical], 1);
/// ```
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let mut dtype_counts: BTreeMap<DataType, usize> = BTreeMap::new();
    let mut missing: BTreeMap<String, usize> = BTreeMap::new();

    for (name, column) in dataset.iter() {
        *dtype_counts.entry(column.data_type()).or_insert(0) += 1;

        let null_count = column.null_count();
        if null_count > 0 {
            missing.insert(name.to_string(), null_count);
        }
    }

    DatasetSummary {
        rows: dataset.row_count(),
        columns: dataset.column_count(),
        dtype_counts,
        missing,
    }
}

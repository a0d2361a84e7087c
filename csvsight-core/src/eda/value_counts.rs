//! Occurrence counts for categorical columns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CsvSightError, Result};
use crate::models::{DataType, Dataset};

/// One distinct value and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    /// The distinct cell value
    pub value: String,
    /// Number of occurrences
    pub count: usize,
}

/// Ordered occurrence counts for one categorical column.
///
/// Entries are sorted by descending count; ties keep the order in which
/// the values first appear in the column. Nulls are excluded, so counts
/// sum to the column's non-null row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCountTable {
    /// Column name
    pub column: String,
    /// (value, count) entries, descending by count
    pub entries: Vec<ValueCount>,
}

impl ValueCountTable {
    /// Returns the sum of all counts (the column's non-null row count).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Returns a copy truncated to the `n` most frequent entries.
    pub fn top(&self, n: usize) -> Self {
        Self {
            column: self.column.clone(),
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }
}

/// Counts distinct values in a categorical column.
///
/// # Errors
/// * [`CsvSightError::ColumnNotFound`] if `column` does not exist
/// * [`CsvSightError::TypeMismatch`] if `column` is numeric
pub fn value_counts(dataset: &Dataset, column: &str) -> Result<ValueCountTable> {
    let col = dataset
        .column_by_name(column)
        .ok_or_else(|| CsvSightError::column_not_found(column))?;

    let cells = col.as_text().ok_or_else(|| {
        CsvSightError::type_mismatch(
            column,
            DataType::Categorical.to_string(),
            col.data_type().to_string(),
        )
    })?;

    // first-seen index keyed alongside the count to break ties stably
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for cell in cells.iter().flatten() {
        let next_index = counts.len();
        let entry = counts.entry(cell.as_str()).or_insert((next_index, 0));
        entry.1 += 1;
    }

    let mut ordered: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (first_seen, count))| (value, first_seen, count))
        .collect();
    ordered.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    Ok(ValueCountTable {
        column: column.to_string(),
        entries: ordered
            .into_iter()
            .map(|(value, _, count)| ValueCount {
                value: value.to_string(),
                count,
            })
            .collect(),
    })
}

//! Pearson correlation matrix over numeric columns.
//!
//! Rows with a missing value are skipped per pair (pairwise-complete
//! observations), matching standard dataframe correlation semantics.

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// Square, symmetric Pearson correlation matrix.
///
/// Entries lie in [-1, 1] or are NaN for degenerate pairs (fewer than two
/// complete observations, or zero variance on either side). The diagonal
/// is 1.0 for any column with at least one valid value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in dataset order
    pub columns: Vec<String>,
    /// Row-major matrix values; `values[i][j]` correlates `columns[i]`
    /// with `columns[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Returns the matrix dimension (number of numeric columns).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the entry at (`row`, `col`), if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Computes the Pearson correlation matrix over the dataset's numeric
/// columns.
///
/// Returns `None` (absence, not an error) when fewer than two numeric
/// columns exist. Missing values are ignored pairwise: each entry uses
/// only the rows where both columns are present.
pub fn correlation_matrix(dataset: &Dataset) -> Option<CorrelationMatrix> {
    let numeric = dataset.numeric_columns();
    if numeric.len() < 2 {
        return None;
    }

    let columns: Vec<String> = numeric.iter().map(|(name, _)| name.to_string()).collect();
    let cells: Vec<&[Option<f64>]> = numeric
        .iter()
        .filter_map(|(_, col)| col.as_numeric())
        .collect();

    let n = cells.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        // Diagonal: defined whenever the column has any data at all
        if cells[i].iter().any(Option::is_some) {
            values[i][i] = 1.0;
        }
        for j in (i + 1)..n {
            let r = pearson_pairwise(cells[i], cells[j]);
            if r.is_nan() {
                tracing::debug!(
                    "Degenerate correlation pair ('{}', '{}'): too few complete rows or zero variance",
                    columns[i],
                    columns[j]
                );
            }
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Some(CorrelationMatrix { columns, values })
}

/// Pearson correlation coefficient over rows where both values are present.
///
/// Returns NaN when fewer than two complete observations exist or either
/// side has zero variance.
fn pearson_pairwise(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    // Floating error can push |r| marginally past 1
    (cov / denom).clamp(-1.0, 1.0)
}

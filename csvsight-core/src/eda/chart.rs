//! Chart-ready data slices.
//!
//! This module extracts the minimal data needed to render one chart; it
//! performs no rendering. The presentation collaborator owns axes,
//! colors, and layout.

use serde::{Deserialize, Serialize};

use crate::error::{CsvSightError, Result};
use crate::models::{DataType, Dataset};

use super::correlation::{CorrelationMatrix, correlation_matrix};
use super::value_counts::{ValueCountTable, value_counts};

/// The kinds of charts a data slice can be prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Value distribution of one numeric column
    Histogram,
    /// Five-number spread of one numeric column
    Box,
    /// One numeric column over its row index
    Line,
    /// Occurrence counts of one categorical column
    Bar,
    /// Correlation matrix over all numeric columns
    Heatmap,
}

/// Data slice for one chart, ready for an external charting collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartData {
    /// Valid values of a numeric column
    Histogram {
        /// Source column name
        column: String,
        /// Non-null values in row order
        values: Vec<f64>,
    },
    /// Valid values of a numeric column
    Box {
        /// Source column name
        column: String,
        /// Non-null values in row order
        values: Vec<f64>,
    },
    /// (row index, value) pairs of a numeric column
    Line {
        /// Source column name
        column: String,
        /// Non-null values paired with their original row index
        points: Vec<(usize, f64)>,
    },
    /// Value counts of a categorical column
    Bar {
        /// Ordered occurrence counts
        counts: ValueCountTable,
    },
    /// Correlation matrix over numeric columns
    Heatmap {
        /// Symmetric Pearson matrix
        matrix: CorrelationMatrix,
    },
}

/// Builds the data slice for one chart over one column.
///
/// Histogram, box, and line charts require a numeric column; bar charts
/// a categorical one. Heatmap ignores `column` (it spans all numeric
/// columns) and needs at least two of them.
///
/// # Errors
/// * [`CsvSightError::ColumnNotFound`] for an unknown column
/// * [`CsvSightError::TypeMismatch`] when the column type does not fit
///   the chart kind
/// * [`CsvSightError::Analysis`] for a heatmap with fewer than two
///   numeric columns
pub fn build_chart_data(dataset: &Dataset, column: &str, kind: ChartKind) -> Result<ChartData> {
    match kind {
        ChartKind::Histogram => Ok(ChartData::Histogram {
            column: column.to_string(),
            values: numeric_values(dataset, column)?,
        }),
        ChartKind::Box => Ok(ChartData::Box {
            column: column.to_string(),
            values: numeric_values(dataset, column)?,
        }),
        ChartKind::Line => {
            let col = dataset
                .column_by_name(column)
                .ok_or_else(|| CsvSightError::column_not_found(column))?;
            let cells = col.as_numeric().ok_or_else(|| {
                CsvSightError::type_mismatch(
                    column,
                    DataType::Numeric.to_string(),
                    col.data_type().to_string(),
                )
            })?;
            let points = cells
                .iter()
                .enumerate()
                .filter_map(|(idx, v)| v.map(|v| (idx, v)))
                .collect();
            Ok(ChartData::Line {
                column: column.to_string(),
                points,
            })
        }
        ChartKind::Bar => Ok(ChartData::Bar {
            counts: value_counts(dataset, column)?,
        }),
        ChartKind::Heatmap => correlation_matrix(dataset)
            .map(|matrix| ChartData::Heatmap { matrix })
            .ok_or_else(|| {
                CsvSightError::analysis(
                    "correlation heatmap requires at least two numeric columns",
                )
            }),
    }
}

fn numeric_values(dataset: &Dataset, column: &str) -> Result<Vec<f64>> {
    let col = dataset
        .column_by_name(column)
        .ok_or_else(|| CsvSightError::column_not_found(column))?;
    col.valid_numeric_values().ok_or_else(|| {
        CsvSightError::type_mismatch(
            column,
            DataType::Numeric.to_string(),
            col.data_type().to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    fn mixed_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset
            .add_column("x", Column::Numeric(vec![Some(1.0), None, Some(3.0)]))
            .unwrap();
        dataset
            .add_column("y", Column::Numeric(vec![Some(2.0), Some(4.0), Some(6.0)]))
            .unwrap();
        dataset
            .add_column(
                "cat",
                Column::Text(vec![Some("a".into()), Some("b".into()), Some("a".into())]),
            )
            .unwrap();
        dataset
    }

    #[test]
    fn test_histogram_slice_excludes_nulls() {
        let data = build_chart_data(&mixed_dataset(), "x", ChartKind::Histogram).unwrap();
        match data {
            ChartData::Histogram { column, values } => {
                assert_eq!(column, "x");
                assert_eq!(values, vec![1.0, 3.0]);
            }
            other => panic!("expected histogram slice, got {:?}", other),
        }
    }

    #[test]
    fn test_line_slice_keeps_row_indices() {
        let data = build_chart_data(&mixed_dataset(), "x", ChartKind::Line).unwrap();
        match data {
            ChartData::Line { points, .. } => {
                assert_eq!(points, vec![(0, 1.0), (2, 3.0)]);
            }
            other => panic!("expected line slice, got {:?}", other),
        }
    }

    #[test]
    fn test_bar_slice_wraps_value_counts() {
        let data = build_chart_data(&mixed_dataset(), "cat", ChartKind::Bar).unwrap();
        match data {
            ChartData::Bar { counts } => {
                assert_eq!(counts.entries[0].value, "a");
                assert_eq!(counts.entries[0].count, 2);
            }
            other => panic!("expected bar slice, got {:?}", other),
        }
    }

    #[test]
    fn test_heatmap_requires_two_numeric_columns() {
        let data = build_chart_data(&mixed_dataset(), "x", ChartKind::Heatmap).unwrap();
        match data {
            ChartData::Heatmap { matrix } => assert_eq!(matrix.len(), 2),
            other => panic!("expected heatmap slice, got {:?}", other),
        }

        let mut single = Dataset::new();
        single
            .add_column("only", Column::Numeric(vec![Some(1.0)]))
            .unwrap();
        let result = build_chart_data(&single, "only", ChartKind::Heatmap);
        assert!(matches!(result, Err(CsvSightError::Analysis { .. })));
    }

    #[test]
    fn test_numeric_chart_on_text_column_fails() {
        let result = build_chart_data(&mixed_dataset(), "cat", ChartKind::Box);
        assert!(matches!(result, Err(CsvSightError::TypeMismatch { .. })));
    }

    #[test]
    fn test_bar_chart_on_numeric_column_fails() {
        let result = build_chart_data(&mixed_dataset(), "x", ChartKind::Bar);
        assert!(matches!(result, Err(CsvSightError::TypeMismatch { .. })));
    }

    #[test]
    fn test_unknown_column_fails() {
        let result = build_chart_data(&mixed_dataset(), "ghost", ChartKind::Histogram);
        assert!(matches!(result, Err(CsvSightError::ColumnNotFound { .. })));
    }
}

//! Core dataset model: typed columns and the immutable tabular dataset.
//!
//! A [`Dataset`] is an ordered collection of named, equal-length columns.
//! It is constructed once by the ingest layer and treated as read-only for
//! the duration of one analysis pass. Classification is deliberately
//! coarse: a column is [`Numeric`](DataType::Numeric) when every non-null
//! cell is a number, and [`Categorical`](DataType::Categorical) otherwise.
//! Free text, dates, and identifiers all land in the categorical bucket.

use serde::{Deserialize, Serialize};

use crate::error::{CsvSightError, Result};

/// Type category of a column, driving which statistics and charts apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Integer or floating-point values (stored as `f64`)
    Numeric,
    /// Any non-numeric values (text, dates, identifiers)
    Categorical,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Categorical => write!(f, "categorical"),
        }
    }
}

/// A typed column of values. `None` entries are missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum Column {
    /// Numeric values; nulls are `None`, never zero
    Numeric(Vec<Option<f64>>),
    /// Text values; nulls are `None`, never the empty string
    Text(Vec<Option<String>>),
}

impl Column {
    /// Returns the type category of this column.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Numeric(_) => DataType::Numeric,
            Self::Text(_) => DataType::Categorical,
        }
    }

    /// Returns the number of rows in this column, nulls included.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of missing (null) values.
    pub fn null_count(&self) -> usize {
        match self {
            Self::Numeric(values) => values.iter().filter(|v| v.is_none()).count(),
            Self::Text(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }

    /// Returns the number of present (non-null) values.
    pub fn valid_count(&self) -> usize {
        self.len() - self.null_count()
    }

    /// Returns the numeric cells, or `None` if this is a text column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Text(_) => None,
        }
    }

    /// Returns the text cells, or `None` if this is a numeric column.
    pub fn as_text(&self) -> Option<&[Option<String>]> {
        match self {
            Self::Text(values) => Some(values),
            Self::Numeric(_) => None,
        }
    }

    /// Returns the non-null numeric values, or `None` for a text column.
    pub fn valid_numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            Self::Numeric(values) => Some(values.iter().filter_map(|v| *v).collect()),
            Self::Text(_) => None,
        }
    }
}

/// Immutable, column-oriented tabular dataset.
///
/// All columns have the same number of rows. The dataset is never mutated
/// after construction; derived views (summaries, chart slices) are always
/// new values.
///
/// # Example
///
/// ```
/// use csvsight_core::models::{Column, DataType, Dataset};
///
/// let mut dataset = Dataset::new();
/// dataset
///     .add_column("age", Column::Numeric(vec![Some(34.0), None, Some(29.0)]))
///     .unwrap();
/// dataset
///     .add_column(
///         "city",
///         Column::Text(vec![
///             Some("Lyon".into()),
///             Some("Oslo".into()),
///             Some("Lyon".into()),
///         ]),
///     )
///     .unwrap();
///
/// assert_eq!(dataset.row_count(), 3);
/// assert_eq!(dataset.column_count(), 2);
/// assert_eq!(dataset.schema()[0], ("age".to_string(), DataType::Numeric));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Creates an empty dataset with no columns or rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named column.
    ///
    /// The first column fixes the row count; every subsequent column must
    /// match it. Duplicate column names are rejected so that name-based
    /// selection stays unambiguous.
    pub fn add_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if self.names.iter().any(|n| *n == name) {
            return Err(CsvSightError::invalid_input_msg(format!(
                "duplicate column name '{}'",
                name
            )));
        }

        let col_len = column.len();
        if self.columns.is_empty() {
            self.row_count = col_len;
        } else if col_len != self.row_count {
            return Err(CsvSightError::invalid_input_msg(format!(
                "column '{}' has {} rows, expected {}",
                name, col_len, self.row_count
            )));
        }

        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the dataset has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns the column at `index`, if it exists.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Returns the column with the given `name`, if it exists.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Returns an iterator over (name, column) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Returns the (name, type) pairs for all columns.
    pub fn schema(&self) -> Vec<(String, DataType)> {
        self.iter()
            .map(|(name, col)| (name.to_string(), col.data_type()))
            .collect()
    }

    /// Returns (name, column) pairs for numeric columns only.
    pub fn numeric_columns(&self) -> Vec<(&str, &Column)> {
        self.iter()
            .filter(|(_, col)| col.data_type() == DataType::Numeric)
            .collect()
    }

    /// Returns (name, column) pairs for categorical columns only.
    pub fn categorical_columns(&self) -> Vec<(&str, &Column)> {
        self.iter()
            .filter(|(_, col)| col.data_type() == DataType::Categorical)
            .collect()
    }
}

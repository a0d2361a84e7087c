//! Error types for csvsight operations.
//!
//! The computation layer surfaces every failure through [`CsvSightError`];
//! the presentation boundary reports it as a single user-visible message.
//! Nothing here is fatal to the process.

use thiserror::Error;

/// Main error type for csvsight operations.
#[derive(Debug, Error)]
pub enum CsvSightError {
    /// Input could not be read, decoded, or parsed as CSV
    #[error("Invalid input: {context}")]
    InvalidInput {
        /// Human-readable description of what failed
        context: String,
        /// Underlying parse or I/O error, when one exists
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested column does not exist in the dataset
    #[error("Column not found: '{name}'")]
    ColumnNotFound {
        /// The column name that was requested
        name: String,
    },

    /// Operation applied to a column of the wrong type
    #[error("Type mismatch for column '{column}': expected {expected}, found {actual}")]
    TypeMismatch {
        /// The column the operation was applied to
        column: String,
        /// Type category the operation requires
        expected: String,
        /// Type category the column actually has
        actual: String,
    },

    /// Analysis computation failed
    #[error("Analysis failed: {context}")]
    Analysis {
        /// Human-readable description of what failed
        context: String,
    },
}

/// Convenience type alias for Results with `CsvSightError`
pub type Result<T> = std::result::Result<T, CsvSightError>;

impl CsvSightError {
    /// Creates an invalid-input error wrapping an underlying failure.
    pub fn invalid_input<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidInput {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates an invalid-input error with no underlying source.
    pub fn invalid_input_msg(context: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Creates a type-mismatch error.
    pub fn type_mismatch(
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates an analysis error.
    pub fn analysis(context: impl Into<String>) -> Self {
        Self::Analysis {
            context: context.into(),
        }
    }
}

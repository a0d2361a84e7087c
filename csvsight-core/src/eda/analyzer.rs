//! EDA analyzer facade.
//!
//! Bundles the individual analyses into one report per pass. This is the
//! "recompute on input change" entry point the host presentation layer
//! calls whenever a new dataset arrives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Dataset;

use super::correlation::{CorrelationMatrix, correlation_matrix};
use super::describe::{ColumnDescription, describe_numeric};
use super::summary::{DatasetSummary, summarize};
use super::value_counts::{ValueCountTable, value_counts};

/// Configuration for the analyzer facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaConfig {
    /// Number of most-frequent values reported per categorical column
    pub top_values: usize,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self { top_values: 10 }
    }
}

impl EdaConfig {
    /// Creates a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the value-count cutoff per categorical column.
    pub fn with_top_values(mut self, top_values: usize) -> Self {
        self.top_values = top_values;
        self
    }
}

/// Complete EDA report for one analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    /// Shape, type, and missing-value summary
    pub summary: DatasetSummary,
    /// Descriptive statistics per numeric column
    pub numeric: Vec<ColumnDescription>,
    /// Pearson correlation matrix; absent with fewer than two numeric columns
    pub correlation: Option<CorrelationMatrix>,
    /// Top-N value counts per categorical column, in dataset order
    pub categorical: Vec<ValueCountTable>,
    /// When this pass ran
    pub analyzed_at: DateTime<Utc>,
}

/// Analyzer running one full EDA pass over an immutable dataset.
///
/// Every operation is stateless and re-entrant; the analyzer only holds
/// configuration.
///
/// # Example
///
/// ```
/// use csvsight_core::eda::EdaAnalyzer;
/// use csvsight_core::ingest::CsvReadOptions;
///
/// let csv = "age,city\n34,Lyon\n29,Oslo\nNA,Lyon\n";
/// let dataset = CsvReadOptions::new().read_bytes(csv.as_bytes()).unwrap();
///
/// let report = EdaAnalyzer::with_defaults().analyze(&dataset);
/// assert_eq!(report.summary.rows, 3);
/// assert_eq!(report.summary.missing.get("age"), Some(&1));
/// assert!(report.correlation.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdaAnalyzer {
    config: EdaConfig,
}

impl EdaAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: EdaConfig) -> Self {
        Self { config }
    }

    /// Creates an analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EdaConfig::default())
    }

    /// Returns a reference to the analyzer configuration.
    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Runs one full analysis pass: summary, descriptive statistics,
    /// correlation matrix, and per-categorical-column value counts.
    ///
    /// The dataset is only read; two passes over the same dataset produce
    /// the same report apart from the timestamp.
    pub fn analyze(&self, dataset: &Dataset) -> EdaReport {
        let summary = summarize(dataset);
        let numeric = describe_numeric(dataset);
        let correlation = correlation_matrix(dataset);

        let mut categorical = Vec::new();
        for (name, _) in dataset.categorical_columns() {
            // Name and type come from the dataset itself, so a failure
            // here would be a model bug; skip and keep the rest.
            match value_counts(dataset, name) {
                Ok(table) => categorical.push(table.top(self.config.top_values)),
                Err(e) => {
                    tracing::warn!("Value counts failed for column '{}': {}", name, e);
                }
            }
        }

        tracing::debug!(
            "Analyzed {} rows, {} columns ({} numeric, {} categorical)",
            summary.rows,
            summary.columns,
            numeric.len(),
            categorical.len()
        );

        EdaReport {
            summary,
            numeric,
            correlation,
            categorical,
            analyzed_at: Utc::now(),
        }
    }
}

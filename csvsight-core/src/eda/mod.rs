//! Exploratory data analysis over an immutable dataset.
//!
//! This module provides the computation layer of csvsight:
//! - **Summary**: shape, per-type column counts, missing values
//! - **Describe**: descriptive statistics per numeric column
//! - **Correlation**: Pearson matrix over numeric columns
//! - **Value counts**: ordered occurrence counts per categorical column
//! - **Chart data**: minimal slices for an external charting collaborator
//!
//! Every operation is a pure function of the dataset; the
//! [`EdaAnalyzer`] facade runs them all in one pass.
//!
//! # Example
//! ```
//! use csvsight_core::eda::EdaAnalyzer;
//! use csvsight_core::ingest::CsvReadOptions;
//!
//! let csv = "x,y,label\n1,2,a\n2,4,b\n3,6,a\n";
//! let dataset = CsvReadOptions::new().read_bytes(csv.as_bytes()).unwrap();
//! let report = EdaAnalyzer::with_defaults().analyze(&dataset);
//!
//! assert!(report.correlation.is_some());
//! assert_eq!(report.categorical[0].entries[0].value, "a");
//! ```

mod analyzer;
mod chart;
mod correlation;
mod describe;
mod summary;
mod value_counts;

// Re-export public API
pub use analyzer::{EdaAnalyzer, EdaConfig, EdaReport};
pub use chart::{ChartData, ChartKind, build_chart_data};
pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use describe::{ColumnDescription, describe_numeric};
pub use summary::{DatasetSummary, summarize};
pub use value_counts::{ValueCount, ValueCountTable, value_counts};

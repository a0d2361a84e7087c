//! Core dataset model and EDA analyzers for csvsight.
//!
//! This crate provides the computation layer behind the `csvsight`
//! binary: a typed, column-oriented dataset model, CSV ingestion with
//! encoding support and type inference, and stateless exploratory-data-
//! analysis operations. It exposes plain data structures only; all
//! rendering and layout belongs to the presentation collaborator.
//!
//! # Architecture
//! - [`models`] — immutable [`Dataset`](models::Dataset) of typed columns
//! - [`ingest`] — CSV parsing, null markers, column type inference
//! - [`eda`] — summary, describe, correlation, value counts, chart slices
//! - [`error`] — single error taxonomy for the whole computation layer
//!
//! One analysis pass is synchronous and single-threaded: the host loads
//! a dataset once, calls [`eda::EdaAnalyzer::analyze`], and renders the
//! resulting report. The dataset is never mutated in place.

pub mod eda;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use eda::{EdaAnalyzer, EdaConfig, EdaReport};
pub use error::{CsvSightError, Result};
pub use ingest::{CsvReadOptions, InputEncoding};
pub use logging::init_logging;
pub use models::{Column, DataType, Dataset};

//! CSV ingestion with encoding support and column type inference.
//!
//! Parsing happens in two passes: cells are first collected column-major
//! as raw strings, then each column is classified. A column becomes
//! [`Numeric`](Column::Numeric) only when every non-null cell parses as a
//! number; a single non-numeric cell demotes the whole column to text.
//! A failed parse aborts the pass and produces no partial dataset.

use std::fs;
use std::path::Path;

use crate::error::{CsvSightError, Result};
use crate::models::{Column, Dataset};

/// Default set of cell values treated as missing.
const DEFAULT_NULL_MARKERS: &[&str] = &["", "NA", "N/A", "null", "NaN"];

/// Character encoding of the input byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEncoding {
    /// ISO-8859-1 / Latin-1 (decoded per the WHATWG windows-1252 mapping).
    /// Every byte sequence decodes, so legacy exports never fail here.
    #[default]
    Latin1,
    /// Strict UTF-8; undecodable bytes are an input error
    Utf8,
}

impl InputEncoding {
    fn encoding(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Latin1 => encoding_rs::WINDOWS_1252,
            Self::Utf8 => encoding_rs::UTF_8,
        }
    }
}

/// Options controlling how CSV input is read and typed.
///
/// # Example
///
/// ```
/// use csvsight_core::ingest::CsvReadOptions;
/// use csvsight_core::models::DataType;
///
/// let csv = "name;score\nAlice;1.5\nBob;NA\n";
/// let dataset = CsvReadOptions::new()
///     .with_delimiter(b';')
///     .read_bytes(csv.as_bytes())
///     .unwrap();
///
/// assert_eq!(dataset.row_count(), 2);
/// assert_eq!(dataset.schema()[1], ("score".to_string(), DataType::Numeric));
/// ```
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    delimiter: u8,
    has_header: bool,
    null_markers: Vec<String>,
    encoding: InputEncoding,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            encoding: InputEncoding::default(),
        }
    }
}

impl CsvReadOptions {
    /// Creates options with defaults: comma delimiter, header row,
    /// standard null markers, Latin-1 encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method to declare whether the first row is a header.
    /// Headerless files get synthesized `column_N` names.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Builder method to replace the set of cell values treated as null.
    pub fn with_null_markers(mut self, markers: Vec<String>) -> Self {
        self.null_markers = markers;
        self
    }

    /// Builder method to set the input encoding.
    pub fn with_encoding(mut self, encoding: InputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Reads and parses a CSV file from `path`.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            CsvSightError::invalid_input(format!("Failed to read '{}'", path.display()), e)
        })?;
        self.read_bytes(&bytes)
    }

    /// Decodes and parses CSV input from a byte slice.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let (text, _, had_errors) = self.encoding.encoding().decode(bytes);
        if had_errors {
            return Err(CsvSightError::invalid_input_msg(
                "input is not valid UTF-8; try Latin-1",
            ));
        }
        self.parse_records(&text)
    }

    fn parse_records(&self, text: &str) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .from_reader(text.as_bytes());

        let mut names: Vec<String> = if self.has_header {
            reader
                .headers()
                .map_err(|e| CsvSightError::invalid_input("Failed to parse header row", e))?
                .iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        // Column-major cell collection; a ragged row aborts the pass
        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
        for (row_idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                CsvSightError::invalid_input(format!("Failed to parse row {}", row_idx + 1), e)
            })?;

            if !self.has_header && names.is_empty() {
                names = (0..record.len()).map(|i| format!("column_{}", i)).collect();
                cells = vec![Vec::new(); names.len()];
            }

            for (col_idx, field) in record.iter().enumerate() {
                let cell = if self.null_markers.iter().any(|m| m == field) {
                    None
                } else {
                    Some(field.to_string())
                };
                cells[col_idx].push(cell);
            }
        }

        if names.is_empty() {
            return Err(CsvSightError::invalid_input_msg(
                "input contains no columns",
            ));
        }

        let row_count = cells.first().map_or(0, Vec::len);
        tracing::debug!(
            "Parsed {} rows across {} columns",
            row_count,
            names.len()
        );

        let mut dataset = Dataset::new();
        for (name, raw) in names.into_iter().zip(cells) {
            dataset.add_column(name, infer_column(raw))?;
        }
        Ok(dataset)
    }
}

/// Classifies a raw string column as numeric or text.
///
/// Numeric parsing trims surrounding whitespace; the original cell text
/// is preserved untouched when the column falls back to text.
fn infer_column(raw: Vec<Option<String>>) -> Column {
    let all_numeric = raw
        .iter()
        .flatten()
        .all(|cell| cell.trim().parse::<f64>().is_ok());

    if all_numeric && raw.iter().any(Option::is_some) {
        Column::Numeric(
            raw.into_iter()
                .map(|cell| cell.and_then(|c| c.trim().parse::<f64>().ok()))
                .collect(),
        )
    } else {
        Column::Text(raw)
    }
}

/// Reads a CSV file with default options.
pub fn read_csv_path(path: impl AsRef<Path>) -> Result<Dataset> {
    CsvReadOptions::new().read_path(path)
}

//! CSV exploratory data analysis tool.
//!
//! Loads a CSV file, runs one full analysis pass over it, and renders
//! the resulting report as text, Markdown, or JSON. All computation
//! lives in `csvsight-core`; this binary is the presentation
//! collaborator.

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use csvsight_core::eda::{EdaAnalyzer, EdaConfig};
use csvsight_core::ingest::{CsvReadOptions, InputEncoding};
use csvsight_core::logging::init_logging;
use tracing::info;

/// Command-line interface for the EDA tool
#[derive(Parser)]
#[command(name = "csvsight")]
#[command(about = "Exploratory data analysis for CSV files")]
#[command(version)]
#[command(long_about = "
csvsight - CSV exploratory data analysis

Reads a CSV file and reports:
- Dataset shape and column type counts
- Missing values per column
- Descriptive statistics for numeric columns
- Pearson correlation matrix (two or more numeric columns)
- Value counts for categorical columns

EXAMPLES:
  csvsight data.csv
  csvsight data.csv --format json -o report.json
  csvsight data.csv --delimiter ';' --encoding utf8
  csvsight data.csv --no-header --top 5
")]
struct Cli {
    /// CSV file to analyze
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Input text encoding
    #[arg(long, value_enum, default_value = "latin1")]
    encoding: EncodingArg,

    /// Number of top values reported per categorical column
    #[arg(long, default_value = "10")]
    top: usize,

    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Available report formats
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportFormat {
    /// Plain-text tables
    Text,
    /// Markdown document
    Markdown,
    /// JSON structured output
    Json,
}

/// Supported input encodings
#[derive(ValueEnum, Clone, Copy, Debug)]
enum EncodingArg {
    /// ISO-8859-1 / Latin-1 (never fails to decode)
    Latin1,
    /// Strict UTF-8
    Utf8,
}

impl From<EncodingArg> for InputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Latin1 => Self::Latin1,
            EncodingArg::Utf8 => Self::Utf8,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet)?;

    let delimiter = u8::try_from(cli.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter '{}' must be a single ASCII character", cli.delimiter))?;

    let dataset = CsvReadOptions::new()
        .with_delimiter(delimiter)
        .with_header(!cli.no_header)
        .with_encoding(cli.encoding.into())
        .read_path(&cli.file)
        .with_context(|| format!("Failed to analyze '{}'", cli.file.display()))?;

    info!(
        "Loaded '{}': {} rows, {} columns",
        cli.file.display(),
        dataset.row_count(),
        dataset.column_count()
    );

    let analyzer = EdaAnalyzer::new(EdaConfig::new().with_top_values(cli.top));
    let report = analyzer.analyze(&dataset);

    let rendered = match cli.format {
        ReportFormat::Text => render::text(&report),
        ReportFormat::Markdown => render::markdown(&report),
        ReportFormat::Json => render::json(&report)?,
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
            info!("Report written to '{}'", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

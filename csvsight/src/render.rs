//! Report rendering for the presentation boundary.
//!
//! The core emits plain data structures; this module turns an
//! [`EdaReport`] into text, Markdown, or JSON. Chart rendering stays
//! with an external charting collaborator.

use std::fmt::Write;

use anyhow::Context;
use csvsight_core::eda::{CorrelationMatrix, EdaReport};

/// Renders the report as plain-text tables.
pub fn text(report: &EdaReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Dataset Overview");
    let _ = writeln!(
        out,
        "  Shape: {} rows, {} columns",
        report.summary.rows, report.summary.columns
    );
    for (dtype, count) in &report.summary.dtype_counts {
        let _ = writeln!(out, "  {} columns: {}", dtype, count);
    }

    if !report.summary.missing.is_empty() {
        let _ = writeln!(out, "\nMissing Values");
        for (column, count) in &report.summary.missing {
            let _ = writeln!(out, "  {}: {}", column, count);
        }
    }

    if !report.numeric.is_empty() {
        let _ = writeln!(out, "\nDescriptive Statistics");
        let _ = writeln!(
            out,
            "  {:<16} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        );
        for desc in &report.numeric {
            let _ = writeln!(
                out,
                "  {:<16} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
                desc.name,
                desc.count,
                fmt_stat(desc.mean),
                fmt_stat(desc.std),
                fmt_stat(desc.min),
                fmt_stat(desc.q25),
                fmt_stat(desc.median),
                fmt_stat(desc.q75),
                fmt_stat(desc.max),
            );
        }
    }

    if let Some(matrix) = &report.correlation {
        let _ = writeln!(out, "\nCorrelation Matrix");
        out.push_str(&correlation_text(matrix));
    }

    for table in &report.categorical {
        let _ = writeln!(out, "\nValue Counts: {}", table.column);
        for entry in &table.entries {
            let _ = writeln!(out, "  {:<24} {}", entry.value, entry.count);
        }
    }

    out
}

/// Renders the report as a Markdown document.
pub fn markdown(report: &EdaReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# EDA Report\n");
    let _ = writeln!(
        out,
        "**Shape:** {} rows × {} columns\n",
        report.summary.rows, report.summary.columns
    );

    let _ = writeln!(out, "| Data Type | Columns |");
    let _ = writeln!(out, "|-----------|---------|");
    for (dtype, count) in &report.summary.dtype_counts {
        let _ = writeln!(out, "| {} | {} |", dtype, count);
    }

    if !report.summary.missing.is_empty() {
        let _ = writeln!(out, "\n## Missing Values\n");
        let _ = writeln!(out, "| Column | Missing |");
        let _ = writeln!(out, "|--------|---------|");
        for (column, count) in &report.summary.missing {
            let _ = writeln!(out, "| {} | {} |", column, count);
        }
    }

    if !report.numeric.is_empty() {
        let _ = writeln!(out, "\n## Descriptive Statistics\n");
        let _ = writeln!(
            out,
            "| column | count | mean | std | min | 25% | 50% | 75% | max |"
        );
        let _ = writeln!(out, "|--------|------:|-----:|----:|----:|----:|----:|----:|----:|");
        for desc in &report.numeric {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                desc.name,
                desc.count,
                fmt_stat(desc.mean),
                fmt_stat(desc.std),
                fmt_stat(desc.min),
                fmt_stat(desc.q25),
                fmt_stat(desc.median),
                fmt_stat(desc.q75),
                fmt_stat(desc.max),
            );
        }
    }

    if let Some(matrix) = &report.correlation {
        let _ = writeln!(out, "\n## Correlation Matrix\n");
        let _ = write!(out, "|  |");
        for name in &matrix.columns {
            let _ = write!(out, " {} |", name);
        }
        let _ = writeln!(out);
        let _ = write!(out, "|--|");
        for _ in &matrix.columns {
            let _ = write!(out, "--:|");
        }
        let _ = writeln!(out);
        for (i, name) in matrix.columns.iter().enumerate() {
            let _ = write!(out, "| **{}** |", name);
            for j in 0..matrix.len() {
                let _ = write!(out, " {} |", fmt_stat(matrix.get(i, j)));
            }
            let _ = writeln!(out);
        }
    }

    for table in &report.categorical {
        let _ = writeln!(out, "\n## Value Counts: {}\n", table.column);
        let _ = writeln!(out, "| Value | Count |");
        let _ = writeln!(out, "|-------|------:|");
        for entry in &table.entries {
            let _ = writeln!(out, "| {} | {} |", entry.value, entry.count);
        }
    }

    out
}

/// Renders the report as pretty-printed JSON.
pub fn json(report: &EdaReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

fn correlation_text(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();

    let _ = write!(out, "  {:<16}", "");
    for name in &matrix.columns {
        let _ = write!(out, " {:>10}", truncate(name, 10));
    }
    let _ = writeln!(out);

    for (i, name) in matrix.columns.iter().enumerate() {
        let _ = write!(out, "  {:<16}", truncate(name, 16));
        for j in 0..matrix.len() {
            let _ = write!(out, " {:>10}", fmt_stat(matrix.get(i, j)));
        }
        let _ = writeln!(out);
    }

    out
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

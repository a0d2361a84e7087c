//! Descriptive statistics for numeric columns.
//!
//! Matches the conventional `describe()` contract: count, mean, sample
//! standard deviation, min, quartiles with linear interpolation, max.

use serde::{Deserialize, Serialize};

use crate::models::Dataset;

/// Descriptive statistics for one numeric column, computed over valid
/// (non-null) values only.
///
/// Moments are `None` when there is nothing to compute from: all of them
/// for an empty column, the standard deviation additionally for a single
/// observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescription {
    /// Column name
    pub name: String,
    /// Number of valid (non-null) values
    pub count: usize,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Sample standard deviation (n − 1 denominator)
    pub std: Option<f64>,
    /// Minimum value
    pub min: Option<f64>,
    /// 25th percentile (Q1)
    pub q25: Option<f64>,
    /// 50th percentile (median)
    pub median: Option<f64>,
    /// 75th percentile (Q3)
    pub q75: Option<f64>,
    /// Maximum value
    pub max: Option<f64>,
}

/// Computes descriptive statistics for every numeric column.
///
/// Returns one entry per numeric column in dataset order; the result is
/// empty when the dataset has no numeric columns.
pub fn describe_numeric(dataset: &Dataset) -> Vec<ColumnDescription> {
    dataset
        .numeric_columns()
        .into_iter()
        .filter_map(|(name, column)| {
            column
                .valid_numeric_values()
                .map(|values| describe_values(name, &values))
        })
        .collect()
}

fn describe_values(name: &str, values: &[f64]) -> ColumnDescription {
    let count = values.len();
    if count == 0 {
        return ColumnDescription {
            name: name.to_string(),
            count: 0,
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        None
    } else {
        let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        Some((sum_sq / (count - 1) as f64).sqrt())
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    ColumnDescription {
        name: name.to_string(),
        count,
        mean: Some(mean),
        std,
        min: sorted.first().copied(),
        q25: Some(quantile(&sorted, 0.25)),
        median: Some(quantile(&sorted, 0.5)),
        q75: Some(quantile(&sorted, 0.75)),
        max: sorted.last().copied(),
    }
}

/// Quantile with linear interpolation between the two nearest ranks.
///
/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_describe_basic_statistics() {
        let mut dataset = Dataset::new();
        dataset
            .add_column(
                "v",
                Column::Numeric(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
            )
            .unwrap();

        let described = describe_numeric(&dataset);
        assert_eq!(described.len(), 1);

        let v = &described[0];
        assert_eq!(v.count, 4);
        assert_close(v.mean.unwrap(), 2.5);
        // Sample std of 1..4 = sqrt(5/3)
        assert_close(v.std.unwrap(), (5.0_f64 / 3.0).sqrt());
        assert_close(v.min.unwrap(), 1.0);
        assert_close(v.q25.unwrap(), 1.75);
        assert_close(v.median.unwrap(), 2.5);
        assert_close(v.q75.unwrap(), 3.25);
        assert_close(v.max.unwrap(), 4.0);
    }

    #[test]
    fn test_describe_skips_nulls() {
        let mut dataset = Dataset::new();
        dataset
            .add_column("v", Column::Numeric(vec![Some(10.0), None, Some(20.0)]))
            .unwrap();

        let v = &describe_numeric(&dataset)[0];
        assert_eq!(v.count, 2);
        assert_close(v.mean.unwrap(), 15.0);
    }

    #[test]
    fn test_describe_single_value_has_no_std() {
        let mut dataset = Dataset::new();
        dataset
            .add_column("v", Column::Numeric(vec![Some(42.0), None]))
            .unwrap();

        let v = &describe_numeric(&dataset)[0];
        assert_eq!(v.count, 1);
        assert!(v.std.is_none());
        assert_close(v.median.unwrap(), 42.0);
    }

    #[test]
    fn test_describe_all_null_column() {
        let mut dataset = Dataset::new();
        dataset
            .add_column("v", Column::Numeric(vec![None, None]))
            .unwrap();

        let v = &describe_numeric(&dataset)[0];
        assert_eq!(v.count, 0);
        assert!(v.mean.is_none());
        assert!(v.min.is_none());
        assert!(v.max.is_none());
    }

    #[test]
    fn test_describe_ignores_categorical_columns() {
        let mut dataset = Dataset::new();
        dataset
            .add_column("label", Column::Text(vec![Some("a".into())]))
            .unwrap();

        assert!(describe_numeric(&dataset).is_empty());
    }

    #[test]
    fn test_quantile_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_close(quantile(&sorted, 0.0), 1.0);
        assert_close(quantile(&sorted, 0.5), 3.0);
        assert_close(quantile(&sorted, 1.0), 5.0);
        // Between ranks: 0.25 * 4 = position 1.0 exactly
        assert_close(quantile(&sorted, 0.25), 2.0);

        let pair = [10.0, 20.0];
        assert_close(quantile(&pair, 0.25), 12.5);
        assert_close(quantile(&pair, 0.75), 17.5);
    }

    #[test]
    fn test_describe_preserves_column_order() {
        let mut dataset = Dataset::new();
        dataset
            .add_column("b", Column::Numeric(vec![Some(1.0)]))
            .unwrap();
        dataset
            .add_column("label", Column::Text(vec![Some("x".into())]))
            .unwrap();
        dataset
            .add_column("a", Column::Numeric(vec![Some(2.0)]))
            .unwrap();

        let described = describe_numeric(&dataset);
        let names: Vec<&str> = described.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}

//! End-to-end tests: CSV bytes through ingestion to a full EDA report.

use csvsight_core::eda::{self, ChartData, ChartKind, EdaAnalyzer};
use csvsight_core::error::CsvSightError;
use csvsight_core::ingest::CsvReadOptions;
use csvsight_core::models::DataType;

const TOLERANCE: f64 = 1e-9;

/// The reference scenario: A:int(1,2,null), B:text("x","y","x").
fn reference_csv() -> &'static [u8] {
    b"A,B\n1,x\n2,y\nNA,x\n"
}

#[test]
fn test_reference_scenario_summary() {
    let dataset = CsvReadOptions::new().read_bytes(reference_csv()).unwrap();
    let summary = eda::summarize(&dataset);

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.columns, 2);
    assert_eq!(summary.missing.len(), 1);
    assert_eq!(summary.missing["A"], 1);
    assert_eq!(summary.dtype_counts[&DataType::Numeric], 1);
    assert_eq!(summary.dtype_counts[&DataType::Categorical], 1);
}

#[test]
fn test_reference_scenario_value_counts() {
    let dataset = CsvReadOptions::new().read_bytes(reference_csv()).unwrap();
    let table = eda::value_counts(&dataset, "B").unwrap();

    assert_eq!(table.entries.len(), 2);
    assert_eq!(table.entries[0].value, "x");
    assert_eq!(table.entries[0].count, 2);
    assert_eq!(table.entries[1].value, "y");
    assert_eq!(table.entries[1].count, 1);
}

#[test]
fn test_reference_scenario_correlation_absent() {
    // Only one numeric column, so the matrix is absent rather than an error
    let dataset = CsvReadOptions::new().read_bytes(reference_csv()).unwrap();
    assert!(eda::correlation_matrix(&dataset).is_none());
}

#[test]
fn test_value_counts_on_numeric_column_is_type_mismatch() {
    let dataset = CsvReadOptions::new().read_bytes(reference_csv()).unwrap();
    let result = eda::value_counts(&dataset, "A");
    assert!(matches!(result, Err(CsvSightError::TypeMismatch { .. })));
}

#[test]
fn test_correlation_diagonal_and_symmetry() {
    let csv = b"x,y,z\n1,9,4\n2,7,1\n3,8,6\n4,2,2\n5,1,9\n";
    let dataset = CsvReadOptions::new().read_bytes(csv).unwrap();

    let matrix = eda::correlation_matrix(&dataset).unwrap();
    assert_eq!(matrix.len(), 3);
    for i in 0..matrix.len() {
        assert!((matrix.get(i, i).unwrap() - 1.0).abs() < TOLERANCE);
        for j in 0..matrix.len() {
            let diff = matrix.get(i, j).unwrap() - matrix.get(j, i).unwrap();
            assert!(diff.abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_full_report_over_mixed_csv() {
    let csv = b"age,height,city\n34,170,Lyon\n29,NA,Oslo\n41,182,Lyon\n25,164,Bergen\n";
    let dataset = CsvReadOptions::new().read_bytes(csv).unwrap();
    let report = EdaAnalyzer::with_defaults().analyze(&dataset);

    assert_eq!(report.summary.rows, 4);
    assert_eq!(report.summary.missing["height"], 1);

    // Describe covers both numeric columns
    assert_eq!(report.numeric.len(), 2);
    let age = report
        .numeric
        .iter()
        .find(|d| d.name == "age")
        .expect("age described");
    assert_eq!(age.count, 4);
    assert!((age.mean.unwrap() - 32.25).abs() < TOLERANCE);

    // Two numeric columns make the heatmap available
    assert!(report.correlation.is_some());

    // One categorical column with its counts
    assert_eq!(report.categorical.len(), 1);
    let city = &report.categorical[0];
    assert_eq!(city.column, "city");
    assert_eq!(city.entries[0].value, "Lyon");
    assert_eq!(city.entries[0].count, 2);
    assert_eq!(city.total(), dataset.column_by_name("city").unwrap().valid_count());
}

#[test]
fn test_chart_slices_from_ingested_data() {
    let csv = b"v,label\n5,a\nNA,b\n7,a\n";
    let dataset = CsvReadOptions::new().read_bytes(csv).unwrap();

    match eda::build_chart_data(&dataset, "v", ChartKind::Line).unwrap() {
        ChartData::Line { points, .. } => assert_eq!(points, vec![(0, 5.0), (2, 7.0)]),
        other => panic!("expected line slice, got {:?}", other),
    }

    match eda::build_chart_data(&dataset, "label", ChartKind::Bar).unwrap() {
        ChartData::Bar { counts } => assert_eq!(counts.total(), 3),
        other => panic!("expected bar slice, got {:?}", other),
    }

    // One numeric column only: heatmap is an analysis error here
    let result = eda::build_chart_data(&dataset, "v", ChartKind::Heatmap);
    assert!(matches!(result, Err(CsvSightError::Analysis { .. })));
}

#[test]
fn test_report_json_round_trip_shape() {
    let csv = b"a,b\n1,x\n2,y\n";
    let dataset = CsvReadOptions::new().read_bytes(csv).unwrap();
    let report = EdaAnalyzer::with_defaults().analyze(&dataset);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["rows"], 2);
    assert_eq!(json["summary"]["dtype_counts"]["numeric"], 1);
    assert_eq!(json["categorical"][0]["entries"][0]["value"], "x");
}

#[test]
fn test_failed_parse_yields_no_partial_dataset() {
    // Ragged input aborts the whole pass
    let csv = b"a,b\n1,2\n3,4,5\n";
    let result = CsvReadOptions::new().read_bytes(csv);
    assert!(matches!(result, Err(CsvSightError::InvalidInput { .. })));
}

//! Integration tests for dataset construction and target validation

use binsight::data::{ColumnKind, Dataset};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_dataset_load_summarizes_columns_and_target() {
    let mut df = common::create_credit_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let dataset = Dataset::load(&csv_path, "default_ind", 100).unwrap();

    assert_eq!(dataset.shape(), (12, 5));
    assert_eq!(dataset.target, "default_ind");
    assert!(dataset.target_summary.is_binary);
    assert_eq!(dataset.target_summary.events, 4);
    assert_eq!(dataset.target_summary.non_events, 8);
    let rate = dataset.target_summary.event_rate.unwrap();
    assert!((rate - 4.0 / 12.0).abs() < 1e-12);
}

#[test]
fn test_missing_target_column_is_fatal() {
    let mut df = common::create_credit_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let err = Dataset::load(&csv_path, "nonexistent", 100).unwrap_err();

    let message = err.to_string();
    assert!(
        message.contains("'nonexistent' not found"),
        "Error should name the missing target, got: {message}"
    );
    assert!(
        message.contains("default_ind"),
        "Error should list the available columns, got: {message}"
    );
}

#[test]
fn test_feature_name_lists_exclude_target() {
    let mut df = common::create_credit_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let dataset = Dataset::load(&csv_path, "default_ind", 100).unwrap();

    let features = dataset.feature_names();
    assert_eq!(features.len(), 4);
    assert!(!features.contains(&"default_ind".to_string()));

    let numeric = dataset.numeric_feature_names();
    assert!(numeric.contains(&"balance".to_string()));
    assert!(numeric.contains(&"utilization".to_string()));
    assert!(numeric.contains(&"tenure_months".to_string()));
    assert!(
        !numeric.contains(&"state".to_string()),
        "Categorical columns are not numeric features"
    );
}

#[test]
fn test_column_summaries_report_kind_and_missing() {
    let mut df = common::create_credit_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let dataset = Dataset::load(&csv_path, "default_ind", 100).unwrap();

    let balance = dataset.column_summary("balance").unwrap();
    assert_eq!(balance.kind, ColumnKind::Numeric);
    assert!((balance.missing_ratio - 2.0 / 12.0).abs() < 1e-12);

    let state = dataset.column_summary("state").unwrap();
    assert_eq!(state.kind, ColumnKind::Categorical);
    assert_eq!(state.distinct, 3);
    assert_eq!(state.missing_ratio, 0.0);
}

#[test]
fn test_non_binary_target_loads_with_unusable_summary() {
    let mut df = polars::df! {
        "amount" => [10.0f64, 20.0, 30.0],
        "grade" => [1i32, 2, 3],
    }
    .unwrap();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let dataset = Dataset::load(&csv_path, "grade", 100).unwrap();

    assert!(
        !dataset.target_summary.is_binary,
        "A 1/2/3 target is not binary"
    );
    assert!(
        dataset.target_summary.is_binary_like,
        "3 distinct values still allow class plots"
    );
    assert!(dataset.target_summary.event_rate.is_none());
    assert_eq!(
        dataset.target_summary.out_of_range, 2,
        "The 2 and the 3 fall outside the 0/1 split"
    );
}

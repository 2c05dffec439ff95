//! Unit tests for univariate summaries

use binsight::analysis::{describe, histogram, value_counts};
use polars::prelude::*;

#[test]
fn test_describe_known_values() {
    let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();

    let stats = describe(&values).expect("10 finite values must describe");

    assert_eq!(stats.count, 10);
    assert_eq!(stats.mean, 5.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 10.0);
    assert_eq!(stats.median, 5.5);
    assert_eq!(stats.q25, 3.25);
    assert_eq!(stats.q75, 7.75);
    assert!(
        (stats.std - 3.0276503540974917).abs() < 1e-12,
        "Sample std of 1..10 should be ~3.0277, got {}",
        stats.std
    );
}

#[test]
fn test_describe_skips_missing_and_nan() {
    let values = vec![Some(1.0), None, Some(f64::NAN), Some(3.0), Some(5.0)];

    let stats = describe(&values).unwrap();

    assert_eq!(stats.count, 3, "Only finite values are described");
    assert_eq!(stats.mean, 3.0);
}

#[test]
fn test_describe_single_value() {
    let stats = describe(&[Some(7.0)]).unwrap();

    assert_eq!(stats.count, 1);
    assert_eq!(stats.std, 0.0, "A single value has no spread");
    assert_eq!(stats.min, 7.0);
    assert_eq!(stats.max, 7.0);
    assert_eq!(stats.median, 7.0);
}

#[test]
fn test_describe_empty_input_is_none() {
    assert!(describe(&[]).is_none());
    assert!(describe(&[None, None]).is_none());
    assert!(describe(&[Some(f64::NAN)]).is_none());
}

#[test]
fn test_histogram_counts_cover_all_values() {
    let values: Vec<Option<f64>> = (0..100).map(|v| Some(v as f64)).collect();

    let bars = histogram(&values, 10);

    assert_eq!(bars.len(), 10);
    let total: usize = bars.iter().map(|b| b.count).sum();
    assert_eq!(total, 100, "Every value lands in exactly one bar");
    assert_eq!(bars[0].lower, 0.0);
    assert_eq!(bars[9].upper, 99.0);
}

#[test]
fn test_histogram_maximum_lands_in_last_bar() {
    let values = vec![Some(0.0), Some(5.0), Some(10.0)];

    let bars = histogram(&values, 5);

    assert_eq!(bars.last().unwrap().count, 1, "The max belongs to the last bar");
}

#[test]
fn test_histogram_degenerate_range_collapses_to_one_bar() {
    let values = vec![Some(4.0); 6];

    let bars = histogram(&values, 10);

    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].count, 6);
}

#[test]
fn test_value_counts_descending_with_ties_by_name() {
    let df = df! {
        "state" => ["NY", "CA", "CA", "TX", "CA", "NY"],
    }
    .unwrap();

    let counts = value_counts(df.column("state").unwrap()).unwrap();

    assert_eq!(counts[0], ("CA".to_string(), 3));
    assert_eq!(counts[1], ("NY".to_string(), 2));
    assert_eq!(counts[2], ("TX".to_string(), 1));
}

#[test]
fn test_value_counts_excludes_nulls() {
    let df = df! {
        "grade" => [Some("A"), None, Some("B"), Some("A"), None],
    }
    .unwrap();

    let counts = value_counts(df.column("grade").unwrap()).unwrap();

    assert_eq!(counts.len(), 2, "Nulls do not form a bucket");
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 3);
}

#[test]
fn test_value_counts_on_numeric_column_stringifies() {
    let df = df! {
        "code" => [1i32, 2, 2, 3, 3, 3],
    }
    .unwrap();

    let counts = value_counts(df.column("code").unwrap()).unwrap();

    assert_eq!(counts[0], ("3".to_string(), 3));
    assert_eq!(counts[1], ("2".to_string(), 2));
}

//! Unit tests for the adaptive binning engine

use binsight::analysis::{bin_values, BinLabel, BinStrategy};

fn range_1_to_10() -> Vec<Option<f64>> {
    (1..=10).map(|v| Some(v as f64)).collect()
}

#[test]
fn test_distinct_values_use_quantile_binning() {
    let binned = bin_values(&range_1_to_10(), 5);

    assert_eq!(
        binned.strategy,
        BinStrategy::Quantile,
        "10 distinct values with 5 bins should bin by quantiles"
    );
    assert_eq!(binned.bins.len(), 5, "Should produce the requested bin count");
    assert_eq!(
        binned.assignments.len(),
        10,
        "Every finite value gets an assignment"
    );
}

#[test]
fn test_quantile_labels_are_right_closed_intervals() {
    let binned = bin_values(&range_1_to_10(), 5);

    // First bin is closed on both ends so the minimum is covered
    assert_eq!(binned.bins[0].to_string(), "[1, 2.800]");
    assert!(
        binned.bins[1].to_string().starts_with('('),
        "Later bins are open at the lower edge, got {}",
        binned.bins[1]
    );
    assert!(
        binned.bins[4].to_string().ends_with("10]"),
        "Last bin closes on the maximum, got {}",
        binned.bins[4]
    );
}

#[test]
fn test_minimum_value_lands_in_first_bin() {
    let binned = bin_values(&range_1_to_10(), 5);

    assert_eq!(
        binned.assignments[0], 0,
        "The minimum must be assigned to the first bin"
    );
}

#[test]
fn test_constant_column_falls_back_to_identity() {
    let values: Vec<Option<f64>> = vec![Some(5.0); 10];

    let binned = bin_values(&values, 5);

    assert_eq!(
        binned.strategy,
        BinStrategy::Identity,
        "A zero-width range cannot support interval bins"
    );
    assert_eq!(binned.bins.len(), 1);
    assert_eq!(binned.bins[0], BinLabel::Value(5.0));
    assert!(binned.assignments.iter().all(|&i| i == 0));
}

#[test]
fn test_few_distinct_values_fall_back_to_equal_width() {
    // 3 distinct values cannot support 5 quantile bins
    let values: Vec<Option<f64>> = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 3.0]
        .iter()
        .map(|&v| Some(v))
        .collect();

    let binned = bin_values(&values, 5);

    assert_eq!(binned.strategy, BinStrategy::EqualWidth);
    assert_eq!(binned.bins.len(), 5);
    assert_eq!(binned.assignments.len(), 10);
}

#[test]
fn test_duplicate_heavy_quantiles_dedup_edges() {
    // 7 distinct values but mass piled on zero collapses interior quantiles
    let values: Vec<Option<f64>> = [
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0,
    ]
    .iter()
    .map(|&v| Some(v))
    .collect();

    let binned = bin_values(&values, 5);

    assert_eq!(binned.strategy, BinStrategy::Quantile);
    assert!(
        binned.bins.len() < 5,
        "Collapsed edges should yield fewer bins than requested, got {}",
        binned.bins.len()
    );
    assert!(binned.bins.len() >= 2, "Deduped edges still form intervals");
    assert_eq!(binned.assignments.len(), 14);
}

#[test]
fn test_empty_and_all_missing_inputs_yield_empty_binning() {
    assert!(bin_values(&[], 5).is_empty());

    let all_missing: Vec<Option<f64>> = vec![None; 8];
    assert!(bin_values(&all_missing, 5).is_empty());

    let all_nan: Vec<Option<f64>> = vec![Some(f64::NAN); 8];
    assert!(bin_values(&all_nan, 5).is_empty());
}

#[test]
fn test_non_finite_values_are_skipped() {
    let values = vec![
        Some(1.0),
        Some(f64::NAN),
        Some(f64::INFINITY),
        Some(2.0),
        None,
    ];

    let binned = bin_values(&values, 3);

    assert_eq!(
        binned.assignments.len(),
        2,
        "Only the two finite values are assigned"
    );
    assert!(!binned.is_empty());
}

#[test]
fn test_bins_are_ordered_ascending() {
    let values: Vec<Option<f64>> = [12.5, 3.0, 88.1, 7.7, 45.0, 19.2, 63.4, 2.1, 30.0, 55.5]
        .iter()
        .map(|&v| Some(v))
        .collect();

    let binned = bin_values(&values, 4);

    let lowers: Vec<f64> = binned.bins.iter().map(|b| b.lower_bound()).collect();
    for pair in lowers.windows(2) {
        assert!(
            pair[0] < pair[1],
            "Bin lower bounds must increase: {:?}",
            lowers
        );
    }
}

#[test]
fn test_every_assignment_points_at_a_bin() {
    let values: Vec<Option<f64>> = (0..50).map(|v| Some((v * 7 % 23) as f64)).collect();

    let binned = bin_values(&values, 6);

    assert!(binned.bins.len() <= 6, "Never more bins than requested");
    for &idx in &binned.assignments {
        assert!(idx < binned.bins.len(), "Assignment {} out of range", idx);
    }
    assert_eq!(binned.labels().count(), binned.assignments.len());
}

#[test]
fn test_single_bin_request() {
    let binned = bin_values(&range_1_to_10(), 1);

    assert_eq!(binned.bins.len(), 1);
    assert_eq!(binned.bins[0].to_string(), "[1, 10]");
    assert!(binned.assignments.iter().all(|&i| i == 0));
}

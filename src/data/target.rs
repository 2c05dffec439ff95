//! Target column analysis
//!
//! The target column must exist at startup (checked by `Dataset::new`),
//! but whether it is usable for event-rate analysis is advisory: pages
//! consult the `TargetSummary` on every render and show a warning instead
//! of failing when the target is not binary.

use polars::prelude::*;
use serde::Serialize;

/// Tolerance for floating point comparison when checking binary 0/1 values
const TOLERANCE: f64 = 1e-9;

/// Distinct-value ceiling under which a numeric target still supports
/// class-wise plots (boxplot by class, per-class means).
const BINARY_LIKE_MAX_DISTINCT: usize = 10;

/// What the dashboard knows about the target column.
#[derive(Debug, Clone, Serialize)]
pub struct TargetSummary {
    /// Rows equal to 1 within tolerance
    pub events: usize,
    /// Rows equal to 0 within tolerance
    pub non_events: usize,
    /// Non-null numeric rows that are neither 0 nor 1. Class plots skip
    /// these rows, so views disclose the count when it is nonzero.
    pub out_of_range: usize,
    pub nulls: usize,
    /// Distinct non-null values
    pub distinct: usize,
    /// Strictly 0/1 valued (event rates are meaningful)
    pub is_binary: bool,
    /// Numeric with low cardinality (class-wise plots are meaningful)
    pub is_binary_like: bool,
    /// events / (events + non_events), only for a strictly binary target
    pub event_rate: Option<f64>,
}

/// Analyze the target column. Never fails on a non-numeric target; the
/// summary simply reports it as unusable for binary analysis.
pub fn summarize_target(df: &DataFrame, target: &str) -> PolarsResult<TargetSummary> {
    let col = df.column(target)?;

    let unique_len = col.unique()?.len();
    let nulls = col.null_count();
    let distinct = if nulls > 0 {
        unique_len.saturating_sub(1)
    } else {
        unique_len
    };

    if !col.dtype().is_primitive_numeric() {
        return Ok(TargetSummary {
            events: 0,
            non_events: 0,
            out_of_range: 0,
            nulls,
            distinct,
            is_binary: false,
            is_binary_like: false,
            event_rate: None,
        });
    }

    let float_col = col.cast(&DataType::Float64)?;

    let mut events = 0usize;
    let mut non_events = 0usize;
    let mut out_of_range = 0usize;
    for v in float_col.f64()?.into_iter().flatten() {
        if (v - 1.0).abs() < TOLERANCE {
            events += 1;
        } else if v.abs() < TOLERANCE {
            non_events += 1;
        } else {
            out_of_range += 1;
        }
    }

    let unique_values: Vec<f64> = float_col.unique()?.f64()?.into_iter().flatten().collect();
    let is_binary = !unique_values.is_empty()
        && unique_values.len() <= 2
        && unique_values
            .iter()
            .all(|&v| v.abs() < TOLERANCE || (v - 1.0).abs() < TOLERANCE);

    let is_binary_like = distinct >= 1 && distinct <= BINARY_LIKE_MAX_DISTINCT;

    let classified = events + non_events;
    let event_rate = if is_binary && classified > 0 {
        Some(events as f64 / classified as f64)
    } else {
        None
    };

    Ok(TargetSummary {
        events,
        non_events,
        out_of_range,
        nulls,
        distinct,
        is_binary,
        is_binary_like,
        event_rate,
    })
}

/// Extract the target as a 0/1 mask.
///
/// Returns `Some(0)` / `Some(1)` for values within tolerance of 0 or 1 and
/// `None` for nulls and anything else, so downstream paired exclusion
/// drops unusable rows naturally.
pub fn extract_target(df: &DataFrame, target: &str) -> PolarsResult<Vec<Option<i32>>> {
    let col = df.column(target)?;
    let float_col = col.cast(&DataType::Float64)?;

    let mask: Vec<Option<i32>> = float_col
        .f64()?
        .into_iter()
        .map(|v| match v {
            Some(x) if (x - 1.0).abs() < TOLERANCE => Some(1),
            Some(x) if x.abs() < TOLERANCE => Some(0),
            _ => None,
        })
        .collect();

    Ok(mask)
}

/// Extract the target as f64 values, nulls preserved. Used where the
/// target participates as an ordinary numeric column.
pub fn target_values(df: &DataFrame, target: &str) -> PolarsResult<Vec<Option<f64>>> {
    let col = df.column(target)?;
    let float_col = col.cast(&DataType::Float64)?;
    Ok(float_col.f64()?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_int_target() {
        let df = df! {
            "default_ind" => [0i32, 1, 0, 1, 0],
        }
        .unwrap();

        let summary = summarize_target(&df, "default_ind").unwrap();
        assert!(summary.is_binary);
        assert!(summary.is_binary_like);
        assert_eq!(summary.events, 2);
        assert_eq!(summary.non_events, 3);
        assert_eq!(summary.out_of_range, 0);
        assert_eq!(summary.nulls, 0);
        assert_eq!(summary.distinct, 2);
        assert!((summary.event_rate.unwrap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_binary_float_target_within_tolerance() {
        let df = df! {
            "target" => [0.0f64, 1.0, 1e-12, 1.0 - 1e-12],
        }
        .unwrap();

        let summary = summarize_target(&df, "target").unwrap();
        assert!(summary.is_binary, "values within tolerance should count as 0/1");
        assert_eq!(summary.events, 2);
        assert_eq!(summary.non_events, 2);
    }

    #[test]
    fn test_multi_valued_numeric_target() {
        let df = df! {
            "target" => [1i32, 2, 3, 1, 2],
        }
        .unwrap();

        let summary = summarize_target(&df, "target").unwrap();
        assert!(!summary.is_binary);
        assert!(summary.is_binary_like, "3 distinct values is still low cardinality");
        assert_eq!(summary.event_rate, None);
        assert_eq!(summary.out_of_range, 3, "the 2s and the 3 are outside 0/1");
    }

    #[test]
    fn test_rows_outside_zero_one_are_counted() {
        let df = df! {
            "target" => [Some(0i32), Some(1), Some(2), Some(3), None],
        }
        .unwrap();

        let summary = summarize_target(&df, "target").unwrap();
        assert_eq!(summary.events, 1);
        assert_eq!(summary.non_events, 1);
        assert_eq!(summary.out_of_range, 2);
        assert_eq!(summary.nulls, 1);
    }

    #[test]
    fn test_high_cardinality_target_not_binary_like() {
        let values: Vec<i32> = (0..50).collect();
        let df = df! {
            "target" => values,
        }
        .unwrap();

        let summary = summarize_target(&df, "target").unwrap();
        assert!(!summary.is_binary);
        assert!(!summary.is_binary_like);
    }

    #[test]
    fn test_string_target_unusable() {
        let df = df! {
            "target" => ["good", "bad", "good"],
        }
        .unwrap();

        let summary = summarize_target(&df, "target").unwrap();
        assert!(!summary.is_binary);
        assert!(!summary.is_binary_like);
        assert_eq!(summary.events, 0);
        assert_eq!(summary.distinct, 2);
    }

    #[test]
    fn test_nulls_counted_separately() {
        let df = df! {
            "target" => [Some(0i32), Some(1), None, Some(1)],
        }
        .unwrap();

        let summary = summarize_target(&df, "target").unwrap();
        assert!(summary.is_binary, "nulls do not break binary-ness");
        assert_eq!(summary.nulls, 1);
        assert_eq!(summary.events, 2);
        assert_eq!(summary.non_events, 1);
    }

    #[test]
    fn test_extract_target_mask() {
        let df = df! {
            "target" => [Some(0.0f64), Some(1.0), None, Some(2.0), Some(1.0)],
        }
        .unwrap();

        let mask = extract_target(&df, "target").unwrap();
        assert_eq!(mask, vec![Some(0), Some(1), None, None, Some(1)]);
    }
}

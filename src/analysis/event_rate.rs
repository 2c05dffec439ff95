//! Event-rate aggregation of a numeric feature against the target
//!
//! Pairs a feature column with the target, drops rows where either side is
//! missing, bins the remaining feature values, and reports the mean target
//! value (the event rate) and row count per bin.

use serde::Serialize;

use super::binning::{bin_values, BinStrategy};

/// One row of an event-rate table
#[derive(Debug, Clone, Serialize)]
pub struct EventRateRow {
    /// Display label of the bin
    pub bin: String,
    /// Mean of the target within the bin; P(target = 1 | bin) for a 0/1 target
    pub event_rate: f64,
    /// Number of paired rows in the bin
    pub count: usize,
}

/// Event-rate table for one feature
#[derive(Debug, Clone, Serialize)]
pub struct EventRateTable {
    /// Strategy the binning engine settled on
    pub strategy: BinStrategy,
    /// Rows ordered ascending by bin lower bound
    pub rows: Vec<EventRateRow>,
    /// Rows that had both a finite feature value and a finite target value
    pub paired_rows: usize,
}

impl EventRateTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the event-rate table for a feature/target pair.
///
/// Rows where either the feature or the target is missing or non-finite are
/// excluded from both sequences before binning, so bins only ever aggregate
/// fully paired observations. An input with no usable pairs yields an empty
/// table rather than an error.
pub fn event_rate_table(
    feature: &[Option<f64>],
    target: &[Option<f64>],
    bin_count: usize,
) -> EventRateTable {
    // Paired exclusion keeps the two sequences aligned by construction
    let (kept_feature, kept_target): (Vec<Option<f64>>, Vec<f64>) = feature
        .iter()
        .zip(target.iter())
        .filter_map(|(f, t)| match (f, t) {
            (Some(f), Some(t)) if f.is_finite() && t.is_finite() => Some((Some(*f), *t)),
            _ => None,
        })
        .unzip();

    let binned = bin_values(&kept_feature, bin_count);
    if binned.is_empty() {
        return EventRateTable {
            strategy: binned.strategy,
            rows: Vec::new(),
            paired_rows: 0,
        };
    }

    let mut sums = vec![0.0f64; binned.bins.len()];
    let mut counts = vec![0usize; binned.bins.len()];
    for (&bin_idx, &t) in binned.assignments.iter().zip(kept_target.iter()) {
        sums[bin_idx] += t;
        counts[bin_idx] += 1;
    }

    // Bins arrive ordered ascending; empty buckets are dropped from the table
    let mut rows = Vec::with_capacity(binned.bins.len());
    for (i, bin) in binned.bins.iter().enumerate() {
        if counts[i] == 0 {
            continue;
        }
        rows.push(EventRateRow {
            bin: bin.to_string(),
            event_rate: sums[i] / counts[i] as f64,
            count: counts[i],
        });
    }

    EventRateTable {
        strategy: binned.strategy,
        rows,
        paired_rows: kept_target.len(),
    }
}

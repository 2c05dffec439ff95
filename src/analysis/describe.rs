//! Univariate summaries: describe statistics, histograms, and value counts

use polars::prelude::*;
use serde::Serialize;

use super::binning::quantile_sorted;

/// Summary statistics over the finite values of a numeric column
#[derive(Debug, Clone, Serialize)]
pub struct DescribeStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single value
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute describe statistics. Returns None when no finite values remain.
pub fn describe(values: &[Option<f64>]) -> Option<DescribeStats> {
    let mut finite: Vec<f64> = values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| v.is_finite())
        .collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = finite.len();
    let mean = finite.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let sum_sq_dev: f64 = finite.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq_dev / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    Some(DescribeStats {
        count,
        mean,
        std,
        min: finite[0],
        q25: quantile_sorted(&finite, 0.25),
        median: quantile_sorted(&finite, 0.5),
        q75: quantile_sorted(&finite, 0.75),
        max: finite[count - 1],
    })
}

/// One bar of an equal-width histogram
#[derive(Debug, Clone)]
pub struct HistogramBar {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram counts over finite values.
///
/// A degenerate range collapses to a single bar holding every value; an empty
/// input yields no bars.
pub fn histogram(values: &[Option<f64>], max_bars: usize) -> Vec<HistogramBar> {
    let finite: Vec<f64> = values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| v.is_finite())
        .collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(max > min) {
        return vec![HistogramBar {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let bars = max_bars.max(1);
    let width = (max - min) / bars as f64;
    let mut counts = vec![0usize; bars];
    for v in finite {
        let mut idx = ((v - min) / width) as usize;
        // The maximum value lands exactly on the upper edge
        if idx >= bars {
            idx = bars - 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBar {
            lower: min + width * i as f64,
            upper: if i + 1 == bars {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Category counts for a column, descending by count. Nulls are excluded.
pub fn value_counts(col: &Column) -> PolarsResult<Vec<(String, usize)>> {
    let string_col = col.cast(&DataType::String)?;
    let values = string_col.str()?;

    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for value in values.iter().flatten() {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(out)
}

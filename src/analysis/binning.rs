//! Adaptive binning for numeric feature values
//!
//! Buckets a numeric column into at most `bin_count` intervals using a fixed
//! fallback ladder: quantile (equal population) first, then equal width, then
//! one bin per distinct value. Every input produces a usable binning; the
//! function never fails.

use serde::Serialize;

/// The strategy that produced a binning, in fallback order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinStrategy {
    /// Equal-population bins from linear-interpolated quantiles
    Quantile,
    /// Equal-width bins across the observed range
    EqualWidth,
    /// One bin per distinct value
    Identity,
}

impl std::fmt::Display for BinStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinStrategy::Quantile => write!(f, "quantile"),
            BinStrategy::EqualWidth => write!(f, "equal-width"),
            BinStrategy::Identity => write!(f, "identity"),
        }
    }
}

/// Label for a single bucket
#[derive(Debug, Clone, PartialEq)]
pub enum BinLabel {
    /// Interval (lower, upper], closed at the lower edge for the first bin so
    /// the minimum value is always assigned
    Interval {
        lower: f64,
        upper: f64,
        lower_closed: bool,
    },
    /// A single distinct value (identity binning)
    Value(f64),
}

impl BinLabel {
    /// Sort key for ordering bins ascending
    pub fn lower_bound(&self) -> f64 {
        match self {
            BinLabel::Interval { lower, .. } => *lower,
            BinLabel::Value(v) => *v,
        }
    }
}

impl std::fmt::Display for BinLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinLabel::Interval {
                lower,
                upper,
                lower_closed,
            } => {
                let open = if *lower_closed { '[' } else { '(' };
                write!(f, "{}{}, {}]", open, format_bound(*lower), format_bound(*upper))
            }
            BinLabel::Value(v) => write!(f, "{}", format_bound(*v)),
        }
    }
}

/// Format a bin edge for display: whole numbers without a fraction, otherwise
/// three decimals
fn format_bound(x: f64) -> String {
    if x == x.trunc() && x.abs() < 1e12 {
        format!("{}", x as i64)
    } else {
        format!("{:.3}", x)
    }
}

/// A complete binning of a numeric column
#[derive(Debug, Clone)]
pub struct Binned {
    /// Strategy that produced the bins
    pub strategy: BinStrategy,
    /// Ordered bucket labels, ascending
    pub bins: Vec<BinLabel>,
    /// Index into `bins` for every finite input value, in input order
    pub assignments: Vec<usize>,
    /// Ascending deduplicated edges. Interval strategies carry bins.len() + 1
    /// entries; identity carries the distinct values themselves.
    pub edges: Vec<f64>,
}

impl Binned {
    fn empty() -> Self {
        Binned {
            strategy: BinStrategy::Identity,
            bins: Vec::new(),
            assignments: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Label for each finite input value, in input order
    pub fn labels(&self) -> impl Iterator<Item = &BinLabel> + '_ {
        self.assignments.iter().map(|&i| &self.bins[i])
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Bucket `values` into at most `bin_count` bins.
///
/// Null and non-finite entries are skipped; `assignments` covers the remaining
/// values in input order. An empty or all-missing input yields an empty
/// binning rather than an error.
///
/// Strategies are attempted in a fixed order and the first that yields valid
/// edges wins:
/// 1. Quantile, only when the distinct value count exceeds `bin_count`
/// 2. Equal width, which fails only on a degenerate (zero-width) range
/// 3. Identity, which always succeeds
pub fn bin_values(values: &[Option<f64>], bin_count: usize) -> Binned {
    let bin_count = bin_count.max(1);

    let finite: Vec<f64> = values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| v.is_finite())
        .collect();
    if finite.is_empty() {
        return Binned::empty();
    }

    let mut sorted = finite.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut distinct = sorted.clone();
    distinct.dedup();

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if let Some(edges) = quantile_edges(&sorted, distinct.len(), bin_count) {
        return assemble_intervals(BinStrategy::Quantile, &finite, edges);
    }
    if let Some(edges) = equal_width_edges(min, max, bin_count) {
        return assemble_intervals(BinStrategy::EqualWidth, &finite, edges);
    }
    assemble_identity(&finite, distinct)
}

/// Quantile edges for equal-population bins.
///
/// Returns None when the input has too few distinct values for quantile
/// binning, or when duplicate-heavy data collapses the edges to fewer than
/// two after deduplication.
fn quantile_edges(sorted: &[f64], distinct_count: usize, bin_count: usize) -> Option<Vec<f64>> {
    if distinct_count <= bin_count {
        return None;
    }

    let mut edges: Vec<f64> = (0..=bin_count)
        .map(|i| quantile_sorted(sorted, i as f64 / bin_count as f64))
        .collect();
    edges.dedup();

    if edges.len() < 2 {
        return None;
    }
    Some(edges)
}

/// Equal-width edges across [min, max]. Returns None when the range is
/// degenerate (all values identical).
fn equal_width_edges(min: f64, max: f64, bin_count: usize) -> Option<Vec<f64>> {
    if !(max > min) {
        return None;
    }

    let width = (max - min) / bin_count as f64;
    let mut edges: Vec<f64> = (0..=bin_count).map(|i| min + width * i as f64).collect();
    // Pin the last edge so float drift never excludes the maximum
    edges[bin_count] = max;
    edges.dedup();

    if edges.len() < 2 {
        return None;
    }
    Some(edges)
}

fn assemble_intervals(strategy: BinStrategy, finite: &[f64], edges: Vec<f64>) -> Binned {
    let bins: Vec<BinLabel> = edges
        .windows(2)
        .enumerate()
        .map(|(i, w)| BinLabel::Interval {
            lower: w[0],
            upper: w[1],
            lower_closed: i == 0,
        })
        .collect();

    let assignments: Vec<usize> = finite.iter().map(|&v| interval_index(&edges, v)).collect();

    Binned {
        strategy,
        bins,
        assignments,
        edges,
    }
}

fn assemble_identity(finite: &[f64], distinct: Vec<f64>) -> Binned {
    let bins: Vec<BinLabel> = distinct.iter().map(|&v| BinLabel::Value(v)).collect();
    let assignments: Vec<usize> = finite
        .iter()
        .map(|&v| distinct.partition_point(|d| *d < v))
        .collect();

    Binned {
        strategy: BinStrategy::Identity,
        bins,
        assignments,
        edges: distinct,
    }
}

/// Index of the interval containing `v`. Intervals are right-closed; the
/// first also contains its lower edge.
fn interval_index(edges: &[f64], v: f64) -> usize {
    let last = edges.len() - 2;
    for i in 0..=last {
        if v <= edges[i + 1] {
            return i;
        }
    }
    last
}

/// Linear-interpolated quantile of pre-sorted values
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

//! Pearson correlation matrix over the numeric columns of a dataset
//!
//! Two computation paths produce the same matrix: a pairwise single-pass
//! method that parallelizes over column pairs, and a matrix method that
//! standardizes the data and computes Z^T * Z with faer. The pairwise
//! method wins for narrow frames, the matrix method for wide ones, so
//! `correlation_matrix` picks automatically based on column count.

use anyhow::Result;
use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

/// Column count at which the matrix method overtakes pairwise computation.
const MATRIX_METHOD_COLUMN_THRESHOLD: usize = 15;

/// Symmetric Pearson correlation matrix with its column ordering.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    /// Column names in matrix order
    pub columns: Vec<String>,
    /// `values[i][j]` is the correlation between `columns[i]` and `columns[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// A matrix needs at least two columns to say anything.
    pub fn is_empty(&self) -> bool {
        self.columns.len() < 2
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// A pair of columns and their correlation coefficient.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelatedPair {
    pub feature1: String,
    pub feature2: String,
    pub correlation: f64,
}

/// Compute the correlation matrix over every usable numeric column.
///
/// Columns that are non-numeric, constant, or have fewer than two finite
/// values are excluded up front so both computation paths agree on the
/// column set. Returns an empty matrix when fewer than two columns remain.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let float_columns = numeric_float_columns(df)?;

    if float_columns.len() < 2 {
        return Ok(CorrelationMatrix {
            columns: float_columns.into_iter().map(|(name, _)| name).collect(),
            values: Vec::new(),
        });
    }

    if float_columns.len() >= MATRIX_METHOD_COLUMN_THRESHOLD {
        if let Some(matrix) = correlation_matrix_fast(&float_columns) {
            return Ok(matrix);
        }
    }

    Ok(correlation_matrix_pairwise(&float_columns))
}

/// Collect the numeric columns of the frame as f64, keeping only those
/// with at least two finite values and nonzero variance.
pub fn numeric_float_columns(df: &DataFrame) -> Result<Vec<(String, Column)>> {
    let mut float_columns = Vec::new();
    for col in df.get_columns() {
        if !col.dtype().is_primitive_numeric() {
            continue;
        }
        let float_col = col.cast(&DataType::Float64)?;
        if column_has_variance(&float_col) {
            float_columns.push((col.name().to_string(), float_col));
        }
    }
    Ok(float_columns)
}

/// True when the column holds at least two finite values that are not all equal.
fn column_has_variance(col: &Column) -> bool {
    let Ok(ca) = col.f64() else {
        return false;
    };

    let mut n = 0usize;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for v in ca.iter().flatten() {
        if !v.is_finite() {
            continue;
        }
        n += 1;
        let delta = v - mean;
        mean += delta / n as f64;
        m2 += delta * (v - mean);
    }

    n >= 2 && m2 > 0.0
}

/// Pearson correlation between two equal-length columns, single pass.
///
/// Rows where either side is null or non-finite are skipped, so the
/// coefficient is computed over pairwise-complete observations. Returns
/// None when fewer than two complete pairs remain or either side is
/// constant over them.
fn compute_pearson_correlation(s1: &Column, s2: &Column) -> Option<f64> {
    let ca1 = s1.f64().ok()?;
    let ca2 = s2.f64().ok()?;
    if ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0.0f64;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 {
        return None;
    }

    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (n * std_x * std_y))
}

/// Pairwise path: compute each upper-triangle cell independently in parallel.
pub fn correlation_matrix_pairwise(float_columns: &[(String, Column)]) -> CorrelationMatrix {
    let n = float_columns.len();
    let columns: Vec<String> = float_columns.iter().map(|(name, _)| name.clone()).collect();

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let computed: Vec<((usize, usize), f64)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let corr = compute_pearson_correlation(&float_columns[i].1, &float_columns[j].1)
                .unwrap_or(f64::NAN);
            ((i, j), corr)
        })
        .collect();

    let mut values = vec![vec![f64::NAN; n]; n];
    for (i, row) in values.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    for ((i, j), corr) in computed {
        values[i][j] = corr;
        values[j][i] = corr;
    }

    CorrelationMatrix { columns, values }
}

/// Matrix path: standardize each column to zero mean and unit scaled
/// variance, then every cell of Z^T * Z is a correlation coefficient.
///
/// Nulls and non-finite values contribute zero after standardization,
/// which matches dropping them when columns have no missing values and
/// is a close approximation otherwise. Returns None if any column turns
/// out constant, letting the caller fall back to the pairwise path.
pub fn correlation_matrix_fast(float_columns: &[(String, Column)]) -> Option<CorrelationMatrix> {
    let n_cols = float_columns.len();
    if n_cols < 2 {
        return None;
    }
    let n_rows = float_columns[0].1.len();
    if n_rows == 0 {
        return None;
    }

    let standardized_cols: Vec<Option<Vec<f64>>> = float_columns
        .par_iter()
        .map(|(_, col)| {
            let ca = col.f64().ok()?;

            let mut sum = 0.0;
            let mut n_valid = 0.0f64;
            for v in ca.iter().flatten() {
                if v.is_finite() {
                    sum += v;
                    n_valid += 1.0;
                }
            }
            if n_valid < 2.0 {
                return None;
            }
            let mean = sum / n_valid;

            let mut sum_sq_dev = 0.0;
            for v in ca.iter().flatten() {
                if v.is_finite() {
                    let dev = v - mean;
                    sum_sq_dev += dev * dev;
                }
            }
            let std = (sum_sq_dev / n_valid).sqrt();
            if std == 0.0 {
                return None;
            }

            let scale = 1.0 / (std * n_valid.sqrt());
            let standardized: Vec<f64> = ca
                .iter()
                .map(|v| match v {
                    Some(x) if x.is_finite() => (x - mean) * scale,
                    _ => 0.0,
                })
                .collect();
            Some(standardized)
        })
        .collect();

    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    for (col_idx, col_data) in standardized_cols.iter().enumerate() {
        let col_data = col_data.as_ref()?;
        for (row_idx, &val) in col_data.iter().enumerate() {
            z[(row_idx, col_idx)] = val;
        }
    }

    let corr = z.transpose() * &z;

    let columns: Vec<String> = float_columns.iter().map(|(name, _)| name.clone()).collect();
    let mut values = vec![vec![f64::NAN; n_cols]; n_cols];
    for (i, row) in values.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            // The diagonal is 1.0 by construction; pin it to avoid float drift
            *cell = if i == j { 1.0 } else { corr[(i, j)] };
        }
    }

    Some(CorrelationMatrix { columns, values })
}

/// Upper-triangle pairs ordered by absolute correlation, strongest first.
pub fn strongest_pairs(matrix: &CorrelationMatrix, limit: usize) -> Vec<CorrelatedPair> {
    let n = matrix.columns.len();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let corr = matrix.values[i][j];
            if corr.is_nan() {
                continue;
            }
            pairs.push(CorrelatedPair {
                feature1: matrix.columns[i].clone(),
                feature2: matrix.columns[j].clone(),
                correlation: corr,
            });
        }
    }

    pairs.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pairs.truncate(limit);
    pairs
}

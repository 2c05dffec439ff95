//! Column classification and per-column overview

use polars::prelude::*;
use serde::Serialize;

/// Broad classification used by the page selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
        }
    }
}

/// One row of the dataset structure table.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
    pub missing_ratio: f64,
    pub distinct: usize,
}

/// Numeric when polars reports a primitive numeric dtype, categorical
/// otherwise. Strings, booleans, and temporals all land in the
/// categorical bucket for display purposes.
pub fn classify_column(dtype: &DataType) -> ColumnKind {
    if dtype.is_primitive_numeric() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Summarize every column of the frame, in frame order.
pub fn summarize_columns(df: &DataFrame) -> PolarsResult<Vec<ColumnSummary>> {
    let height = df.height();
    let mut summaries = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let missing_ratio = if height == 0 {
            0.0
        } else {
            col.null_count() as f64 / height as f64
        };

        // unique() keeps null as one entry; report non-null distinct values
        let unique_len = col.unique()?.len();
        let distinct = if col.null_count() > 0 {
            unique_len.saturating_sub(1)
        } else {
            unique_len
        };

        summaries.push(ColumnSummary {
            name: col.name().to_string(),
            dtype: col.dtype().to_string(),
            kind: classify_column(col.dtype()),
            missing_ratio,
            distinct,
        });
    }

    Ok(summaries)
}

/// Materialize a column as f64 values with nulls preserved, the shape the
/// binning and statistics functions consume.
pub fn numeric_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let col = df.column(name)?;
    let float_col = col.cast(&DataType::Float64)?;
    Ok(float_col.f64()?.into_iter().collect())
}

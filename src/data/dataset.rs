//! Loaded dataset context
//!
//! A `Dataset` is built once at startup and then only read: the dashboard
//! and the report mode both borrow it. There is no shared mutable state
//! anywhere downstream of this struct.

use std::path::{Path, PathBuf};

use anyhow::Result;
use polars::prelude::*;

use super::error::DataError;
use super::loader;
use super::schema::{self, ColumnKind, ColumnSummary};
use super::target::{self, TargetSummary};

#[derive(Debug)]
pub struct Dataset {
    pub df: DataFrame,
    pub source: PathBuf,
    pub target: String,
    pub columns: Vec<ColumnSummary>,
    pub target_summary: TargetSummary,
    pub memory_mb: f64,
}

impl Dataset {
    /// Build the dataset context from an already-loaded frame.
    ///
    /// The target column must exist; that is the one fatal startup
    /// invariant. Everything else about the target (binary or not) is
    /// advisory and handled per page.
    pub fn new(df: DataFrame, source: PathBuf, target: &str) -> Result<Self> {
        let column_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        if !column_names.iter().any(|name| name == target) {
            return Err(DataError::TargetNotFound {
                target: target.to_string(),
                available: column_names,
            }
            .into());
        }

        let columns = schema::summarize_columns(&df)?;
        let target_summary = target::summarize_target(&df, target)?;
        let memory_mb = loader::estimated_memory_mb(&df);

        Ok(Self {
            df,
            source,
            target: target.to_string(),
            columns,
            target_summary,
            memory_mb,
        })
    }

    /// Load from disk and build the context in one step.
    pub fn load(path: &Path, target: &str, infer_schema_length: usize) -> Result<Self> {
        let df = loader::load_dataset(path, infer_schema_length)?;
        Self::new(df, path.to_path_buf(), target)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.df.shape()
    }

    /// All column names, in frame order. Univariate selector.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Every column except the target. Bivariate selector.
    pub fn feature_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.name.clone())
            .filter(|name| name != &self.target)
            .collect()
    }

    /// Numeric columns except the target. Profiling selector.
    pub fn numeric_feature_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric && c.name != self.target)
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn column_summary(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df! {
            "age" => [25.0f64, 30.0, 45.0, 52.0],
            "grade" => ["A", "B", "A", "C"],
            "default_ind" => [0i32, 1, 0, 1],
        }
        .unwrap()
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let result = Dataset::new(sample_frame(), PathBuf::from("test.csv"), "nonexistent");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("'nonexistent' not found"), "got: {}", msg);
        assert!(msg.contains("default_ind"), "message should list available columns");
    }

    #[test]
    fn test_context_built_from_valid_frame() {
        let ds = Dataset::new(sample_frame(), PathBuf::from("test.csv"), "default_ind").unwrap();
        assert_eq!(ds.shape(), (4, 3));
        assert_eq!(ds.columns.len(), 3);
        assert!(ds.target_summary.is_binary);
        assert_eq!(ds.column_names(), vec!["age", "grade", "default_ind"]);
        assert_eq!(ds.feature_names(), vec!["age", "grade"]);
        assert_eq!(ds.numeric_feature_names(), vec!["age"]);
    }

    #[test]
    fn test_column_summary_lookup() {
        let ds = Dataset::new(sample_frame(), PathBuf::from("test.csv"), "default_ind").unwrap();
        assert!(ds.column_summary("age").is_some());
        assert!(ds.column_summary("missing").is_none());
    }
}

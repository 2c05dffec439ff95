//! Analysis snapshot export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::analysis::{
    correlation_matrix, describe, event_rate_table, value_counts, CorrelationMatrix,
    DescribeStats, EventRateTable,
};
use crate::data::{numeric_values, target_values, ColumnKind, ColumnSummary, Dataset, TargetSummary};
use crate::utils::create_progress_bar;

/// Categorical snapshots keep only the most frequent values
const MAX_EXPORTED_CATEGORIES: usize = 20;

/// Metadata about the snapshot run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the snapshot (ISO 8601 format)
    pub timestamp: String,
    /// Binsight version
    pub binsight_version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
    /// Row count
    pub rows: usize,
    /// Column count
    pub columns: usize,
    /// Bin count used for event-rate tables
    pub bins: usize,
}

/// One feature's analysis snapshot
#[derive(Serialize)]
pub struct FeatureSnapshot {
    /// Feature name
    pub name: String,
    /// Numeric or categorical
    pub kind: String,
    /// Summary statistics (numeric features only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describe: Option<DescribeStats>,
    /// Binned event rates against the target (numeric features with a
    /// usable target only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_rate: Option<EventRateTable>,
    /// Most frequent values (categorical features only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_counts: Option<Vec<(String, usize)>>,
}

/// Complete analysis snapshot
#[derive(Serialize)]
pub struct SnapshotExport {
    /// Metadata about the snapshot run
    pub metadata: ExportMetadata,
    /// Target column summary
    pub target: TargetSummary,
    /// Per-column structure overview
    pub columns: Vec<ColumnSummary>,
    /// Per-feature analysis results
    pub features: Vec<FeatureSnapshot>,
    /// Correlation matrix over the numeric columns, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
}

/// Export the full analysis snapshot to a JSON file.
///
/// Walks every feature column: numeric features get describe statistics and,
/// when the target is usable, a binned event-rate table; categorical features
/// get their most frequent values.
pub fn export_snapshot(
    dataset: &Dataset,
    bins: usize,
    include_correlation: bool,
    output_path: &Path,
) -> Result<()> {
    let (rows, cols) = dataset.shape();
    let feature_names = dataset.feature_names();

    let target = if dataset.target_summary.is_binary_like {
        Some(target_values(&dataset.df, &dataset.target)?)
    } else {
        None
    };

    let progress = create_progress_bar(feature_names.len() as u64, "Snapshotting features");
    let mut features = Vec::with_capacity(feature_names.len());
    for name in &feature_names {
        features.push(snapshot_feature(dataset, name, target.as_deref(), bins)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let correlation = if include_correlation {
        Some(correlation_matrix(&dataset.df)?)
    } else {
        None
    };

    let export = SnapshotExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            binsight_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: dataset.source.display().to_string(),
            target_column: dataset.target.clone(),
            rows,
            columns: cols,
            bins,
        },
        target: dataset.target_summary.clone(),
        columns: dataset.columns.clone(),
        features,
        correlation,
    };

    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize snapshot to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write snapshot to {}", output_path.display()))?;

    Ok(())
}

fn snapshot_feature(
    dataset: &Dataset,
    name: &str,
    target: Option<&[Option<f64>]>,
    bins: usize,
) -> Result<FeatureSnapshot> {
    let kind = dataset
        .column_summary(name)
        .map(|c| c.kind)
        .unwrap_or(ColumnKind::Categorical);

    match kind {
        ColumnKind::Numeric => {
            let values = numeric_values(&dataset.df, name)?;
            let event_rate = target.map(|t| event_rate_table(&values, t, bins));
            Ok(FeatureSnapshot {
                name: name.to_string(),
                kind: kind.as_str().to_string(),
                describe: describe(&values),
                event_rate,
                value_counts: None,
            })
        }
        ColumnKind::Categorical => {
            let mut counts = value_counts(dataset.df.column(name)?)?;
            counts.truncate(MAX_EXPORTED_CATEGORIES);
            Ok(FeatureSnapshot {
                name: name.to_string(),
                kind: kind.as_str().to_string(),
                describe: None,
                event_rate: None,
                value_counts: Some(counts),
            })
        }
    }
}

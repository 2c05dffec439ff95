//! clap argument surface for the binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::dashboard::{MAX_BINS, MIN_BINS};

/// Binsight - Explore a dataset against a binary outcome column
#[derive(Parser, Debug)]
#[command(name = "binsight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long, default_value = "data.csv")]
    pub input: PathBuf,

    /// Target column name. Event-rate and profiling views need it to hold
    /// 0/1 outcomes; the other pages work with any column.
    #[arg(short, long, default_value = "default_ind")]
    pub target: String,

    /// Initial number of bins for event-rate charts.
    /// Adjustable inside the dashboard with the arrow keys.
    #[arg(short, long, default_value = "5", value_parser = validate_bins)]
    pub bins: usize,

    /// How many rows the CSV reader samples when inferring column types.
    /// Raise it when late rows flip a column's dtype; 0 scans the whole file.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary report to stdout instead of opening the dashboard
    Report {
        /// Feature to report on in detail (describe, value counts, event rate)
        #[arg(short, long)]
        feature: Option<String>,

        /// Include the strongest correlated feature pairs
        #[arg(long, default_value = "false")]
        correlation: bool,

        /// Write the report as JSON to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

/// Validator for the bins parameter
fn validate_bins(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;

    if !(MIN_BINS..=MAX_BINS).contains(&value) {
        Err(format!(
            "bins must be between {} and {}, got {}",
            MIN_BINS, MAX_BINS, value
        ))
    } else {
        Ok(value)
    }
}

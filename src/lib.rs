//! Binsight: Terminal Data Exploration Library
//!
//! Loads a dataset with a binary outcome column and powers the dashboard
//! pages: column overviews, univariate summaries, adaptive binning with
//! event rates, correlation matrices, and per-class profiles.

pub mod analysis;
pub mod cli;
pub mod dashboard;
pub mod data;
pub mod report;
pub mod utils;

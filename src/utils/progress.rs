//! Progress indicators using indicatif
//!
//! Used around dataset loading and report export. Nothing here runs while
//! the dashboard owns the terminal.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for indeterminate work such as loading a file
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("    {spinner:.cyan.bold} {msg}")
            .unwrap()
            .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Create a progress bar for a known number of steps, such as exporting
/// per-feature tables
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("    {msg} {bar:32.cyan/dim} {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("━╸─"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Finish a progress bar with a success message
pub fn finish_with_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!(
        "{} {}",
        style("✓").green().bold(),
        style(message).green()
    ));
}

/// Finish a progress bar with a warning message
pub fn finish_with_warning(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!(
        "{} {}",
        style("⚠").yellow().bold(),
        style(message).yellow()
    ));
}

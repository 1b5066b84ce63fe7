//! Progress reporting for long-running batch runs
//!
//! Standardized progress bars for batch featurization, using the
//! indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a batch progress bar
pub const DEFAULT_BATCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a batch progress bar with the standardized style
///
/// # Arguments
/// * `length` - Total number of records
/// * `description` - Optional message to display
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_batch_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(DEFAULT_BATCH_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Create a hidden progress bar for runs that should stay quiet
#[must_use]
pub fn create_hidden_progress_bar() -> ProgressBar {
    ProgressBar::hidden()
}

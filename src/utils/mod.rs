//! Shared utilities for the feature pipeline

pub mod fixtures;
pub mod progress;

pub use progress::{create_batch_progress_bar, create_hidden_progress_bar};

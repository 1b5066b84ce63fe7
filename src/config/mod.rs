//! Configuration for the feature pipeline.

use crate::reference::ReferenceValues;

/// Configuration for a [`crate::pipeline::Pipeline`]
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Reference table (atomic weights, detection limits, risk cut points)
    pub reference: ReferenceValues,
    /// Minimum batch size before featurization runs in parallel
    pub parallel_threshold: usize,
    /// Show a progress bar for parallel batch runs
    pub show_progress: bool,
    /// Log every sentinel correction at debug level
    pub log_corrections: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceValues::default(),
            parallel_threshold: 256,
            show_progress: false,
            log_corrections: true,
        }
    }
}

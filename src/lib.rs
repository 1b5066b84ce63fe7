//! A Rust library for normalizing clinical input into model-ready feature
//! frames, with unit conversion, domain-rule correction, and model-specific
//! column selection.

pub mod config;
pub mod error;
pub mod extract;
pub mod frame;
pub mod impute;
pub mod models;
pub mod pipeline;
pub mod reference;
pub mod risk;
pub mod rules;
pub mod selectors;
pub mod sensitivity;
pub mod service;
pub mod units;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::PipelineConfig;
pub use error::{FeatureError, Result};
pub use frame::{ColumnKind, ColumnSpec, FeatureFrame};
pub use pipeline::Pipeline;
pub use selectors::ModelKey;

// Input and record types
pub use models::{FeatureRecord, FieldCode, RawClinicalInput};

// Reference values and risk derivation
pub use reference::{Analyte, ReferenceValues};
pub use risk::{MetalRiskProfile, RiskTier};

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Prediction service
pub use service::{ModelBackend, PredictionOutcome, PredictionService};

// Sensitivity sweeps
pub use sensitivity::{SweepResult, linear_grid, sweep};

//! Domain models for the feature pipeline
//!
//! This module contains the input contract, the canonical feature record,
//! and the coercion types shared across the pipeline stages.

pub mod codes;
pub mod raw;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use codes::FieldCode;
pub use raw::{BloodMetalReading, RawClinicalInput};
pub use record::FeatureRecord;
pub use types::{Gender, MaritalStatus, YesNo};

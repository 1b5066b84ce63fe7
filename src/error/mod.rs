//! Error types for the feature pipeline.
//!
//! One error enum covers the whole crate; callers match on the kind to
//! distinguish client-facing configuration mistakes (unknown model key)
//! from validation failures in the input record.

use arrow::error::ArrowError;

/// Errors that can occur while building feature frames
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// The requested model key is not registered
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// A demographic field required for rule correction is absent
    #[error("Missing required demographic field: {0}")]
    MissingDemographic(&'static str),

    /// Input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Arrow error while assembling a record batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Malformed JSON at the input boundary
    #[error("Input parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A model backend failed to produce a prediction
    #[error("Backend error for model '{model}': {message}")]
    Backend {
        /// Model key whose backend failed
        model: String,
        /// Backend-supplied failure description
        message: String,
    },
}

impl FeatureError {
    /// Build a validation error from anything printable
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a backend error for the given model key
    pub fn backend(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            model: model.into(),
            message: message.into(),
        }
    }

    /// True for errors the caller can fix by changing the request
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownModel(_) | Self::MissingDemographic(_) | Self::Validation(_) | Self::Parse(_)
        )
    }
}

/// Alias for Result with `FeatureError`
pub type Result<T> = std::result::Result<T, FeatureError>;

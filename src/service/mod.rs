//! Async prediction service boundary
//!
//! The service owns a pipeline and a registry of model backends. A
//! backend receives the model's ordered feature vector and returns a
//! scalar; the service never interprets the score. Featurization is
//! CPU-bound, so the async entry points move it onto the blocking pool
//! with `spawn_blocking`. The hormone panel scores its three submodels
//! concurrently from one payload.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use log::info;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{FeatureError, Result};
use crate::models::raw::RawClinicalInput;
use crate::pipeline::Pipeline;
use crate::selectors::{self, ModelKey};

/// A scoring backend for one model
///
/// Implementations receive cells in the model's fixed column order, with
/// nulls as `None`. What a backend does with them (linear model, remote
/// call, table lookup) is outside this crate's concern.
pub trait ModelBackend: Send + Sync {
    /// The model this backend scores
    fn model(&self) -> ModelKey;

    /// Backend label for logs and diagnostics
    fn name(&self) -> &str;

    /// Score one ordered feature vector
    fn predict(&self, features: &[Option<f64>]) -> Result<f64>;
}

/// Backend adapter around a scoring closure, for tests and demos
pub struct FnBackend<F> {
    model: ModelKey,
    name: String,
    score: F,
}

impl<F> FnBackend<F>
where
    F: Fn(&[Option<f64>]) -> Result<f64> + Send + Sync,
{
    /// Wrap a closure as a backend for the given model
    pub fn new(model: ModelKey, name: impl Into<String>, score: F) -> Self {
        Self {
            model,
            name: name.into(),
            score,
        }
    }
}

impl<F> ModelBackend for FnBackend<F>
where
    F: Fn(&[Option<f64>]) -> Result<f64> + Send + Sync,
{
    fn model(&self) -> ModelKey {
        self.model
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &[Option<f64>]) -> Result<f64> {
        (self.score)(features)
    }
}

/// Columnar echo of the features a prediction consumed
#[derive(Debug, Clone, Serialize)]
pub struct FeatureEcho {
    /// Wire column names in model order
    pub columns: Vec<String>,
    /// Cell values in the same order
    pub values: Vec<Option<f64>>,
}

/// One completed prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    /// Service key of the model that scored
    pub model: String,
    /// The backend's scalar output
    pub value: f64,
    /// The featurized row, when echoing is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureEcho>,
    /// When the prediction completed
    pub predicted_at: DateTime<Utc>,
}

/// Prediction service: a pipeline plus registered backends
pub struct PredictionService {
    pipeline: Arc<Pipeline>,
    backends: FxHashMap<ModelKey, Arc<dyn ModelBackend>>,
    echo_features: bool,
}

impl PredictionService {
    /// Create a service over the given pipeline, with no backends yet
    #[must_use]
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            backends: FxHashMap::default(),
            echo_features: false,
        }
    }

    /// Enable or disable echoing the featurized row in outcomes
    #[must_use]
    pub fn with_feature_echo(mut self, echo: bool) -> Self {
        self.echo_features = echo;
        self
    }

    /// Register a backend under its model key
    pub fn register(&mut self, backend: Arc<dyn ModelBackend>) {
        let model = backend.model();
        info!("Registered backend '{}' for model {model}", backend.name());
        if self.backends.insert(model, backend).is_some() {
            log::warn!("Replaced an existing backend for model {model}");
        }
    }

    /// Registered models, sorted by service key
    #[must_use]
    pub fn models(&self) -> Vec<ModelKey> {
        let mut models: Vec<ModelKey> = self.backends.keys().copied().collect();
        models.sort_by_key(|model| model.as_str());
        models
    }

    /// Featurize and score one input synchronously
    pub fn predict(&self, input: &RawClinicalInput, model: ModelKey) -> Result<PredictionOutcome> {
        let backend = self.backend(model)?;
        score_with(&self.pipeline, backend.as_ref(), input, model, self.echo_features)
    }

    /// Featurize and score a JSON payload synchronously
    pub fn predict_json(&self, payload: &str, model: ModelKey) -> Result<PredictionOutcome> {
        let input = RawClinicalInput::from_json_str(payload)?;
        self.predict(&input, model)
    }

    /// Featurize and score one input off the async runtime
    ///
    /// The input is moved onto the blocking pool, keeping the runtime
    /// free while featurization and scoring run.
    pub async fn predict_async(
        &self,
        input: RawClinicalInput,
        model: ModelKey,
    ) -> Result<PredictionOutcome> {
        let pipeline = Arc::clone(&self.pipeline);
        let backend = Arc::clone(self.backend(model)?);
        let echo = self.echo_features;

        tokio::task::spawn_blocking(move || {
            score_with(&pipeline, backend.as_ref(), &input, model, echo)
        })
        .await
        .map_err(|e| {
            FeatureError::backend(model.as_str(), format!("prediction task failed: {e}"))
        })?
    }

    /// Score the three hormone submodels concurrently from one payload
    ///
    /// Outcomes come back in the group's reporting order. The first
    /// failing submodel fails the panel.
    pub async fn predict_hormone_panel(
        &self,
        input: &RawClinicalInput,
    ) -> Result<Vec<PredictionOutcome>> {
        let results = stream::iter(ModelKey::HORMONE_GROUP)
            .map(|model| {
                let input = input.clone();
                async move { self.predict_async(input, model).await }
            })
            .buffered(num_cpus::get())
            .collect::<Vec<_>>()
            .await;

        results
            .into_iter()
            .map(|result| match result {
                Ok(outcome) => Ok(outcome),
                Err(e) => {
                    log::error!("Hormone panel prediction failed: {e}");
                    Err(e)
                }
            })
            .collect()
    }

    fn backend(&self, model: ModelKey) -> Result<&Arc<dyn ModelBackend>> {
        self.backends
            .get(&model)
            .ok_or_else(|| FeatureError::backend(model.as_str(), "no backend registered"))
    }
}

fn score_with(
    pipeline: &Pipeline,
    backend: &dyn ModelBackend,
    input: &RawClinicalInput,
    model: ModelKey,
    echo_features: bool,
) -> Result<PredictionOutcome> {
    let cells = pipeline.model_row(model, input)?;
    let value = backend.predict(&cells)?;
    log::debug!("Scored {model} = {value:.4} with backend '{}'", backend.name());

    let features = if echo_features {
        Some(FeatureEcho {
            columns: selectors::column_order(model)
                .iter()
                .map(|spec| spec.name.to_string())
                .collect(),
            values: cells.to_vec(),
        })
    } else {
        None
    };

    Ok(PredictionOutcome {
        model: model.as_str().to_string(),
        value,
        features,
        predicted_at: Utc::now(),
    })
}

//! End-to-end feature pipeline
//!
//! This module wires the stages together: raw input is normalized into a
//! canonical record, domain rules correct it, and the model selector
//! projects it onto the model's fixed column order. Single payloads go
//! through [`Pipeline::featurize`]; cohorts go through
//! [`Pipeline::featurize_batch`], which switches to parallel row assembly
//! above the configured threshold.

mod batch;

use std::time::Instant;

use log::info;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extract::extract_features;
use crate::frame::{FeatureFrame, RowCells};
use crate::models::raw::RawClinicalInput;
use crate::models::record::FeatureRecord;
use crate::rules::apply_domain_rules;
use crate::selectors::{self, ModelKey};

/// Feature pipeline over one configuration
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract and rule-correct one input into the canonical record
    ///
    /// # Errors
    /// Returns an error when gender or age is missing, since the domain
    /// rules cannot branch without them.
    pub fn corrected_record(&self, input: &RawClinicalInput) -> Result<FeatureRecord> {
        let mut record = extract_features(input, &self.config.reference);
        let outcome = apply_domain_rules(&mut record)?;
        if self.config.log_corrections {
            log::debug!(
                "Domain rules took branch {:?} ({} sentinel fills)",
                outcome.branch,
                outcome.sentinel_fills
            );
        }
        Ok(record)
    }

    /// Featurize one input for one model as a single-row frame
    pub fn featurize(&self, input: &RawClinicalInput, model: ModelKey) -> Result<FeatureFrame> {
        let record = self.corrected_record(input)?;
        selectors::project(model, &record, &self.config.reference)
    }

    /// Featurize a JSON payload for one model
    pub fn featurize_json(&self, payload: &str, model: ModelKey) -> Result<FeatureFrame> {
        let input = RawClinicalInput::from_json_str(payload)?;
        self.featurize(&input, model)
    }

    /// Featurize a cohort for one model, one row per input in order
    ///
    /// Row order always matches input order; the parallel path collects
    /// into the same positions the sequential path would. The first
    /// failing input aborts the batch.
    pub fn featurize_batch(
        &self,
        inputs: &[RawClinicalInput],
        model: ModelKey,
    ) -> Result<FeatureFrame> {
        let start = Instant::now();

        let rows = if inputs.len() >= self.config.parallel_threshold {
            batch::parallel_rows(self, model, inputs)?
        } else {
            batch::sequential_rows(self, model, inputs)?
        };

        let mut frame = FeatureFrame::new(selectors::column_order(model));
        for cells in rows {
            frame.push_row(cells)?;
        }

        let elapsed = start.elapsed();
        info!(
            "Featurized {} inputs for {} in {:.2?} ({:.2} inputs/sec)",
            frame.num_rows(),
            model,
            elapsed,
            frame.num_rows() as f64 / elapsed.as_secs_f64()
        );

        Ok(frame)
    }

    /// One row of model cells from one input
    pub(crate) fn model_row(&self, model: ModelKey, input: &RawClinicalInput) -> Result<RowCells> {
        let record = self.corrected_record(input)?;
        Ok(selectors::row_cells(model, &record, &self.config.reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fixtures::{synthetic_cohort, synthetic_input};
    use serde_json::json;

    #[test]
    fn featurizes_a_single_input() {
        let pipeline = Pipeline::default();
        let input = synthetic_input(11);
        let frame = pipeline.featurize(&input, ModelKey::Testosterone).unwrap();
        assert_eq!(frame.num_rows(), 1);
        assert_eq!(frame.num_columns(), 10);
    }

    #[test]
    fn featurize_json_accepts_a_payload() {
        let pipeline = Pipeline::default();
        let frame = pipeline
            .featurize_json(
                &json!({"gender": "female", "ageYears": 30}).to_string(),
                ModelKey::Menopause,
            )
            .unwrap();
        assert_eq!(frame.num_rows(), 1);
        assert_eq!(frame.cell(0, "RIDAGEYR"), Some(30.0));
    }

    #[test]
    fn missing_demographics_fail_featurization() {
        let pipeline = Pipeline::default();
        let input = RawClinicalInput::default();
        assert!(pipeline.featurize(&input, ModelKey::Shbg).is_err());
    }

    #[test]
    fn batch_rows_follow_input_order() {
        let pipeline = Pipeline::default();
        let inputs = synthetic_cohort(3, 12);
        let frame = pipeline.featurize_batch(&inputs, ModelKey::Menopause).unwrap();
        assert_eq!(frame.num_rows(), 12);
        for (index, input) in inputs.iter().enumerate() {
            let row = frame.row_values(index).unwrap();
            assert_eq!(row[0], input.age_years);
        }
    }

    #[test]
    fn empty_batch_yields_an_empty_frame() {
        let pipeline = Pipeline::default();
        let frame = pipeline.featurize_batch(&[], ModelKey::Infertility).unwrap();
        assert_eq!(frame.num_rows(), 0);
        assert_eq!(frame.num_columns(), 21);
    }
}

//! Batch row assembly
//!
//! Sequential and parallel implementations of cohort featurization. Both
//! produce one row per input in input order; the parallel path relies on
//! rayon's indexed collect to keep positions stable.

use indicatif::ProgressBar;
use log::info;
use rayon::prelude::*;

use super::Pipeline;
use crate::error::Result;
use crate::frame::RowCells;
use crate::models::raw::RawClinicalInput;
use crate::selectors::ModelKey;
use crate::utils::progress;

/// Assemble rows one input at a time
pub(super) fn sequential_rows(
    pipeline: &Pipeline,
    model: ModelKey,
    inputs: &[RawClinicalInput],
) -> Result<Vec<RowCells>> {
    info!("Using sequential featurization for {} inputs", inputs.len());

    let pb = batch_progress_bar(pipeline, inputs.len());
    let mut rows = Vec::with_capacity(inputs.len());
    for input in inputs {
        rows.push(pipeline.model_row(model, input)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(rows)
}

/// Assemble rows across the rayon pool
pub(super) fn parallel_rows(
    pipeline: &Pipeline,
    model: ModelKey,
    inputs: &[RawClinicalInput],
) -> Result<Vec<RowCells>> {
    let num_threads = rayon::current_num_threads();
    info!(
        "Using parallel featurization with {num_threads} threads for {} inputs",
        inputs.len()
    );

    let pb = batch_progress_bar(pipeline, inputs.len());
    let rows = inputs
        .par_iter()
        .map(|input| {
            let row = pipeline.model_row(model, input);
            pb.inc(1);
            row
        })
        .collect::<Result<Vec<_>>>();
    pb.finish_and_clear();

    rows
}

fn batch_progress_bar(pipeline: &Pipeline, len: usize) -> ProgressBar {
    if pipeline.config.show_progress {
        progress::create_batch_progress_bar(len as u64, Some("Featurizing inputs"))
    } else {
        progress::create_hidden_progress_bar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::utils::fixtures::synthetic_cohort;

    #[test]
    fn parallel_and_sequential_agree() {
        let pipeline = Pipeline::default();
        let inputs = synthetic_cohort(17, 64);

        let sequential = sequential_rows(&pipeline, ModelKey::Infertility, &inputs).unwrap();
        let parallel = parallel_rows(&pipeline, ModelKey::Infertility, &inputs).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn threshold_zero_forces_the_parallel_path() {
        let pipeline = Pipeline::new(PipelineConfig {
            parallel_threshold: 0,
            ..PipelineConfig::default()
        });
        let inputs = synthetic_cohort(5, 4);
        let frame = pipeline.featurize_batch(&inputs, ModelKey::Shbg).unwrap();
        assert_eq!(frame.num_rows(), 4);
    }
}

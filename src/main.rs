//! Demo binary for the feature pipeline
//!
//! Featurizes a sample patient for every model, emits an Arrow batch,
//! runs a parallel cohort featurization, scores the hormone panel through
//! the async service with stand-in backends, and sweeps lead sensitivity.

use std::sync::Arc;
use std::time::Instant;

use feature_prep::service::FnBackend;
use feature_prep::utils::fixtures;
use feature_prep::{
    Analyte, ModelKey, Pipeline, PipelineConfig, PredictionService, RawClinicalInput,
};
use log::info;
use serde_json::json;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let payload = json!({
        "gender": "female",
        "ageYears": 32,
        "ageMonths": 384,
        "pregnancyStatus": "no",
        "pregnancyCount": 2,
        "maritalStatus": "married",
        "BMXBMI": 24.7,
        "BMDSADCM": 18.9,
        "RHQ031": "yes",
        "is_menopausal": "no",
        "RHQ200": "no",
        "hadHysterectomy": "no",
        "everUsedFemaleHormones": "no",
        "everUsedBirthControlPills": "yes",
        "race": 3,
        "countryOfBirth": 1,
        "bloodMetals": [{
            "lead_ugdl": 1.1,
            "cadmium_ugl": 0.32,
            "mercury_ugl": 1.8,
            "selenium_ugl": 191.0,
            "manganese_ugl": 9.1
        }]
    });
    let input = RawClinicalInput::from_json(payload)?;

    // Example 1: featurize the sample patient for every model
    let pipeline = Pipeline::default();
    for model in ModelKey::ALL {
        let frame = pipeline.featurize(&input, model)?;
        info!(
            "{model}: {} columns [{}]",
            frame.num_columns(),
            frame.describe()
        );
    }

    // Example 2: Arrow interchange for the infertility frame
    let frame = pipeline.featurize(&input, ModelKey::Infertility)?;
    let batch = frame.to_record_batch()?;
    info!(
        "Infertility record batch: {} row(s) x {} columns",
        batch.num_rows(),
        batch.num_columns()
    );

    // Example 3: parallel featurization over a synthetic cohort
    let batch_pipeline = Pipeline::new(PipelineConfig {
        show_progress: true,
        ..PipelineConfig::default()
    });
    let cohort = fixtures::synthetic_cohort(42, 2_000);
    let start = Instant::now();
    let cohort_frame = batch_pipeline.featurize_batch(&cohort, ModelKey::Menopause)?;
    info!(
        "Cohort frame: {} rows x {} columns in {:?}",
        cohort_frame.num_rows(),
        cohort_frame.num_columns(),
        start.elapsed()
    );

    // Example 4: hormone panel through the async service
    let mut service = PredictionService::new(Pipeline::default()).with_feature_echo(true);
    for model in ModelKey::HORMONE_GROUP {
        service.register(Arc::new(FnBackend::new(model, "demo-mean", mean_of_present)));
    }
    let outcomes = service.predict_hormone_panel(&input).await?;
    for outcome in &outcomes {
        info!("{} scored {:.4}", outcome.model, outcome.value);
    }
    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    // Example 5: lead sensitivity across the infertility risk features
    let grid = feature_prep::linear_grid(0.5, 5.0, 10);
    let swept = feature_prep::sweep(&pipeline, &input, ModelKey::Infertility, Analyte::Lead, &grid)?;
    for (row, mass) in swept.grid.iter().enumerate() {
        let tier = swept.frame.cell(row, "lead_risk").unwrap_or(f64::NAN);
        info!("lead {mass:.2} ug/dL: risk tier {tier:.0}");
    }

    info!("Feature pipeline demo completed successfully");
    Ok(())
}

/// Stand-in scorer: mean of the non-null cells
fn mean_of_present(cells: &[Option<f64>]) -> feature_prep::Result<f64> {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for value in cells.iter().flatten().copied() {
        sum += value;
        count += 1;
    }
    if count == 0 {
        Ok(0.0)
    } else {
        Ok(sum / count as f64)
    }
}

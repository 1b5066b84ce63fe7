//! Sensitivity sweeps over analyte concentrations
//!
//! A sweep re-featurizes one base input across a numeric grid of mass
//! concentrations for a single analyte, one row per grid point. The swept
//! value replaces both stored representations, so unit conversion re-runs
//! at every point and the molar and mass columns move together. Row order
//! follows grid order.

use log::info;

use crate::error::Result;
use crate::frame::FeatureFrame;
use crate::models::raw::RawClinicalInput;
use crate::pipeline::Pipeline;
use crate::reference::Analyte;
use crate::selectors::{self, ModelKey};

/// Outcome of one sensitivity sweep
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// The model the rows were featurized for
    pub model: ModelKey,
    /// The analyte that was varied
    pub analyte: Analyte,
    /// Mass concentrations, in grid order
    pub grid: Vec<f64>,
    /// One featurized row per grid point
    pub frame: FeatureFrame,
}

/// Re-featurize `base` across `grid` mass concentrations of `analyte`
///
/// # Errors
/// Fails when the base input is missing the demographics the domain
/// rules require, or when row assembly fails.
pub fn sweep(
    pipeline: &Pipeline,
    base: &RawClinicalInput,
    model: ModelKey,
    analyte: Analyte,
    grid: &[f64],
) -> Result<SweepResult> {
    info!(
        "Sweeping {analyte} over {} points for {model}",
        grid.len()
    );

    let mut frame = FeatureFrame::new(selectors::column_order(model));
    for &mass in grid {
        let mut input = base.clone();
        let reading = input.first_metals_mut();
        reading.set_mass(analyte, Some(mass));
        // Drop any stored molar value so conversion re-derives it from
        // the swept mass.
        reading.set_molar(analyte, None);

        frame.push_row(pipeline.model_row(model, &input)?)?;
    }

    Ok(SweepResult {
        model,
        analyte,
        grid: grid.to_vec(),
        frame,
    })
}

/// Evenly spaced grid from `start` to `end` inclusive
#[must_use]
pub fn linear_grid(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points).map(|i| (i as f64).mul_add(step, start)).collect()
        }
    }
}

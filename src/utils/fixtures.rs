//! Synthetic input fixtures
//!
//! Seeded generators for plausible clinical payloads, used by the batch
//! tests and the demo binary. The same seed always yields the same
//! cohort.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::raw::{BloodMetalReading, RawClinicalInput};
use crate::models::types::YesNo;

/// One plausible raw input, deterministic per seed
#[must_use]
pub fn synthetic_input(seed: u64) -> RawClinicalInput {
    let mut rng = StdRng::seed_from_u64(seed);
    let female = rng.random_bool(0.5);

    let mut input = RawClinicalInput {
        gender: Some(if female { "female" } else { "male" }.to_string()),
        age_years: Some(rng.random_range(18.0..70.0_f64).round()),
        bmi: Some(rng.random_range(17.0..42.0)),
        marital_status: Some(
            ["married", "divorced", "never_married", "living_with_partner"]
                [rng.random_range(0..4)]
            .to_string(),
        ),
        ..RawClinicalInput::default()
    };
    input.age_months = input.age_years.map(|years| years * 12.0);

    if female {
        input.pregnancy_status = Some(rng.random_bool(0.1));
        input.pregnancy_count = Some(f64::from(rng.random_range(0..5_u32)));
        input.regular_periods = Some(answer(&mut rng, 0.7));
        input.menopausal = Some(answer(&mut rng, 0.3));
        input.birth_control = Some(answer(&mut rng, 0.5));
    }

    let mut reading = BloodMetalReading::default();
    if rng.random_bool(0.9) {
        reading.lead_ugdl = Some(rng.random_range(0.2..4.0));
    }
    if rng.random_bool(0.9) {
        reading.cadmium_ugl = Some(rng.random_range(0.05..0.8));
    }
    if rng.random_bool(0.85) {
        reading.mercury_ugl = Some(rng.random_range(0.1..5.0));
    }
    if rng.random_bool(0.8) {
        reading.selenium_ugl = Some(rng.random_range(70.0..220.0));
    }
    if rng.random_bool(0.8) {
        reading.manganese_ugl = Some(rng.random_range(3.0..16.0));
    }
    input.blood_metals.push(reading);

    input
}

/// A deterministic cohort of synthetic inputs
#[must_use]
pub fn synthetic_cohort(seed: u64, size: usize) -> Vec<RawClinicalInput> {
    (0..size)
        .map(|offset| synthetic_input(seed.wrapping_add(offset as u64)))
        .collect()
}

fn answer(rng: &mut StdRng, yes_probability: f64) -> YesNo {
    if rng.random_bool(yes_probability) {
        YesNo::Yes
    } else {
        YesNo::No
    }
}

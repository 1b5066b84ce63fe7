//! Common feature extraction.
//!
//! Builds the canonical superset record from raw clinical input. This is
//! the only stage that reads the raw payload; everything downstream works
//! on [`FeatureRecord`]. Missing sources stay null here, with one
//! deliberate exception (pregnancy status, which the trained models expect
//! as a hard 0/1).

use crate::models::codes::FieldCode;
use crate::models::raw::RawClinicalInput;
use crate::models::record::FeatureRecord;
use crate::models::types::{Gender, MaritalStatus, YesNo};
use crate::reference::{Analyte, ReferenceValues};
use crate::units;

/// Extract the canonical feature record from raw input.
///
/// Every canonical field is populated (possibly with null) when this
/// returns; no later stage consults the raw payload again.
#[must_use]
pub fn extract_features(input: &RawClinicalInput, reference: &ReferenceValues) -> FeatureRecord {
    let mut record = FeatureRecord::new();

    // Ages pass through independently; years are never derived from
    // months or vice versa in the stored record.
    record.age_months = input.age_months;
    record.age_years = input.age_years;

    record.gender = input.gender.as_deref().map(Gender::from).and_then(Gender::code);

    // Truthy of any shape becomes 1, everything else (including absent)
    // becomes 0. The models were fit with this hard default.
    record.pregnancy_status = Some(if input.pregnancy_status == Some(true) { 1.0 } else { 0.0 });

    // The count itself is discarded; models consume the two-valued
    // ever-pregnant convention (1 = yes, 2 = no).
    record.ever_pregnant = input.pregnancy_count.map(|count| if count > 0.0 { 1.0 } else { 2.0 });

    record.marital_status = input
        .marital_status
        .as_deref()
        .and_then(MaritalStatus::parse)
        .map(MaritalStatus::code);

    record.regular_periods = input.regular_periods.map(YesNo::code);
    record.breastfeeding = input.breastfeeding.map(YesNo::code);
    record.menopausal = input.menopausal.map(YesNo::code);
    record.hysterectomy = input.hysterectomy.map(YesNo::code);
    record.female_hormones = input.female_hormones.map(YesNo::code);
    record.birth_control = input.birth_control.map(YesNo::code);
    record.ovaries_removed = input.ovaries_removed.map(YesNo::code);
    record.tried_pregnancy_year = input.tried_pregnancy_year.map(YesNo::code);
    record.last_period_age = input.last_period_age;

    record.bmi = input.bmi;
    record.abdominal_diameter = input.abdominal_diameter;
    record.race = input.race;
    record.country_of_birth = input.country_of_birth;
    // Survey weight has no raw source; it stays null until the
    // infertility frame zero-fills it.

    if let Some(reading) = input.first_metals() {
        for analyte in Analyte::ALL {
            let spec = reference.analyte(analyte);
            let molar = reading.molar(analyte);
            let mass = reading.mass(analyte);
            // Provided values pass through; the missing direction is
            // converted from the other. Both null stays both null.
            record.set(
                FieldCode::molar(analyte),
                molar.or_else(|| units::mass_to_molar(mass, spec)),
            );
            record.set(
                FieldCode::mass(analyte),
                mass.or_else(|| units::molar_to_mass(molar, spec)),
            );
        }
    }

    if !input.extra.is_empty() {
        log::debug!(
            "Input carried {} unmodeled key(s): {:?}",
            input.extra.len(),
            input.extra.keys().collect::<Vec<_>>()
        );
    }

    record
}

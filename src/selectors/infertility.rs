//! Column order and row assembly for the infertility model.
//!
//! This is the one path with derived features: the five mass
//! concentrations go through detection-limit substitution, the risk
//! engine produces tiers and composites, and the survey-style gaps of the
//! selected columns are zero-filled last so the sentinel and risk codes
//! always win. The wire names are the snake-cased aliases the model was
//! trained with, not the canonical survey codes.

use crate::frame::{ColumnSource, ColumnSpec, RowCells};
use crate::impute;
use crate::models::codes::FieldCode;
use crate::models::record::FeatureRecord;
use crate::reference::ReferenceValues;
use crate::risk::{self, MetalRiskProfile};

/// Infertility model columns
pub const COLUMNS: [ColumnSpec; 21] = [
    ColumnSpec::renamed(FieldCode::SurveyWeight, "Blood metal weights"),
    ColumnSpec::renamed(FieldCode::RegularPeriods, "regular_periods"),
    ColumnSpec::renamed(FieldCode::LastPeriodAge, "last_period_age"),
    ColumnSpec::renamed(FieldCode::PelvicInfection, "pelvic_infection"),
    ColumnSpec::renamed(FieldCode::Hysterectomy, "hysterectomy"),
    ColumnSpec::renamed(FieldCode::BirthControl, "birth_control"),
    ColumnSpec::renamed(FieldCode::FemaleHormones, "female_hormones"),
    ColumnSpec::renamed(FieldCode::AgeYears, "age_years"),
    ColumnSpec::renamed(FieldCode::Race, "race"),
    ColumnSpec::renamed(FieldCode::CountryOfBirth, "country_birth"),
    ColumnSpec::renamed(FieldCode::MaritalStatus, "marital_status"),
    ColumnSpec::derived("lead_risk"),
    ColumnSpec::derived("cadmium_risk"),
    ColumnSpec::derived("mercury_risk"),
    ColumnSpec::derived("selenium_risk"),
    ColumnSpec::derived("manganese_risk"),
    ColumnSpec::derived("toxic_risk_score"),
    ColumnSpec::derived("multi_high_risk"),
    ColumnSpec::derived("risk_imbalance"),
    ColumnSpec::derived("high_lead_cadmium"),
    ColumnSpec::derived("low_selenium_high_toxics"),
];

/// Survey-style fields whose remaining nulls read as 0 on this frame.
/// Survey weight and age are passed through as-is; they are not part of
/// the terminal fallback.
const fn is_zero_filled(code: FieldCode) -> bool {
    matches!(
        code,
        FieldCode::RegularPeriods
            | FieldCode::LastPeriodAge
            | FieldCode::PelvicInfection
            | FieldCode::Hysterectomy
            | FieldCode::BirthControl
            | FieldCode::FemaleHormones
            | FieldCode::Race
            | FieldCode::CountryOfBirth
            | FieldCode::MaritalStatus
    )
}

/// Assemble the infertility row from a corrected record
#[must_use]
pub fn row_cells(record: &FeatureRecord, reference: &ReferenceValues) -> RowCells {
    let panel = impute::filled_mass_panel(record, reference);
    let profile = risk::derive_profile(&panel, reference);

    COLUMNS
        .iter()
        .map(|spec| match spec.source {
            ColumnSource::Field(code) if is_zero_filled(code) => {
                Some(impute::zero_fill(record.get(code)))
            }
            ColumnSource::Field(code) => record.get(code),
            ColumnSource::Derived => derived_value(spec.name, &profile),
        })
        .collect()
}

fn derived_value(name: &str, profile: &MetalRiskProfile) -> Option<f64> {
    match name {
        "lead_risk" => Some(profile.lead.value()),
        "cadmium_risk" => Some(profile.cadmium.value()),
        "mercury_risk" => Some(profile.mercury.value()),
        "selenium_risk" => Some(profile.selenium.value()),
        "manganese_risk" => Some(profile.manganese.value()),
        "toxic_risk_score" => Some(profile.toxic_risk_score),
        "multi_high_risk" => Some(flag(profile.multi_high_risk)),
        "risk_imbalance" => Some(profile.risk_imbalance),
        "high_lead_cadmium" => Some(flag(profile.high_lead_cadmium)),
        "low_selenium_high_toxics" => Some(flag(profile.low_selenium_high_toxics)),
        other => {
            log::error!("No derivation defined for column {other}");
            None
        }
    }
}

const fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrected_female_record() -> FeatureRecord {
        let mut record = FeatureRecord::new();
        record.gender = Some(2.0);
        record.age_years = Some(30.0);
        record.pregnancy_status = Some(0.0);
        record
    }

    #[test]
    fn wire_names_are_the_trained_aliases() {
        let names: Vec<&str> = COLUMNS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "Blood metal weights",
                "regular_periods",
                "last_period_age",
                "pelvic_infection",
                "hysterectomy",
                "birth_control",
                "female_hormones",
                "age_years",
                "race",
                "country_birth",
                "marital_status",
                "lead_risk",
                "cadmium_risk",
                "mercury_risk",
                "selenium_risk",
                "manganese_risk",
                "toxic_risk_score",
                "multi_high_risk",
                "risk_imbalance",
                "high_lead_cadmium",
                "low_selenium_high_toxics"
            ]
        );
    }

    #[test]
    fn survey_gaps_zero_fill_but_weights_and_age_pass_through() {
        let record = corrected_female_record();
        let cells = row_cells(&record, &ReferenceValues::default());
        // Survey weight has no source and stays null.
        assert_eq!(cells[0], None);
        // Reproductive-history and demographic gaps read as 0.
        assert_eq!(cells[1], Some(0.0));
        assert_eq!(cells[10], Some(0.0));
        // Age passes through as provided.
        assert_eq!(cells[7], Some(30.0));
    }

    #[test]
    fn absent_panel_bins_every_tier_low() {
        let record = corrected_female_record();
        let cells = row_cells(&record, &ReferenceValues::default());
        for index in 11..=15 {
            assert_eq!(cells[index], Some(0.0), "tier column {index}");
        }
        assert_eq!(cells[16], Some(0.0));
        assert_eq!(cells[17], Some(0.0));
    }

    #[test]
    fn measured_panel_drives_the_risk_columns() {
        let mut record = corrected_female_record();
        record.lead_mass = Some(2.5);
        record.cadmium_mass = Some(0.6);
        record.mercury_mass = Some(0.5);
        record.regular_periods = Some(2.0);

        let cells = row_cells(&record, &ReferenceValues::default());
        assert_eq!(cells[1], Some(2.0));
        assert_eq!(cells[11], Some(2.0), "lead tier");
        assert_eq!(cells[12], Some(2.0), "cadmium tier");
        assert_eq!(cells[13], Some(0.0), "mercury tier");
        assert_eq!(cells[16], Some(4.0), "toxic score");
        assert_eq!(cells[17], Some(1.0), "multi high");
        assert_eq!(cells[19], Some(1.0), "lead+cadmium");
        // Selenium absent reads deficient, so the co-occurrence flag trips.
        assert_eq!(cells[20], Some(1.0));
    }
}

//! The canonical feature record.
//!
//! Superset of every model's inputs. Every canonical field is present from
//! construction on, holding `None` until extraction fills it; a field with
//! no source stays `None` (never zero) so later stages can tell "missing"
//! from "measured zero".

use crate::models::codes::FieldCode;

/// Canonical, flat feature record keyed by [`FieldCode`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord {
    /// Age in months (RIDAGEMN)
    pub age_months: Option<f64>,
    /// Age in years (RIDAGEYR)
    pub age_years: Option<f64>,
    /// Gender code (RIAGENDR)
    pub gender: Option<f64>,
    /// Pregnancy status or sentinel (RIDEXPRG)
    pub pregnancy_status: Option<f64>,
    /// Race/ethnicity code (RIDRETH3)
    pub race: Option<f64>,
    /// Country-of-birth code (DMDBORN4)
    pub country_of_birth: Option<f64>,
    /// Marital status code (DMDMARTL)
    pub marital_status: Option<f64>,
    /// Ever-pregnant indicator (RHQ131)
    pub ever_pregnant: Option<f64>,
    /// Regular periods (RHQ031)
    pub regular_periods: Option<f64>,
    /// Breastfeeding (RHQ200)
    pub breastfeeding: Option<f64>,
    /// Age at last period (RHQ060)
    pub last_period_age: Option<f64>,
    /// Tried a year to become pregnant (RHQ074)
    pub tried_pregnancy_year: Option<f64>,
    /// Pelvic infection treatment (RHQ078)
    pub pelvic_infection: Option<f64>,
    /// Ovaries removed (RHQ305)
    pub ovaries_removed: Option<f64>,
    /// Birth-control use (RHQ420)
    pub birth_control: Option<f64>,
    /// Female-hormone use (RHQ540)
    pub female_hormones: Option<f64>,
    /// Hysterectomy (RHD280)
    pub hysterectomy: Option<f64>,
    /// Menopausal flag (`is_menopausal`)
    pub menopausal: Option<f64>,
    /// Body-mass index (BMXBMI)
    pub bmi: Option<f64>,
    /// Sagittal abdominal diameter (BMDSADCM)
    pub abdominal_diameter: Option<f64>,
    /// Panel survey weight (WTSH2YR)
    pub survey_weight: Option<f64>,
    /// Lead, molar (LBDBPBSI)
    pub lead_molar: Option<f64>,
    /// Cadmium, molar (LBDBCDSI)
    pub cadmium_molar: Option<f64>,
    /// Mercury, molar (LBDTHGSI)
    pub mercury_molar: Option<f64>,
    /// Selenium, molar (LBDBSESI)
    pub selenium_molar: Option<f64>,
    /// Manganese, molar (LBDBMNSI)
    pub manganese_molar: Option<f64>,
    /// Lead, mass (LBXBPB)
    pub lead_mass: Option<f64>,
    /// Cadmium, mass (LBXBCD)
    pub cadmium_mass: Option<f64>,
    /// Mercury, mass (LBXTHG)
    pub mercury_mass: Option<f64>,
    /// Selenium, mass (LBXBSE)
    pub selenium_mass: Option<f64>,
    /// Manganese, mass (LBXBMN)
    pub manganese_mass: Option<f64>,
}

impl FeatureRecord {
    /// Create an all-null record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of one canonical field
    #[must_use]
    pub const fn get(&self, code: FieldCode) -> Option<f64> {
        match code {
            FieldCode::AgeMonths => self.age_months,
            FieldCode::AgeYears => self.age_years,
            FieldCode::Gender => self.gender,
            FieldCode::PregnancyStatus => self.pregnancy_status,
            FieldCode::Race => self.race,
            FieldCode::CountryOfBirth => self.country_of_birth,
            FieldCode::MaritalStatus => self.marital_status,
            FieldCode::EverPregnant => self.ever_pregnant,
            FieldCode::RegularPeriods => self.regular_periods,
            FieldCode::Breastfeeding => self.breastfeeding,
            FieldCode::LastPeriodAge => self.last_period_age,
            FieldCode::TriedPregnancyYear => self.tried_pregnancy_year,
            FieldCode::PelvicInfection => self.pelvic_infection,
            FieldCode::OvariesRemoved => self.ovaries_removed,
            FieldCode::BirthControl => self.birth_control,
            FieldCode::FemaleHormones => self.female_hormones,
            FieldCode::Hysterectomy => self.hysterectomy,
            FieldCode::Menopausal => self.menopausal,
            FieldCode::Bmi => self.bmi,
            FieldCode::AbdominalDiameter => self.abdominal_diameter,
            FieldCode::SurveyWeight => self.survey_weight,
            FieldCode::LeadMolar => self.lead_molar,
            FieldCode::CadmiumMolar => self.cadmium_molar,
            FieldCode::MercuryMolar => self.mercury_molar,
            FieldCode::SeleniumMolar => self.selenium_molar,
            FieldCode::ManganeseMolar => self.manganese_molar,
            FieldCode::LeadMass => self.lead_mass,
            FieldCode::CadmiumMass => self.cadmium_mass,
            FieldCode::MercuryMass => self.mercury_mass,
            FieldCode::SeleniumMass => self.selenium_mass,
            FieldCode::ManganeseMass => self.manganese_mass,
        }
    }

    /// Overwrite one canonical field
    pub fn set(&mut self, code: FieldCode, value: Option<f64>) {
        let slot = match code {
            FieldCode::AgeMonths => &mut self.age_months,
            FieldCode::AgeYears => &mut self.age_years,
            FieldCode::Gender => &mut self.gender,
            FieldCode::PregnancyStatus => &mut self.pregnancy_status,
            FieldCode::Race => &mut self.race,
            FieldCode::CountryOfBirth => &mut self.country_of_birth,
            FieldCode::MaritalStatus => &mut self.marital_status,
            FieldCode::EverPregnant => &mut self.ever_pregnant,
            FieldCode::RegularPeriods => &mut self.regular_periods,
            FieldCode::Breastfeeding => &mut self.breastfeeding,
            FieldCode::LastPeriodAge => &mut self.last_period_age,
            FieldCode::TriedPregnancyYear => &mut self.tried_pregnancy_year,
            FieldCode::PelvicInfection => &mut self.pelvic_infection,
            FieldCode::OvariesRemoved => &mut self.ovaries_removed,
            FieldCode::BirthControl => &mut self.birth_control,
            FieldCode::FemaleHormones => &mut self.female_hormones,
            FieldCode::Hysterectomy => &mut self.hysterectomy,
            FieldCode::Menopausal => &mut self.menopausal,
            FieldCode::Bmi => &mut self.bmi,
            FieldCode::AbdominalDiameter => &mut self.abdominal_diameter,
            FieldCode::SurveyWeight => &mut self.survey_weight,
            FieldCode::LeadMolar => &mut self.lead_molar,
            FieldCode::CadmiumMolar => &mut self.cadmium_molar,
            FieldCode::MercuryMolar => &mut self.mercury_molar,
            FieldCode::SeleniumMolar => &mut self.selenium_molar,
            FieldCode::ManganeseMolar => &mut self.manganese_molar,
            FieldCode::LeadMass => &mut self.lead_mass,
            FieldCode::CadmiumMass => &mut self.cadmium_mass,
            FieldCode::MercuryMass => &mut self.mercury_mass,
            FieldCode::SeleniumMass => &mut self.selenium_mass,
            FieldCode::ManganeseMass => &mut self.manganese_mass,
        };
        *slot = value;
    }

    /// Fill a field only if it is currently null
    pub fn fill_if_null(&mut self, code: FieldCode, value: f64) {
        if self.get(code).is_none() {
            self.set(code, Some(value));
        }
    }

    /// Age in years for rule evaluation: the years field when present,
    /// otherwise months scaled down. Stored fields are never rewritten.
    #[must_use]
    pub fn age_years_for_rules(&self) -> Option<f64> {
        self.age_years.or_else(|| self.age_months.map(|m| m / 12.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_all_null() {
        let record = FeatureRecord::new();
        for code in FieldCode::ALL {
            assert_eq!(record.get(code), None, "{code}");
        }
    }

    #[test]
    fn get_set_round_trip_every_field() {
        let mut record = FeatureRecord::new();
        for (i, code) in FieldCode::ALL.iter().enumerate() {
            record.set(*code, Some(i as f64));
        }
        for (i, code) in FieldCode::ALL.iter().enumerate() {
            assert_eq!(record.get(*code), Some(i as f64), "{code}");
        }
    }

    #[test]
    fn fill_if_null_keeps_existing_values() {
        let mut record = FeatureRecord::new();
        record.set(FieldCode::Bmi, Some(24.5));
        record.fill_if_null(FieldCode::Bmi, 300.0);
        record.fill_if_null(FieldCode::RegularPeriods, 300.0);
        assert_eq!(record.bmi, Some(24.5));
        assert_eq!(record.regular_periods, Some(300.0));
    }

    #[test]
    fn rule_age_prefers_years_then_scales_months() {
        let mut record = FeatureRecord::new();
        assert_eq!(record.age_years_for_rules(), None);
        record.age_months = Some(180.0);
        assert_eq!(record.age_years_for_rules(), Some(15.0));
        record.age_years = Some(45.0);
        assert_eq!(record.age_years_for_rules(), Some(45.0));
    }
}

//! The raw clinical input contract.
//!
//! This is the one normalization boundary: every accepted external
//! representation (service payloads, stored records, test fixtures) is
//! deserialized into [`RawClinicalInput`] before any pipeline logic runs.
//! Every field is optional, numbers may arrive as strings, yes/no answers
//! may arrive as booleans, numbers, or text, and unknown keys are
//! tolerated. A malformed value degrades to null with a warning; it never
//! aborts the record.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::models::types::{YesNo, truthiness};
use crate::reference::Analyte;

/// One blood heavy-metal panel reading
///
/// Molar and mass keys may both be present; the extractor converts
/// whichever direction is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BloodMetalReading {
    /// Lead, µmol/L
    #[serde(rename = "lead_umolL", deserialize_with = "de_lenient_number")]
    pub lead_molar: Option<f64>,
    /// Cadmium, µmol/L
    #[serde(rename = "cadmium_umolL", deserialize_with = "de_lenient_number")]
    pub cadmium_molar: Option<f64>,
    /// Mercury, nmol/L (wire key kept from the entry forms)
    #[serde(rename = "mercury_umolL", deserialize_with = "de_lenient_number")]
    pub mercury_molar: Option<f64>,
    /// Selenium, µmol/L
    #[serde(rename = "selenium_umolL", deserialize_with = "de_lenient_number")]
    pub selenium_molar: Option<f64>,
    /// Manganese, µmol/L
    #[serde(rename = "manganese_umolL", deserialize_with = "de_lenient_number")]
    pub manganese_molar: Option<f64>,
    /// Lead, µg/dL
    #[serde(deserialize_with = "de_lenient_number")]
    pub lead_ugdl: Option<f64>,
    /// Cadmium, µg/L
    #[serde(deserialize_with = "de_lenient_number")]
    pub cadmium_ugl: Option<f64>,
    /// Mercury, µg/L
    #[serde(deserialize_with = "de_lenient_number")]
    pub mercury_ugl: Option<f64>,
    /// Selenium, µg/L
    #[serde(deserialize_with = "de_lenient_number")]
    pub selenium_ugl: Option<f64>,
    /// Manganese, µg/L
    #[serde(deserialize_with = "de_lenient_number")]
    pub manganese_ugl: Option<f64>,
    /// Keys this reading does not model, kept for diagnostics
    #[serde(flatten)]
    pub extra: FxHashMap<String, Value>,
}

impl BloodMetalReading {
    /// Molar value for one analyte
    #[must_use]
    pub const fn molar(&self, analyte: Analyte) -> Option<f64> {
        match analyte {
            Analyte::Lead => self.lead_molar,
            Analyte::Cadmium => self.cadmium_molar,
            Analyte::Mercury => self.mercury_molar,
            Analyte::Selenium => self.selenium_molar,
            Analyte::Manganese => self.manganese_molar,
        }
    }

    /// Mass value for one analyte
    #[must_use]
    pub const fn mass(&self, analyte: Analyte) -> Option<f64> {
        match analyte {
            Analyte::Lead => self.lead_ugdl,
            Analyte::Cadmium => self.cadmium_ugl,
            Analyte::Mercury => self.mercury_ugl,
            Analyte::Selenium => self.selenium_ugl,
            Analyte::Manganese => self.manganese_ugl,
        }
    }

    /// Overwrite the molar value for one analyte
    pub fn set_molar(&mut self, analyte: Analyte, value: Option<f64>) {
        match analyte {
            Analyte::Lead => self.lead_molar = value,
            Analyte::Cadmium => self.cadmium_molar = value,
            Analyte::Mercury => self.mercury_molar = value,
            Analyte::Selenium => self.selenium_molar = value,
            Analyte::Manganese => self.manganese_molar = value,
        }
    }

    /// Overwrite the mass value for one analyte
    pub fn set_mass(&mut self, analyte: Analyte, value: Option<f64>) {
        match analyte {
            Analyte::Lead => self.lead_ugdl = value,
            Analyte::Cadmium => self.cadmium_ugl = value,
            Analyte::Mercury => self.mercury_ugl = value,
            Analyte::Selenium => self.selenium_ugl = value,
            Analyte::Manganese => self.manganese_ugl = value,
        }
    }
}

/// Raw clinical input: the external, partially populated payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawClinicalInput {
    /// Age in years
    #[serde(rename = "ageYears", alias = "age_years", deserialize_with = "de_lenient_number")]
    pub age_years: Option<f64>,
    /// Age in months, independent of the years field
    #[serde(rename = "ageMonths", alias = "age_months", deserialize_with = "de_lenient_number")]
    pub age_months: Option<f64>,
    /// Free-text gender
    pub gender: Option<String>,
    /// Duck-typed pregnancy status
    #[serde(rename = "pregnancyStatus", deserialize_with = "de_truthy")]
    pub pregnancy_status: Option<bool>,
    /// Number of pregnancies
    #[serde(rename = "pregnancyCount", deserialize_with = "de_lenient_number")]
    pub pregnancy_count: Option<f64>,
    /// Free-text marital status
    #[serde(rename = "maritalStatus", alias = "marital_status")]
    pub marital_status: Option<String>,
    /// Blood-metal panel readings; only the first entry is consumed
    #[serde(rename = "bloodMetals", alias = "blood_metals")]
    pub blood_metals: Vec<BloodMetalReading>,
    /// Body-mass index
    #[serde(rename = "BMXBMI", alias = "bmi", deserialize_with = "de_lenient_number")]
    pub bmi: Option<f64>,
    /// Sagittal abdominal diameter, cm
    #[serde(rename = "BMDSADCM", alias = "abdominalDiameter", deserialize_with = "de_lenient_number")]
    pub abdominal_diameter: Option<f64>,
    /// Currently breastfeeding
    #[serde(rename = "RHQ200", alias = "breastfeeding", deserialize_with = "de_yes_no")]
    pub breastfeeding: Option<YesNo>,
    /// Regular menstrual periods
    #[serde(rename = "RHQ031", alias = "regularPeriods", deserialize_with = "de_yes_no")]
    pub regular_periods: Option<YesNo>,
    /// Menopausal status
    #[serde(rename = "is_menopausal", alias = "isMenopausal", deserialize_with = "de_yes_no")]
    pub menopausal: Option<YesNo>,
    /// Had a hysterectomy
    #[serde(rename = "hadHysterectomy", alias = "hysterectomy", deserialize_with = "de_yes_no")]
    pub hysterectomy: Option<YesNo>,
    /// Ever used female hormones
    #[serde(
        rename = "everUsedFemaleHormones",
        alias = "femaleHormones",
        deserialize_with = "de_yes_no"
    )]
    pub female_hormones: Option<YesNo>,
    /// Ever used birth-control pills
    #[serde(
        rename = "everUsedBirthControlPills",
        alias = "birthControl",
        deserialize_with = "de_yes_no"
    )]
    pub birth_control: Option<YesNo>,
    /// Both ovaries removed
    #[serde(rename = "ovariesRemoved", deserialize_with = "de_yes_no")]
    pub ovaries_removed: Option<YesNo>,
    /// Tried a year to become pregnant
    #[serde(rename = "triedYearPregnant", deserialize_with = "de_yes_no")]
    pub tried_pregnancy_year: Option<YesNo>,
    /// Age at last menstrual period
    #[serde(rename = "lastPeriodAge", deserialize_with = "de_lenient_number")]
    pub last_period_age: Option<f64>,
    /// Race/ethnicity survey code
    #[serde(alias = "RIDRETH3", deserialize_with = "de_lenient_number")]
    pub race: Option<f64>,
    /// Country-of-birth survey code
    #[serde(rename = "countryOfBirth", alias = "DMDBORN4", deserialize_with = "de_lenient_number")]
    pub country_of_birth: Option<f64>,
    /// Keys the contract does not model, tolerated and ignored
    #[serde(flatten)]
    pub extra: FxHashMap<String, Value>,
}

impl RawClinicalInput {
    /// Deserialize from a JSON value
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json_str(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// First panel reading, if any
    #[must_use]
    pub fn first_metals(&self) -> Option<&BloodMetalReading> {
        self.blood_metals.first()
    }

    /// First panel reading, creating an empty one if the list is empty
    pub fn first_metals_mut(&mut self) -> &mut BloodMetalReading {
        if self.blood_metals.is_empty() {
            self.blood_metals.push(BloodMetalReading::default());
        }
        &mut self.blood_metals[0]
    }
}

/// Numbers may arrive as JSON numbers or numeric strings; anything else
/// degrades to null with a warning.
fn de_lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}

fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    log::warn!("Ignoring non-numeric input value: {s:?}");
                    None
                }
            }
        }
        other => {
            log::warn!("Ignoring non-numeric input value: {other}");
            None
        }
    }
}

fn de_yes_no<'de, D>(deserializer: D) -> std::result::Result<Option<YesNo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    let answer = YesNo::from_value(&value);
    if answer.is_none() {
        log::warn!("Ignoring unrecognized yes/no value: {value}");
    }
    Ok(answer)
}

fn de_truthy<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(truthiness(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_full_payload() {
        let input = RawClinicalInput::from_json(json!({
            "ageYears": 32,
            "ageMonths": 384,
            "gender": "Female",
            "pregnancyStatus": "yes",
            "pregnancyCount": "2",
            "maritalStatus": "MARRIED",
            "BMXBMI": 24.7,
            "RHQ031": true,
            "is_menopausal": "no",
            "bloodMetals": [{"lead_umolL": 0.02, "mercury_ugl": "1.5"}],
        }))
        .unwrap();

        assert_eq!(input.age_years, Some(32.0));
        assert_eq!(input.pregnancy_status, Some(true));
        assert_eq!(input.pregnancy_count, Some(2.0));
        assert_eq!(input.regular_periods, Some(YesNo::Yes));
        assert_eq!(input.menopausal, Some(YesNo::No));
        let metals = input.first_metals().unwrap();
        assert_eq!(metals.molar(Analyte::Lead), Some(0.02));
        assert_eq!(metals.mass(Analyte::Mercury), Some(1.5));
    }

    #[test]
    fn empty_payload_is_fine() {
        let input = RawClinicalInput::from_json(json!({})).unwrap();
        assert_eq!(input.gender, None);
        assert!(input.blood_metals.is_empty());
        assert!(input.first_metals().is_none());
    }

    #[test]
    fn malformed_values_degrade_to_null() {
        let input = RawClinicalInput::from_json(json!({
            "ageYears": "forty",
            "BMXBMI": {"oops": 1},
            "RHQ200": "maybe",
        }))
        .unwrap();
        assert_eq!(input.age_years, None);
        assert_eq!(input.bmi, None);
        assert_eq!(input.breastfeeding, None);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let input = RawClinicalInput::from_json(json!({
            "gender": "male",
            "visitId": "abc-123",
            "nested": {"extra": true},
        }))
        .unwrap();
        assert_eq!(input.gender.as_deref(), Some("male"));
        assert!(input.extra.contains_key("visitId"));
    }

    #[test]
    fn first_metals_mut_creates_a_reading() {
        let mut input = RawClinicalInput::default();
        input.first_metals_mut().set_mass(Analyte::Lead, Some(1.2));
        assert_eq!(input.first_metals().unwrap().lead_ugdl, Some(1.2));
    }
}

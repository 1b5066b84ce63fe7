#[cfg(test)]
mod tests {
    use feature_prep::rules::{FEMALE_UNDER_AGE, MALE_NOT_APPLICABLE};
    use feature_prep::{FeatureRecord, FieldCode, Pipeline, RawClinicalInput};
    use serde_json::json;

    fn corrected(payload: serde_json::Value) -> FeatureRecord {
        let input = RawClinicalInput::from_json(payload).unwrap();
        Pipeline::default().corrected_record(&input).unwrap()
    }

    #[test]
    fn test_gender_coercion_is_case_insensitive() {
        let record = corrected(json!({"gender": "FEMALE", "ageYears": 30}));
        assert_eq!(record.get(FieldCode::Gender), Some(2.0));

        let record = corrected(json!({"gender": " Male ", "ageYears": 30}));
        assert_eq!(record.get(FieldCode::Gender), Some(1.0));
    }

    #[test]
    fn test_unrecognized_gender_text_is_missing() {
        let input = RawClinicalInput::from_json(json!({"gender": "m", "ageYears": 30})).unwrap();
        assert!(Pipeline::default().corrected_record(&input).is_err());
    }

    #[test]
    fn test_pregnancy_status_defaults_to_zero() {
        // The one field that zero-defaults at extraction
        let record = corrected(json!({"gender": "female", "ageYears": 30}));
        assert_eq!(record.get(FieldCode::PregnancyStatus), Some(0.0));

        let record = corrected(json!({
            "gender": "female", "ageYears": 30, "pregnancyStatus": 1
        }));
        assert_eq!(record.get(FieldCode::PregnancyStatus), Some(1.0));
    }

    #[test]
    fn test_pregnancy_count_binarizes_but_never_zero_defaults() {
        let record = corrected(json!({
            "gender": "female", "ageYears": 30, "pregnancyCount": 3
        }));
        assert_eq!(record.get(FieldCode::EverPregnant), Some(1.0));

        let record = corrected(json!({
            "gender": "female", "ageYears": 30, "pregnancyCount": 0
        }));
        assert_eq!(record.get(FieldCode::EverPregnant), Some(2.0));

        // Absent stays null for a reproductive-age female
        let record = corrected(json!({"gender": "female", "ageYears": 30}));
        assert_eq!(record.get(FieldCode::EverPregnant), None);
    }

    #[test]
    fn test_marital_vocabulary_and_rejection() {
        let codes = [
            ("married", 1.0),
            ("widowed", 2.0),
            ("divorced", 3.0),
            ("separated", 4.0),
            ("never_married", 5.0),
            ("living_with_partner", 6.0),
            ("unknown", 7.0),
        ];
        for (text, code) in codes {
            let record = corrected(json!({
                "gender": "female", "ageYears": 30, "maritalStatus": text
            }));
            assert_eq!(record.get(FieldCode::MaritalStatus), Some(code), "{text}");
        }

        let record = corrected(json!({
            "gender": "female", "ageYears": 30, "maritalStatus": "engaged"
        }));
        assert_eq!(record.get(FieldCode::MaritalStatus), None);
    }

    #[test]
    fn test_survey_answers_coerce_across_shapes() {
        let record = corrected(json!({
            "gender": "female",
            "ageYears": 30,
            "RHQ031": true,
            "RHQ200": "no",
            "everUsedBirthControlPills": 0
        }));
        assert_eq!(record.get(FieldCode::RegularPeriods), Some(1.0));
        assert_eq!(record.get(FieldCode::Breastfeeding), Some(2.0));
        assert_eq!(record.get(FieldCode::BirthControl), Some(2.0));
        // Unanswered flags stay null at extraction
        assert_eq!(record.get(FieldCode::Hysterectomy), None);
    }

    #[test]
    fn test_malformed_numbers_degrade_to_null_not_zero() {
        let record = corrected(json!({
            "gender": "female", "ageYears": 30, "BMXBMI": "not-a-number"
        }));
        assert_eq!(record.get(FieldCode::Bmi), None);
    }

    #[test]
    fn test_age_months_fallback_drives_the_rules() {
        // 200 months is 16.7 years, under the reproductive window
        let record = corrected(json!({"gender": "female", "ageMonths": 200}));
        assert_eq!(record.get(FieldCode::PregnancyStatus), Some(FEMALE_UNDER_AGE));
        // The years field itself is not synthesized
        assert_eq!(record.get(FieldCode::AgeYears), None);
        assert_eq!(record.get(FieldCode::AgeMonths), Some(200.0));
    }

    #[test]
    fn test_male_fill_only_touches_null_reproductive_fields() {
        let record = corrected(json!({
            "gender": "male",
            "ageYears": 45,
            "RHQ031": "no"
        }));

        assert_eq!(record.get(FieldCode::PregnancyStatus), Some(MALE_NOT_APPLICABLE));
        // An answered field keeps its answer
        assert_eq!(record.get(FieldCode::RegularPeriods), Some(2.0));
        // Unanswered reproductive-history fields take the sentinel
        assert_eq!(record.get(FieldCode::Breastfeeding), Some(MALE_NOT_APPLICABLE));
        assert_eq!(record.get(FieldCode::Menopausal), Some(MALE_NOT_APPLICABLE));
        // Non-reproductive fields are untouched
        assert_eq!(record.get(FieldCode::Bmi), None);
    }

    #[test]
    fn test_correction_is_idempotent() {
        let mut record = corrected(json!({"gender": "male", "ageYears": 45}));
        let before = record.clone();
        feature_prep::rules::apply_domain_rules(&mut record).unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn test_molar_and_mass_are_mutually_derived() {
        // Mass-only input gains the molar column
        let record = corrected(json!({
            "gender": "female", "ageYears": 30,
            "bloodMetals": [{"selenium_ugl": 157.94}]
        }));
        let molar = record.get(FieldCode::SeleniumMolar).unwrap();
        assert!((molar - 157.94 / 78.97).abs() < 1e-12);

        // Molar-only input gains the mass column
        let record = corrected(json!({
            "gender": "male", "ageYears": 30,
            "bloodMetals": [{"cadmium_umolL": 0.005}]
        }));
        let mass = record.get(FieldCode::CadmiumMass).unwrap();
        assert!((mass - 0.005 * 112.41).abs() < 1e-12);
    }
}

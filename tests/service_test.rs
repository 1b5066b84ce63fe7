#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use feature_prep::service::{FnBackend, ModelBackend, PredictionService};
    use feature_prep::{FeatureError, ModelKey, Pipeline, RawClinicalInput};
    use serde_json::json;

    fn count_backend(model: ModelKey) -> Arc<dyn ModelBackend> {
        // Scores with the number of present features, easy to verify
        Arc::new(FnBackend::new(model, "count", |cells: &[Option<f64>]| {
            Ok(cells.iter().flatten().count() as f64)
        }))
    }

    fn panel_service() -> PredictionService {
        let mut service = PredictionService::new(Pipeline::default()).with_feature_echo(true);
        for model in ModelKey::HORMONE_GROUP {
            service.register(count_backend(model));
        }
        service
    }

    fn female_payload() -> String {
        json!({
            "gender": "female",
            "ageYears": 29,
            "ageMonths": 348,
            "BMXBMI": 22.1,
            "bloodMetals": [{"lead_ugdl": 0.9, "mercury_ugl": 1.2}]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_hormone_panel_round_trip() {
        let service = panel_service();
        let input = RawClinicalInput::from_json_str(&female_payload()).unwrap();

        let outcomes = service.predict_hormone_panel(&input).await.unwrap();

        assert_eq!(outcomes.len(), 3);
        let keys: Vec<&str> = outcomes.iter().map(|o| o.model.as_str()).collect();
        assert_eq!(
            keys,
            vec!["hormone_testosterone", "hormone_estradiol", "hormone_shbg"]
        );

        // Echoed columns follow each model's order exactly
        let testosterone = outcomes[0].features.as_ref().unwrap();
        assert_eq!(testosterone.columns.len(), 10);
        assert_eq!(testosterone.columns[0], "LBDBSESI");
        let estradiol = outcomes[1].features.as_ref().unwrap();
        assert_eq!(estradiol.columns.len(), 14);
        assert_eq!(estradiol.columns[0], "RIDEXPRG");
    }

    #[tokio::test]
    async fn test_panel_value_counts_present_features() {
        let service = panel_service();
        let input = RawClinicalInput::from_json_str(&female_payload()).unwrap();

        let outcomes = service.predict_hormone_panel(&input).await.unwrap();

        // Testosterone row: Se null, Hg, Cd null, Pb, age months, Mn null,
        // RHQ131 null, gender, pregnancy, BMI present
        assert_eq!(outcomes[0].value, 6.0);
    }

    #[tokio::test]
    async fn test_async_prediction_moves_off_the_runtime() {
        let mut service = PredictionService::new(Pipeline::default());
        service.register(count_backend(ModelKey::Menstrual));
        let input = RawClinicalInput::from_json_str(&female_payload()).unwrap();

        let outcome = service
            .predict_async(input, ModelKey::Menstrual)
            .await
            .unwrap();
        assert_eq!(outcome.model, "menstrual");
        assert!(outcome.features.is_none());
    }

    #[tokio::test]
    async fn test_backend_failures_carry_the_model_key() {
        let mut service = PredictionService::new(Pipeline::default());
        service.register(Arc::new(FnBackend::new(
            ModelKey::Menopause,
            "broken",
            |_cells: &[Option<f64>]| {
                Err(FeatureError::backend("menopause", "weights not loaded"))
            },
        )));
        let input = RawClinicalInput::from_json_str(&female_payload()).unwrap();

        let err = service
            .predict_async(input, ModelKey::Menopause)
            .await
            .unwrap_err();
        match err {
            FeatureError::Backend { model, .. } => assert_eq!(model, "menopause"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_predict_json_and_serialized_outcome() {
        let mut service = PredictionService::new(Pipeline::default()).with_feature_echo(true);
        service.register(count_backend(ModelKey::Infertility));

        let outcome = service
            .predict_json(&female_payload(), ModelKey::Infertility)
            .unwrap();

        let rendered = serde_json::to_value(&outcome).unwrap();
        assert_eq!(rendered["model"], "infertility");
        assert!(rendered["value"].is_number());
        assert_eq!(rendered["features"]["columns"][0], "Blood metal weights");
        assert!(rendered["predicted_at"].is_string());
    }

    #[test]
    fn test_unregistered_model_is_not_a_client_error() {
        let service = PredictionService::new(Pipeline::default());
        let err = service
            .predict_json(&female_payload(), ModelKey::Shbg)
            .unwrap_err();
        assert!(!err.is_client_error());
    }
}

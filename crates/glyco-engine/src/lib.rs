//! Inference request handling for glyco.
//!
//! [`InferenceHandler`] is the single piece of inference logic every surface
//! shares: coerce the eight inputs, invoke the artifact, tier the probability.

pub mod coerce;

use glyco_core::{MeasurementVector, PredictError, PredictionResult, RiskThreshold};
use glyco_model::ModelHandle;
use serde_json::Value;
use tracing::debug;

/// Stateless transform from measurements to a [`PredictionResult`].
///
/// Cheap to clone; the artifact behind it is shared read-only.
#[derive(Debug, Clone)]
pub struct InferenceHandler {
    model: ModelHandle,
    threshold: Option<RiskThreshold>,
}

impl InferenceHandler {
    pub fn new(model: ModelHandle) -> Self {
        Self { model, threshold: None }
    }

    /// Overrides the threshold the artifact ships with.
    pub fn with_threshold(mut self, threshold: RiskThreshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    /// Predicts from a raw request body.
    ///
    /// Availability is checked before any input is looked at, and coercion
    /// finishes before the artifact is invoked.
    pub fn predict_json(&self, body: &Value) -> Result<PredictionResult, PredictError> {
        self.model.classifier()?;
        let vector = coerce::measurement_vector(body)?;
        self.predict(&vector)
    }

    /// Predicts from an already-validated vector.
    pub fn predict(&self, vector: &MeasurementVector) -> Result<PredictionResult, PredictError> {
        let classifier = self.model.classifier()?;
        let features = vector.as_slice();

        let predicted_class = classifier.predict(features)?;
        let probability = classifier.predict_proba(features)?;

        if predicted_class > 1 {
            return Err(PredictError::UnclassifiedInvocation(format!(
                "artifact returned class {}",
                predicted_class
            )));
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(PredictError::UnclassifiedInvocation(format!(
                "artifact returned probability {}",
                probability
            )));
        }

        let threshold = self.threshold.unwrap_or_else(|| classifier.decision_threshold());
        let risk_tier = threshold.classify(probability);

        debug!(
            predicted_class,
            probability,
            risk_tier = risk_tier.as_str(),
            "Prediction complete"
        );

        Ok(PredictionResult { predicted_class, probability, risk_tier })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyco_core::{Classifier, ClassifierError, RiskTier};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Classifier returning a fixed probability and counting invocations.
    struct Stub {
        class: u8,
        probability: f64,
        calls: Arc<AtomicUsize>,
    }

    impl Stub {
        fn with_probability(probability: f64) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Self {
                class: u8::from(probability >= 0.5),
                probability,
                calls: calls.clone(),
            };
            (stub, calls)
        }
    }

    impl Classifier for Stub {
        fn predict(&self, _features: &[f64]) -> Result<u8, ClassifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.class)
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<f64, ClassifierError> {
            Ok(self.probability)
        }
    }

    struct Broken;

    impl Classifier for Broken {
        fn predict(&self, _features: &[f64]) -> Result<u8, ClassifierError> {
            Err(ClassifierError::Failed("matrix is singular".into()))
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<f64, ClassifierError> {
            Err(ClassifierError::Failed("matrix is singular".into()))
        }
    }

    fn handler(probability: f64) -> (InferenceHandler, Arc<AtomicUsize>) {
        let (stub, calls) = Stub::with_probability(probability);
        (InferenceHandler::new(ModelHandle::ready(stub)), calls)
    }

    fn scenario_body() -> Value {
        json!({
            "pregnancies": 6,
            "glucose": 148,
            "bloodPressure": 72,
            "skinThickness": 35,
            "insulin": 0,
            "bmi": 33.6,
            "dpf": 0.627,
            "age": 50
        })
    }

    #[test]
    fn test_tier_from_stubbed_probability() {
        for (probability, expected) in [
            (0.56, RiskTier::High),
            (0.54, RiskTier::Low),
            (0.55, RiskTier::High),
        ] {
            let (h, _) = handler(probability);
            let result = h.predict_json(&scenario_body()).unwrap();
            assert_eq!(result.risk_tier, expected, "probability {probability}");
            assert_eq!(result.probability, probability);
        }
    }

    #[test]
    fn test_invalid_input_never_invokes_artifact() {
        let (h, calls) = handler(0.9);
        let mut body = scenario_body();
        body["glucose"] = json!("abc");

        let err = h.predict_json(&body).unwrap_err();
        assert_eq!(err.field(), Some("glucose"));
        assert!(matches!(err, PredictError::InputValidation { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unavailable_model_rejects_before_input() {
        let h = InferenceHandler::new(ModelHandle::unavailable("Model not found"));

        let err = h.predict_json(&scenario_body()).unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));

        // Even garbage input reports unavailability, not a validation error.
        let err = h.predict_json(&json!("garbage")).unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));
    }

    #[test]
    fn test_invocation_failure_is_unclassified() {
        let h = InferenceHandler::new(ModelHandle::ready(Broken));
        let err = h.predict_json(&scenario_body()).unwrap_err();
        assert!(matches!(err, PredictError::UnclassifiedInvocation(_)));
    }

    #[test]
    fn test_out_of_range_probability_is_unclassified() {
        let (h, _) = handler(1.4);
        let err = h.predict_json(&scenario_body()).unwrap_err();
        assert!(matches!(err, PredictError::UnclassifiedInvocation(_)));

        let (h, _) = handler(f64::NAN);
        assert!(h.predict_json(&scenario_body()).is_err());
    }

    #[test]
    fn test_idempotent() {
        let (h, calls) = handler(0.62);
        let a = h.predict_json(&scenario_body()).unwrap();
        let b = h.predict_json(&scenario_body()).unwrap();
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_threshold_override() {
        let (h, _) = handler(0.6);
        let h = h.with_threshold(RiskThreshold::new(0.65).unwrap());
        assert_eq!(h.predict_json(&scenario_body()).unwrap().risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_probability_always_in_unit_interval() {
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            let (h, _) = handler(p);
            let result = h.predict_json(&scenario_body()).unwrap();
            assert!((0.0..=1.0).contains(&result.probability));
            assert_eq!(result.risk_tier == RiskTier::High, result.probability >= 0.55);
        }
    }
}

//! Runs the inference handler against a stubbed classifier.
//!
//! Run with: cargo run --example stub_classifier

use glyco::prelude::*;
use serde_json::json;

/// Always answers with the same probability.
struct Fixed(f64);

impl Classifier for Fixed {
    fn predict(&self, _features: &[f64]) -> Result<u8, ClassifierError> {
        Ok(u8::from(self.0 >= 0.5))
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<f64, ClassifierError> {
        Ok(self.0)
    }
}

fn main() {
    let body = json!({
        "pregnancies": 6,
        "glucose": "148",
        "bloodPressure": 72,
        "skinThickness": 35,
        "insulin": 0,
        "bmi": 33.6,
        "dpf": 0.627,
        "age": 50
    });

    for probability in [0.54, 0.55, 0.56, 0.72] {
        let handler = InferenceHandler::new(ModelHandle::ready(Fixed(probability)));
        match handler.predict_json(&body) {
            Ok(result) => {
                let advice = HealthAdvice::for_probability(result.probability);
                println!(
                    "p={:.2} -> {} risk: {}",
                    probability,
                    result.risk_tier.as_str(),
                    advice.headline
                );
            }
            Err(e) => eprintln!("p={:.2} -> {}", probability, e),
        }
    }

    // A bad field is reported by name and never reaches the classifier.
    let handler = InferenceHandler::new(ModelHandle::ready(Fixed(0.9)));
    let mut bad = body.clone();
    bad["glucose"] = json!("abc");
    if let Err(e) = handler.predict_json(&bad) {
        println!("rejected: {}", e);
    }
}

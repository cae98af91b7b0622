use glyco_core::{PredictionResult, RiskTier};
use glyco_model::ModelStatus;
use serde::{Deserialize, Serialize};

// === HTTP DTOs ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: u8,
    /// Percentage, one decimal place.
    pub probability: f64,
    pub risk_level: RiskTier,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            prediction: result.predicted_class,
            probability: result.probability_percent(),
            risk_level: result.risk_tier,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    #[serde(flatten)]
    pub status: ModelStatus,
    pub model_path: String,
}

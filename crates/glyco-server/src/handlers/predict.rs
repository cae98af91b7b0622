//! Prediction HTTP handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use glyco_core::PredictError;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::dto::PredictResponse;
use crate::error::AppError;
use crate::services::prediction as prediction_service;
use crate::ServerState;

/// POST /predict - Classifies one set of measurements.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let payload = payload.map(|Json(body)| body);

    let result = prediction_service::predict(&state, payload).map_err(|e| {
        match &e {
            PredictError::InputValidation { .. } => warn!("Rejected prediction input: {}", e),
            PredictError::ModelUnavailable(reason) => error!("Model unavailable: {}", reason),
            PredictError::UnclassifiedInvocation(detail) => error!("Prediction failed: {}", detail),
        }
        AppError::from(e)
    })?;

    info!(
        "Prediction: class {} at {:.3} ({} risk)",
        result.predicted_class,
        result.probability,
        result.risk_tier.as_str()
    );
    Ok(Json(PredictResponse::from(result)))
}

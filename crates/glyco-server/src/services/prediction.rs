//! Prediction service: runs the handler and records request metrics.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use glyco_core::{PredictError, PredictionResult};
use glyco_monitor::{MetricsCollector, Outcome, PredictionRecord};
use serde_json::Value;

use crate::ServerState;

/// Runs one prediction. A body that failed to parse is only reported once the
/// model is known to be available.
pub fn predict(
    state: &ServerState,
    payload: Result<Value, JsonRejection>,
) -> Result<PredictionResult, PredictError> {
    let started = Instant::now();

    let result = match payload {
        Ok(body) => state.handler.predict_json(&body),
        Err(rejection) => state
            .handler
            .model()
            .classifier()
            .and_then(|_| Err(PredictError::invalid("body", rejection.body_text()))),
    };

    let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    state.metrics.record(PredictionRecord { outcome: Outcome::from_result(&result), elapsed_us });

    result
}

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::ModelResponse;
use crate::ServerState;

/// GET /api/model - Describes the loaded artifact or why it is missing.
pub async fn describe(State(state): State<Arc<ServerState>>) -> Json<ModelResponse> {
    Json(ModelResponse {
        status: state.handler.model().status(),
        model_path: state.config.model_path.display().to_string(),
    })
}

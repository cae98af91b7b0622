use std::sync::Arc;

use axum::{extract::State, Json};
use glyco_monitor::{MetricsCollector, MetricsSummary};

use crate::ServerState;

/// GET /api/metrics/summary - Get aggregate request metrics.
pub async fn summary(State(state): State<Arc<ServerState>>) -> Json<MetricsSummary> {
    Json(state.metrics.summary())
}

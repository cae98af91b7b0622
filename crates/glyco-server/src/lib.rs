//! HTTP surface for glyco: `POST /predict` plus operator endpoints.

pub mod dto;
pub mod error;
mod handlers;
mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use glyco_config::ServiceConfig;
use glyco_engine::InferenceHandler;
use glyco_model::ModelHandle;
use glyco_monitor::InMemoryCollector;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct ServerState {
    pub handler: InferenceHandler,
    pub metrics: InMemoryCollector,
    pub config: ServiceConfig,
}

impl ServerState {
    /// Loads the artifact named by `config`. A failed load leaves the server
    /// up with predictions disabled.
    pub fn from_config(config: ServiceConfig) -> Self {
        let model = ModelHandle::load(&config.model_path);
        Self::new(InferenceHandler::new(model), config)
    }

    pub fn new(handler: InferenceHandler, config: ServiceConfig) -> Self {
        Self { handler, metrics: InMemoryCollector::new(), config }
    }
}

/// Builds the application router.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                request_id = %uuid::Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/api/model", get(handlers::model::describe))
        .route("/api/metrics/summary", get(handlers::metrics::summary))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

//! HTTP route handlers for the prediction server.

pub mod metrics;
pub mod model;
pub mod predict;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

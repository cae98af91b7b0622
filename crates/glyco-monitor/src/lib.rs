//! Request metrics collection for glyco surfaces.

use std::sync::Mutex;

use glyco_core::{PredictError, PredictionResult, RiskTier};
use serde::{Deserialize, Serialize};

/// How a single prediction request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HighRisk,
    LowRisk,
    InvalidInput,
    ModelUnavailable,
    Failed,
}

impl Outcome {
    pub fn from_result(result: &Result<PredictionResult, PredictError>) -> Self {
        match result {
            Ok(r) if r.risk_tier == RiskTier::High => Outcome::HighRisk,
            Ok(_) => Outcome::LowRisk,
            Err(PredictError::InputValidation { .. }) => Outcome::InvalidInput,
            Err(PredictError::ModelUnavailable(_)) => Outcome::ModelUnavailable,
            Err(PredictError::UnclassifiedInvocation(_)) => Outcome::Failed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::HighRisk => "high_risk",
            Outcome::LowRisk => "low_risk",
            Outcome::InvalidInput => "invalid_input",
            Outcome::ModelUnavailable => "model_unavailable",
            Outcome::Failed => "failed",
        }
    }
}

/// Metrics for one request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub outcome: Outcome,
    /// Time spent in the handler, in microseconds.
    pub elapsed_us: u64,
}

/// Aggregate counters over all recorded requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_requests: u64,
    pub high_risk: u64,
    pub low_risk: u64,
    pub invalid_input: u64,
    pub model_unavailable: u64,
    pub failed: u64,
    /// Mean handler latency in microseconds, 0 when nothing was recorded.
    pub mean_latency_us: u64,
}

/// Trait for metrics collectors.
pub trait MetricsCollector: Send + Sync {
    /// Record one finished request.
    fn record(&self, record: PredictionRecord);
    /// Aggregate everything recorded so far.
    fn summary(&self) -> MetricsSummary;
    /// Drop all recorded requests.
    fn reset(&self);
}

#[derive(Debug, Default)]
struct Totals {
    summary: MetricsSummary,
    total_latency_us: u64,
}

/// In-memory metrics collector (default implementation).
#[derive(Debug, Default)]
pub struct InMemoryCollector {
    totals: Mutex<Totals>,
}

impl InMemoryCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsCollector for InMemoryCollector {
    fn record(&self, record: PredictionRecord) {
        let Ok(mut guard) = self.totals.lock() else {
            tracing::warn!("Failed to acquire metrics lock");
            return;
        };
        tracing::debug!(
            outcome = record.outcome.as_str(),
            elapsed_us = record.elapsed_us,
            "Recorded prediction metrics"
        );

        let totals = &mut *guard;
        totals.total_latency_us = totals.total_latency_us.saturating_add(record.elapsed_us);

        let s = &mut totals.summary;
        s.total_requests += 1;
        match record.outcome {
            Outcome::HighRisk => s.high_risk += 1,
            Outcome::LowRisk => s.low_risk += 1,
            Outcome::InvalidInput => s.invalid_input += 1,
            Outcome::ModelUnavailable => s.model_unavailable += 1,
            Outcome::Failed => s.failed += 1,
        }
        s.mean_latency_us = totals.total_latency_us / s.total_requests;
    }

    fn summary(&self) -> MetricsSummary {
        let Ok(guard) = self.totals.lock() else {
            return MetricsSummary::default();
        };
        guard.summary.clone()
    }

    fn reset(&self) {
        let Ok(mut guard) = self.totals.lock() else {
            return;
        };
        *guard = Totals::default();
    }
}

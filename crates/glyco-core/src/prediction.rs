//! Prediction results and the risk threshold that tiers them.

use serde::{Deserialize, Serialize};

/// Discrete risk category derived from the positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::High => "High",
        }
    }
}

/// Probability cut-off between [`RiskTier::Low`] and [`RiskTier::High`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThreshold(f64);

impl RiskThreshold {
    /// Cut-off the bundled artifacts were calibrated for.
    pub const DEFAULT: f64 = 0.55;

    /// Returns `None` unless `value` is a finite probability.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// High iff `probability >= threshold`.
    pub fn classify(&self, probability: f64) -> RiskTier {
        if probability >= self.0 {
            RiskTier::High
        } else {
            RiskTier::Low
        }
    }
}

impl Default for RiskThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Outcome of one inference request. Built fresh per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 0 = no diabetes, 1 = diabetes.
    pub predicted_class: u8,
    /// Positive-class probability in `[0, 1]`.
    pub probability: f64,
    pub risk_tier: RiskTier,
}

impl PredictionResult {
    /// Probability as a percentage rounded to one decimal place.
    pub fn probability_percent(&self) -> f64 {
        (self.probability * 1000.0).round() / 10.0
    }
}

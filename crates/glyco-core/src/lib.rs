//! Core domain types and error definitions for glyco.
//!
//! This crate provides the fundamental types shared across the glyco workspace:
//!
//! - [`Measurement`] and [`MeasurementVector`]: the eight clinical inputs in artifact order
//! - [`PredictionResult`], [`RiskTier`] and [`RiskThreshold`]: what a prediction yields
//! - [`PredictError`]: the error taxonomy every surface maps to its own responses
//! - [`Classifier`]: the seam behind which the trained artifact lives
//! - [`HealthAdvice`]: probability bands with textual suggestions
//!
//! # Example
//!
//! ```rust
//! use glyco_core::{Measurement, MeasurementVector, RiskThreshold, RiskTier};
//!
//! let vector = MeasurementVector::new([6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0]).unwrap();
//! assert_eq!(vector.get(Measurement::Glucose), 148.0);
//!
//! let threshold = RiskThreshold::default();
//! assert_eq!(threshold.classify(0.55), RiskTier::High);
//! assert_eq!(threshold.classify(0.54), RiskTier::Low);
//! ```

mod advice;
mod measurement;
mod prediction;

pub use advice::{AdviceBand, HealthAdvice};
pub use measurement::{FieldBounds, Measurement, MeasurementVector, FEATURE_COUNT};
pub use prediction::{PredictionResult, RiskThreshold, RiskTier};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a prediction request can end in.
///
/// Every surface converts these at its boundary; none of them is allowed to
/// take the process down.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The classification artifact was absent or failed to load at startup.
    #[error("Model not available: {0}")]
    ModelUnavailable(String),

    /// A field was missing or could not be coerced to a finite number.
    #[error("Invalid value for '{field}': {reason}")]
    InputValidation { field: String, reason: String },

    /// The artifact failed during invocation or returned an unusable answer.
    #[error("Prediction failed: {0}")]
    UnclassifiedInvocation(String),
}

impl PredictError {
    /// Creates an InputValidation error for the named field.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PredictError::InputValidation { field: field.into(), reason: reason.into() }
    }

    /// Field named by an InputValidation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            PredictError::InputValidation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Errors raised from inside a [`Classifier`] implementation.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The feature slice does not have the width the artifact was fitted on.
    #[error("feature vector has {got} values, expected {expected}")]
    Shape { expected: usize, got: usize },

    /// Anything else that went wrong inside the artifact.
    #[error("{0}")]
    Failed(String),
}

impl From<ClassifierError> for PredictError {
    fn from(err: ClassifierError) -> Self {
        PredictError::UnclassifiedInvocation(err.to_string())
    }
}

/// Summary of a loaded artifact, as shown to operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Artifact name.
    pub name: String,
    /// Training column names in the order the artifact consumes them.
    pub feature_names: Vec<String>,
    /// Probability at or above which a result is High risk.
    pub decision_threshold: f64,
}

/// A trained binary classifier exposing a class label and a positive-class
/// probability.
///
/// Implementations are loaded once and shared read-only across requests.
pub trait Classifier: Send + Sync {
    /// Predicted class: 0 (no diabetes) or 1 (diabetes).
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError>;

    /// Probability of the positive class.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ClassifierError>;

    /// Threshold the artifact's risk tiers are cut at.
    fn decision_threshold(&self) -> RiskThreshold {
        RiskThreshold::default()
    }

    fn describe(&self) -> ModelInfo {
        ModelInfo {
            name: "unnamed".to_string(),
            feature_names: Measurement::ORDER.iter().map(|m| m.column().to_string()).collect(),
            decision_threshold: self.decision_threshold().value(),
        }
    }
}

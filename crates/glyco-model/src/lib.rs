//! Classification artifact loading for glyco.
//!
//! Artifacts are JSON documents describing a standardized logistic regression
//! fitted on the eight measurements. Loading validates shape and feature order
//! up front, so a mismatched artifact is rejected at startup instead of
//! producing silently wrong predictions.

mod handle;

pub use handle::{ModelHandle, ModelStatus};

use std::fs;
use std::path::Path;

use glyco_core::{Classifier, ClassifierError, Measurement, ModelInfo, RiskThreshold, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// Artifact layout revision this crate reads.
pub const FORMAT_VERSION: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported artifact format version: {0}")]
    UnsupportedVersion(u32),

    #[error("{section} has {got} values, expected {expected}")]
    Shape { section: &'static str, expected: usize, got: usize },

    #[error("Feature {index} is '{found}', expected '{expected}'")]
    FeatureOrder { index: usize, expected: &'static str, found: String },

    #[error("Invalid {section}: {reason}")]
    Invalid { section: &'static str, reason: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Document Schema
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// On-disk artifact layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactDocument {
    pub format_version: u32,
    pub name: String,
    pub feature_names: Vec<String>,
    pub scaler: ScalerParams,
    pub classifier: LogisticParams,
    #[serde(default = "default_threshold")]
    pub decision_threshold: f64,
}

fn default_threshold() -> f64 {
    RiskThreshold::DEFAULT
}

// ─────────────────────────────────────────────────────────────────────────────
// Logistic Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Standard scaler followed by logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticPipeline {
    name: String,
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    threshold: RiskThreshold,
}

impl LogisticPipeline {
    /// Reads and validates an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ArtifactError> {
        let doc: ArtifactDocument = serde_json::from_str(content)?;
        Self::from_document(doc)
    }

    pub fn from_document(doc: ArtifactDocument) -> Result<Self, ArtifactError> {
        if doc.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(doc.format_version));
        }

        check_feature_order(&doc.feature_names)?;

        let mean = fixed("scaler.mean", doc.scaler.mean)?;
        let scale = fixed("scaler.scale", doc.scaler.scale)?;
        let coefficients = fixed("classifier.coefficients", doc.classifier.coefficients)?;

        if let Some(i) = scale.iter().position(|s| *s == 0.0) {
            return Err(ArtifactError::Invalid {
                section: "scaler.scale",
                reason: format!("zero scale for {}", Measurement::ORDER[i].column()),
            });
        }

        if !doc.classifier.intercept.is_finite() {
            return Err(ArtifactError::Invalid {
                section: "classifier.intercept",
                reason: "intercept must be finite".into(),
            });
        }

        let threshold = RiskThreshold::new(doc.decision_threshold).ok_or_else(|| {
            ArtifactError::Invalid {
                section: "decision_threshold",
                reason: format!("{} is not a probability", doc.decision_threshold),
            }
        })?;

        Ok(Self {
            name: doc.name,
            mean,
            scale,
            coefficients,
            intercept: doc.classifier.intercept,
            threshold,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Log-odds of the positive class.
    fn decision_function(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        if features.len() != FEATURE_COUNT {
            return Err(ClassifierError::Shape { expected: FEATURE_COUNT, got: features.len() });
        }

        let z = features
            .iter()
            .enumerate()
            .map(|(i, x)| self.coefficients[i] * (x - self.mean[i]) / self.scale[i])
            .sum::<f64>()
            + self.intercept;

        if !z.is_finite() {
            return Err(ClassifierError::Failed("decision function is not finite".into()));
        }
        Ok(z)
    }
}

impl Classifier for LogisticPipeline {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        let z = self.decision_function(features)?;
        Ok(u8::from(z >= 0.0))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        self.decision_function(features).map(sigmoid)
    }

    fn decision_threshold(&self) -> RiskThreshold {
        self.threshold
    }

    fn describe(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            feature_names: Measurement::ORDER.iter().map(|m| m.column().to_string()).collect(),
            decision_threshold: self.threshold.value(),
        }
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn check_feature_order(names: &[String]) -> Result<(), ArtifactError> {
    if names.len() != FEATURE_COUNT {
        return Err(ArtifactError::Shape {
            section: "feature_names",
            expected: FEATURE_COUNT,
            got: names.len(),
        });
    }

    for (index, (m, found)) in Measurement::ORDER.iter().zip(names).enumerate() {
        if m.column() != found.as_str() {
            return Err(ArtifactError::FeatureOrder {
                index,
                expected: m.column(),
                found: found.clone(),
            });
        }
    }
    Ok(())
}

fn fixed(section: &'static str, values: Vec<f64>) -> Result<[f64; FEATURE_COUNT], ArtifactError> {
    let got = values.len();
    let array: [f64; FEATURE_COUNT] = values
        .try_into()
        .map_err(|_| ArtifactError::Shape { section, expected: FEATURE_COUNT, got })?;

    if array.iter().any(|v| !v.is_finite()) {
        return Err(ArtifactError::Invalid { section, reason: "values must be finite".into() });
    }
    Ok(array)
}

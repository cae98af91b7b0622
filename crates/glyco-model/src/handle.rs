//! Process-wide handle to the loaded artifact.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use glyco_core::{Classifier, ModelInfo, PredictError};
use serde::Serialize;
use tracing::{info, warn};

use crate::LogisticPipeline;

/// Either a ready classifier or the reason it could not be loaded.
///
/// Built once at startup and injected into whoever runs inference. A failed
/// load is permanent for the process; there is no reload.
#[derive(Clone)]
pub enum ModelHandle {
    Ready(Arc<dyn Classifier>),
    Unavailable { reason: String },
}

impl ModelHandle {
    /// Loads the artifact at `path`, degrading to [`ModelHandle::Unavailable`]
    /// on any failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match LogisticPipeline::load(path) {
            Ok(pipeline) => {
                info!(
                    "Loaded model '{}' from {} (threshold {})",
                    pipeline.name(),
                    path.display(),
                    pipeline.decision_threshold().value()
                );
                Self::Ready(Arc::new(pipeline))
            }
            Err(e) => {
                warn!("Model unavailable, predictions disabled: {} ({})", e, path.display());
                Self::Unavailable { reason: e.to_string() }
            }
        }
    }

    pub fn ready(classifier: impl Classifier + 'static) -> Self {
        Self::Ready(Arc::new(classifier))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The classifier, or `ModelUnavailable` if loading failed.
    pub fn classifier(&self) -> Result<&dyn Classifier, PredictError> {
        match self {
            Self::Ready(classifier) => Ok(classifier.as_ref()),
            Self::Unavailable { reason } => Err(PredictError::ModelUnavailable(reason.clone())),
        }
    }

    pub fn status(&self) -> ModelStatus {
        match self {
            Self::Ready(classifier) => ModelStatus {
                status: "ready",
                info: Some(classifier.describe()),
                reason: None,
            },
            Self::Unavailable { reason } => ModelStatus {
                status: "unavailable",
                info: None,
                reason: Some(reason.clone()),
            },
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(classifier) => f
                .debug_tuple("Ready")
                .field(&classifier.describe().name)
                .finish(),
            Self::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}

/// Operator-facing view of a [`ModelHandle`].
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub status: &'static str,
    #[serde(flatten)]
    pub info: Option<ModelInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_document;
    use std::fs;

    fn write_artifact(tag: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("glyco-model-{}-{}.json", tag, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_ready() {
        let content = serde_json::to_string(&sample_document()).unwrap();
        let path = write_artifact("ready", &content);

        let handle = ModelHandle::load(&path);
        assert!(handle.is_ready());
        assert!(handle.classifier().is_ok());

        let status = handle.status();
        assert_eq!(status.status, "ready");
        assert_eq!(status.info.map(|i| i.name), Some("test-logreg".to_string()));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let handle = ModelHandle::load("/nonexistent/glyco/final_model.json");
        assert!(!handle.is_ready());

        let err = handle.classifier().err().unwrap();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));
        assert_eq!(handle.status().status, "unavailable");
    }

    #[test]
    fn test_malformed_file_is_unavailable() {
        let path = write_artifact("malformed", "{\"format_version\": 1");
        let handle = ModelHandle::load(&path);
        assert!(!handle.is_ready());
        assert!(handle.status().reason.unwrap().contains("parse"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_status_json_shape() {
        let json = serde_json::to_value(ModelHandle::unavailable("gone").status()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "unavailable", "reason": "gone" }));
    }
}

//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glyco_core::PredictError;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unavailable(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Validation messages go back verbatim; the other two are replaced with a
/// fixed message and only logged in full.
impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::InputValidation { .. } => AppError::BadRequest(e.to_string()),
            PredictError::ModelUnavailable(_) => AppError::Unavailable("Model not found".into()),
            PredictError::UnclassifiedInvocation(_) => {
                AppError::Internal("Prediction failed".into())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (AppError::BadRequest(message)
        | AppError::Unavailable(message)
        | AppError::Internal(message)) = self;
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_status_codes() {
        let cases = [
            (PredictError::invalid("glucose", "bad"), StatusCode::BAD_REQUEST),
            (PredictError::ModelUnavailable("no file".into()), StatusCode::SERVICE_UNAVAILABLE),
            (
                PredictError::UnclassifiedInvocation("nan".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let AppError::Internal(message) =
            AppError::from(PredictError::UnclassifiedInvocation("/opt/model.json: nan".into()))
        else {
            panic!("expected Internal");
        };
        assert!(!message.contains("/opt"));
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure mode of the generation pipeline maps to exactly one variant;
/// a request never fails with an unlabelled error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad upload shape, type, or size.
    #[error("Validation error: {0}")]
    Validation(String),

    /// PDF text extraction failed or produced no text.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The generative-model credential is not configured.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model call failed or returned no text.
    #[error("Model invocation error: {0}")]
    ModelInvocation(String),

    /// The model output could not be validated as a generated site.
    #[error("Response parse error: {0}")]
    ResponseParse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Client errors carry their message through; it describes the
            // upload, not server internals.
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Extraction(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            // Server-side failures log the detail and return a short message.
            AppError::ModelInvocation(msg) => {
                tracing::error!("Model invocation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The AI service failed to generate the portfolio. Please try again."
                        .to_string(),
                )
            }
            AppError::ResponseParse(msg) => {
                tracing::error!("Response parse error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to parse the generated code from the AI.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

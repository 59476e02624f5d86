use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Skill extraction failed: {0}")]
    Extraction(String),

    #[error("Explanation generation failed: {0}")]
    Explanation(String),

    #[error("AI service rate limited")]
    RateLimited,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps an LLM failure from the skill-extraction collaborator.
    /// Rate limiting keeps its own variant so the caller can show a
    /// distinct "try again later" message.
    pub fn from_extraction(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited => AppError::RateLimited,
            other => AppError::Extraction(other.to_string()),
        }
    }

    /// Wraps an LLM failure from the explanation collaborator.
    pub fn from_explanation(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited => AppError::RateLimited,
            other => AppError::Explanation(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(msg) => {
                tracing::error!("Skill extraction error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_ERROR",
                    "Could not extract requirements from the job description".to_string(),
                )
            }
            AppError::Explanation(msg) => {
                tracing::error!("Explanation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXPLANATION_ERROR",
                    "Could not generate candidate explanations".to_string(),
                )
            }
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "The AI service is over capacity. Please try again later.".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_llm_error_maps_to_rate_limited() {
        let err = AppError::from_extraction(LlmError::RateLimited);
        assert!(matches!(err, AppError::RateLimited));
        let err = AppError::from_explanation(LlmError::RateLimited);
        assert!(matches!(err, AppError::RateLimited));
    }

    #[test]
    fn test_other_llm_errors_keep_their_phase() {
        let err = AppError::from_extraction(LlmError::EmptyContent);
        assert!(matches!(err, AppError::Extraction(_)));
        let err = AppError::from_explanation(LlmError::EmptyContent);
        assert!(matches!(err, AppError::Explanation(_)));
    }

    #[test]
    fn test_rate_limited_response_is_429() {
        let response = AppError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_extraction_response_is_502() {
        let response = AppError::Extraction("no structured output".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

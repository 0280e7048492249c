use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecoscan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const ANALYSIS_FAILED: &str = "Failed to analyze image";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Reported as `Failed to analyze image` with the message as details.
    #[error("Failed to analyze image: {0}")]
    AnalysisFailed(String),
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingImage => ApiError::BadRequest(error.to_string()),
            CoreError::ExternalServiceError(message) => ApiError::AnalysisFailed(message),
            CoreError::MalformedResponse(_) | CoreError::InternalServerError => {
                ApiError::AnalysisFailed(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse {
                    error: message,
                    details: None,
                },
            ),
            ApiError::AnalysisFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorResponse {
                    error: ANALYSIS_FAILED.to_string(),
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            ApiError::from(CoreError::MissingImage),
            ApiError::BadRequest("No image provided".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("quota exceeded".to_string())),
            ApiError::AnalysisFailed("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_error_body_shape() {
        let bad_request = serde_json::to_value(ApiErrorResponse {
            error: "No image provided".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(bad_request, serde_json::json!({ "error": "No image provided" }));
    }
}

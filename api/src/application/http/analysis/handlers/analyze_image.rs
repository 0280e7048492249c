use axum::{body::Bytes, extract::State};
use ecoscan_core::domain::scan::{
    entities::AnalysisPayload, ports::AnalysisService, value_objects::AnalyzeImageInput,
};
use validator::Validate;

use crate::application::http::{
    analysis::validators::{AnalyzeImageRequest, validation_message},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze-image",
    tag = "analysis",
    summary = "Classify an item from an image",
    description = "Forwards the image to the multimodal model and returns a normalized waste classification",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = AnalysisPayload),
        (status = 400, body = ApiErrorResponse, description = "No image provided"),
        (status = 500, body = ApiErrorResponse, description = "Upstream model failure"),
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response<AnalysisPayload>, ApiError> {
    // body is parsed regardless of content type
    let payload: AnalyzeImageRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Failed to read analyze request body: {}", e);
        ApiError::AnalysisFailed(e.to_string())
    })?;

    payload.validate().map_err(|e| {
        tracing::warn!("Rejected analyze request: {}", e);
        ApiError::BadRequest(validation_message(&e))
    })?;

    let result = state
        .service
        .analyze_image(AnalyzeImageInput {
            image: payload.image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

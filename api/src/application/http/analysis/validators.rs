use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Upper bound on the encoded image, in characters.
pub const MAX_IMAGE_LEN: u64 = 15 * 1024 * 1024;

// keep in sync with the `validate` attribute on `AnalyzeImageRequest::image`
const _: () = assert!(MAX_IMAGE_LEN == 15_728_640);

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeImageRequest {
    /// Self-contained encoded image, e.g. a `data:image/jpeg;base64,...` URI
    #[validate(length(max = 15_728_640, message = "Image too large"))]
    pub image: Option<String>,
}

/// Message of the first failed field rule, falling back to the rendered errors.
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

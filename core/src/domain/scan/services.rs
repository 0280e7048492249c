use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    scan::{
        entities::AnalysisPayload,
        normalize::{normalize_payload, parse_model_reply, repair_payload},
        ports::{AnalysisService, LLMClient},
        prompt::{SYSTEM_PROMPT, USER_INSTRUCTION},
        schema::get_scan_analysis_schema,
        value_objects::{AnalyzeImageInput, PayloadDefaults},
    },
};

impl<LLM> AnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, input))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<AnalysisPayload, CoreError> {
        // 1. Validate
        let image = input
            .image
            .filter(|image| !image.trim().is_empty())
            .ok_or(CoreError::MissingImage)?;

        tracing::info!(image_len = image.len(), "Starting image analysis");

        // 2. Dispatch
        let raw_response = self
            .llm_client
            .generate_with_image(
                SYSTEM_PROMPT.to_string(),
                USER_INSTRUCTION.to_string(),
                image,
                get_scan_analysis_schema(),
            )
            .await?;

        tracing::debug!(raw_response = %raw_response, "Raw model reply");

        // 3. Parse, 4. Repair, 5. Normalize
        let payload = match parse_model_reply(&raw_response) {
            Some(reply) => normalize_payload(&reply, PayloadDefaults::SERVICE),
            None => {
                tracing::warn!("Model reply contained no JSON object, using repaired payload");
                repair_payload(&raw_response)
            }
        };

        tracing::info!(
            object_name = %payload.object_name,
            classification = %payload.classification,
            confidence = payload.confidence,
            "Image analysis completed"
        );

        Ok(payload)
    }
}

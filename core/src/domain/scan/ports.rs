use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{entities::AnalysisPayload, value_objects::AnalyzeImageInput},
};

/// Multimodal model capability: one image in, raw reply text out.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        system_prompt: String,
        instruction: String,
        image_url: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the image analysis endpoint
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<AnalysisPayload, CoreError>> + Send;
}

/// Client-side transport to a remote analysis service
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisGateway: Send + Sync {
    fn analyze_image(
        &self,
        image: String,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

/// Source of canned results used when remote analysis is unavailable
#[cfg_attr(test, mockall::automock)]
pub trait FallbackProvider: Send + Sync {
    fn example(&self) -> AnalysisPayload;
}

use reqwest::Client;
use serde::Serialize;

use crate::domain::{common::entities::app_errors::CoreError, scan::ports::AnalysisGateway};

/// Posts images to a remote analysis endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalysisGateway {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnalyzeImageRequest {
    image: String,
}

impl HttpAnalysisGateway {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze_image(&self, image: String) -> Result<serde_json::Value, CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeImageRequest { image })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Analysis service request failed: {}", e);
                CoreError::ExternalServiceError(format!("Analysis service unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Analysis service error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Analysis service returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse analysis response: {}", e);
            CoreError::MalformedResponse(e.to_string())
        })
    }
}

use serde_json::Value;
use tracing::instrument;

use crate::domain::scan::{
    entities::ScanResult,
    history::ScanHistory,
    normalize::normalize_payload,
    ports::{AnalysisGateway, FallbackProvider},
    value_objects::{ImageData, PayloadDefaults},
};

/// Requests an analysis for one image and always produces a displayable
/// result. Single attempt, no retries.
pub struct ScanClient<G, F>
where
    G: AnalysisGateway,
    F: FallbackProvider,
{
    gateway: G,
    fallback: F,
}

impl<G, F> ScanClient<G, F>
where
    G: AnalysisGateway,
    F: FallbackProvider,
{
    pub fn new(gateway: G, fallback: F) -> Self {
        Self { gateway, fallback }
    }

    #[instrument(skip_all)]
    pub async fn request_analysis(&self, image: ImageData) -> ScanResult {
        let image = image.into_inner();

        let payload = match self.gateway.analyze_image(image.clone()).await {
            Ok(Value::Object(reply)) => normalize_payload(&reply, PayloadDefaults::CLIENT),
            Ok(other) => {
                tracing::warn!(
                    "Analysis service returned a non-object body ({}), using fallback result",
                    json_kind(&other)
                );
                self.fallback.example()
            }
            Err(e) => {
                tracing::warn!("Analysis request failed, using fallback result: {}", e);
                self.fallback.example()
            }
        };

        ScanResult::new(image, payload)
    }

    /// Analyzes an image and records the result in the session history.
    pub async fn scan(&self, image: ImageData, history: &ScanHistory) -> ScanResult {
        let result = self.request_analysis(image).await;
        history.record(result.clone());
        result
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        scan::{
            catalog::{FallbackCatalog, FixedSelector},
            entities::Classification,
            ports::MockAnalysisGateway,
        },
    };

    const IMAGE: &str = "data:image/png;base64,iVBORw0KGgo";

    fn gateway_returning(
        response: Result<Value, CoreError>,
    ) -> MockAnalysisGateway {
        let mut gateway = MockAnalysisGateway::new();
        gateway
            .expect_analyze_image()
            .times(1)
            .returning(move |_| {
                let response = response.clone();
                Box::pin(async move { response })
            });
        gateway
    }

    fn assert_fully_populated(result: &ScanResult) {
        assert!(!result.object_name.trim().is_empty());
        assert!(Classification::ALL.contains(&result.classification));
        assert!(result.confidence <= 100);
        assert!(!result.environmental_impact.carbon_footprint.is_empty());
        assert!(!result.environmental_impact.recyclability.is_empty());
        assert!(!result.environmental_impact.biodegradability.is_empty());
        assert_eq!(result.image, IMAGE);
    }

    #[tokio::test]
    async fn test_successful_response_is_mapped() {
        let gateway = gateway_returning(Ok(json!({
            "objectName": "Aluminum Can",
            "classification": "recyclable",
            "confidence": 93,
            "materials": ["Aluminum"],
            "environmentalImpact": {
                "carbonFootprint": "Medium",
                "recyclability": "Very High",
                "biodegradability": "Never"
            },
            "disposalTips": ["Rinse it"],
            "reuseSuggestions": [],
            "educationalFacts": ["Infinitely recyclable"],
            "id": "not-a-local-id",
            "timestamp": "1999-01-01T00:00:00Z"
        })));
        let client = ScanClient::new(gateway, FallbackCatalog::new());

        let result = client.request_analysis(ImageData::new(IMAGE)).await;

        assert_fully_populated(&result);
        assert_eq!(result.object_name, "Aluminum Can");
        assert_eq!(result.classification, Classification::Recyclable);
        assert_eq!(result.confidence, 93);
        assert_eq!(result.materials, vec!["Aluminum"]);
        assert!(result.reuse_suggestions.is_empty());
        assert!(result.timestamp.timestamp() > 946_684_800);
    }

    #[tokio::test]
    async fn test_sparse_response_gets_client_defaults() {
        let gateway = gateway_returning(Ok(json!({ "classification": "landfill" })));
        let client = ScanClient::new(gateway, FallbackCatalog::new());

        let result = client.request_analysis(ImageData::new(IMAGE)).await;

        assert_fully_populated(&result);
        assert_eq!(result.object_name, "Unknown Object");
        assert_eq!(result.classification, Classification::NonRecyclable);
        assert_eq!(result.environmental_impact.recyclability, "Unknown");
        assert!(result.materials.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_error_falls_back_to_catalog() {
        let gateway = gateway_returning(Err(CoreError::ExternalServiceError(
            "connection refused".to_string(),
        )));
        let catalog = FallbackCatalog::with_selector(FixedSelector(2));
        let expected = catalog.example();
        let client = ScanClient::new(gateway, catalog);

        let result = client.request_analysis(ImageData::new(IMAGE)).await;

        assert_fully_populated(&result);
        assert_eq!(result.object_name, expected.object_name);
        assert_eq!(result.classification, expected.classification);
        assert_eq!(result.educational_facts, expected.educational_facts);
    }

    #[tokio::test]
    async fn test_non_object_body_falls_back() {
        let gateway = gateway_returning(Ok(json!(["not", "an", "object"])));
        let client = ScanClient::new(gateway, FallbackCatalog::with_selector(FixedSelector(0)));

        let result = client.request_analysis(ImageData::new(IMAGE)).await;
        assert_eq!(result.object_name, "Plastic Water Bottle");
    }

    #[tokio::test]
    async fn test_each_result_gets_a_fresh_id() {
        let mut gateway = MockAnalysisGateway::new();
        gateway
            .expect_analyze_image()
            .times(2)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        let client = ScanClient::new(gateway, FallbackCatalog::with_selector(FixedSelector(1)));

        let first = client.request_analysis(ImageData::new(IMAGE)).await;
        let second = client.request_analysis(ImageData::new(IMAGE)).await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_scan_records_into_history() {
        let gateway = gateway_returning(Ok(json!({ "objectName": "Paper Bag" })));
        let client = ScanClient::new(gateway, FallbackCatalog::new());
        let history = ScanHistory::new();

        let result = client.scan(ImageData::new(IMAGE), &history).await;

        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(result));
    }
}

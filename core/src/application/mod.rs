use crate::{
    domain::{
        common::{EcoScanConfig, services::Service},
        scan::{catalog::FallbackCatalog, client::ScanClient},
    },
    infrastructure::{llm::OpenAILLMClient, scan_gateway::HttpAnalysisGateway},
};

pub type EcoScanService = Service<OpenAILLMClient>;

pub type EcoScanClient = ScanClient<HttpAnalysisGateway, FallbackCatalog>;

pub fn create_service(config: EcoScanConfig) -> EcoScanService {
    if config.llm.openai_api_key.is_empty() {
        tracing::warn!("No OpenAI API key configured, upstream calls will be rejected");
    }

    Service::new(OpenAILLMClient::new(config.llm))
}

pub fn create_scan_client(endpoint: String) -> EcoScanClient {
    ScanClient::new(HttpAnalysisGateway::new(endpoint), FallbackCatalog::new())
}

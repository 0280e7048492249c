pub mod llm;
pub mod scan_gateway;

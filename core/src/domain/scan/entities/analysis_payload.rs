use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::entities::Classification;

/// Qualitative impact labels. Free-form, e.g. "Low" .. "Very High" or "Never".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    pub carbon_footprint: String,
    pub recyclability: String,
    pub biodegradability: String,
}

impl EnvironmentalImpact {
    pub fn new(carbon_footprint: &str, recyclability: &str, biodegradability: &str) -> Self {
        Self {
            carbon_footprint: carbon_footprint.to_string(),
            recyclability: recyclability.to_string(),
            biodegradability: biodegradability.to_string(),
        }
    }
}

/// Body returned by the analysis endpoint on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub object_name: String,
    pub classification: Classification,
    #[schema(minimum = 0, maximum = 100)]
    pub confidence: u8,
    pub materials: Vec<String>,
    pub environmental_impact: EnvironmentalImpact,
    pub disposal_tips: Vec<String>,
    pub reuse_suggestions: Vec<String>,
    pub educational_facts: Vec<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    scan::entities::{AnalysisPayload, Classification, EnvironmentalImpact},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub id: Uuid,
    pub image: String,
    pub object_name: String,
    pub classification: Classification,
    pub confidence: u8,
    pub materials: Vec<String>,
    pub environmental_impact: EnvironmentalImpact,
    pub disposal_tips: Vec<String>,
    pub reuse_suggestions: Vec<String>,
    pub educational_facts: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl ScanResult {
    /// Finalizes a payload into a result. Id and timestamp are always local.
    pub fn new(image: String, payload: AnalysisPayload) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            image,
            object_name: payload.object_name,
            classification: payload.classification,
            confidence: payload.confidence,
            materials: payload.materials,
            environmental_impact: payload.environmental_impact,
            disposal_tips: payload.disposal_tips,
            reuse_suggestions: payload.reuse_suggestions,
            educational_facts: payload.educational_facts,
            timestamp: now,
        }
    }
}

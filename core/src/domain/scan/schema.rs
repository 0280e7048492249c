use serde_json::json;

/// Returns the JSON schema for scan analysis replies
pub fn get_scan_analysis_schema() -> serde_json::Value {
    let rating_scale = json!(["Very Low", "Low", "Medium", "High", "Very High"]);
    let string_list = json!({
        "type": "array",
        "items": { "type": "string" }
    });

    json!({
        "type": "object",
        "properties": {
            "objectName": { "type": "string" },
            "classification": {
                "type": "string",
                "enum": ["reusable", "recyclable", "non-recyclable"]
            },
            "confidence": { "type": "integer", "minimum": 0, "maximum": 100 },
            "materials": string_list,
            "environmentalImpact": {
                "type": "object",
                "properties": {
                    "carbonFootprint": { "type": "string", "enum": rating_scale },
                    "recyclability": { "type": "string", "enum": rating_scale },
                    "biodegradability": {
                        "type": "string",
                        "enum": ["Never", "Very Low", "Low", "Medium", "High", "Very High"]
                    }
                },
                "required": ["carbonFootprint", "recyclability", "biodegradability"]
            },
            "disposalTips": string_list,
            "reuseSuggestions": string_list,
            "educationalFacts": string_list
        },
        "required": [
            "objectName", "classification", "confidence", "materials",
            "environmentalImpact", "disposalTips", "reuseSuggestions", "educationalFacts"
        ]
    })
}

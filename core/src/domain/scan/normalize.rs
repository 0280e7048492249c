use serde_json::{Map, Value};

use crate::domain::scan::{
    entities::{AnalysisPayload, Classification, EnvironmentalImpact},
    value_objects::{DEFAULT_CONFIDENCE, PayloadDefaults},
};

/// Maximum number of characters of the raw reply kept in a repaired payload.
pub const REPLY_EXCERPT_CHARS: usize = 150;

/// Parses a model reply into a JSON object.
///
/// The whole text is tried first, then the first balanced `{...}` span in it
/// (which also covers replies wrapped in markdown code fences).
pub fn parse_model_reply(raw: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(reply)) = serde_json::from_str::<Value>(raw.trim()) {
        return Some(reply);
    }

    let candidate = extract_json_object(raw)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(reply)) => Some(reply),
        _ => None,
    }
}

/// Returns the first balanced `{...}` span of `text`. Braces inside string
/// literals are ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Builds a complete payload from a parsed reply, substituting defaults for
/// every missing or unusable field.
pub fn normalize_payload(reply: &Map<String, Value>, defaults: PayloadDefaults) -> AnalysisPayload {
    let object_name = reply
        .get("objectName")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(defaults.object_name)
        .to_string();

    let classification = reply
        .get("classification")
        .and_then(Value::as_str)
        .map(Classification::from_lossy)
        .unwrap_or(Classification::NonRecyclable);

    let impact = reply.get("environmentalImpact").and_then(Value::as_object);
    let rating = |key: &str| {
        impact
            .and_then(|impact| impact.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(defaults.impact_rating)
            .to_string()
    };

    AnalysisPayload {
        object_name,
        classification,
        confidence: normalize_confidence(reply.get("confidence")),
        materials: string_list(reply.get("materials")),
        environmental_impact: EnvironmentalImpact {
            carbon_footprint: rating("carbonFootprint"),
            recyclability: rating("recyclability"),
            biodegradability: rating("biodegradability"),
        },
        disposal_tips: string_list(reply.get("disposalTips")),
        reuse_suggestions: string_list(reply.get("reuseSuggestions")),
        educational_facts: string_list(reply.get("educationalFacts")),
    }
}

/// Accepts numbers and numeric strings in `[0, 100]`. Anything else,
/// including out-of-range values, becomes the default. No clamping.
pub fn normalize_confidence(value: Option<&Value>) -> u8 {
    let number = value.and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    });

    match number {
        Some(n) if n.is_finite() && (0.0..=100.0).contains(&n) => n.round() as u8,
        _ => DEFAULT_CONFIDENCE,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Payload used when the model reply holds no usable JSON object.
pub fn repair_payload(raw: &str) -> AnalysisPayload {
    let mut educational_facts = vec![
        "Many items have hidden recycling potential".to_string(),
        "Proper disposal prevents environmental contamination".to_string(),
        "Reusing items reduces manufacturing demand".to_string(),
    ];

    let excerpt: String = raw.trim().chars().take(REPLY_EXCERPT_CHARS).collect();
    if !excerpt.is_empty() {
        educational_facts.push(format!("{excerpt}..."));
    }

    AnalysisPayload {
        object_name: PayloadDefaults::SERVICE.object_name.to_string(),
        classification: Classification::NonRecyclable,
        confidence: DEFAULT_CONFIDENCE,
        materials: vec!["Unknown Material".to_string()],
        environmental_impact: EnvironmentalImpact::new("Medium", "Medium", "Low"),
        disposal_tips: vec![
            "Check local waste disposal guidelines".to_string(),
            "Consider if item can be repaired or repurposed".to_string(),
            "Look for specialized recycling programs".to_string(),
            "Dispose of responsibly at waste management facility".to_string(),
        ],
        reuse_suggestions: vec![
            "Consider creative repurposing projects".to_string(),
            "Use for storage or organization".to_string(),
            "Transform into decorative items".to_string(),
            "Repurpose for gardening activities".to_string(),
        ],
        educational_facts,
    }
}

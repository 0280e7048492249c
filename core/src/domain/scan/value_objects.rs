use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image: Option<String>,
}

/// A captured or uploaded image encoded as a self-contained string,
/// usually a `data:` URI. The encoding is opaque to the analysis path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData(String);

impl ImageData {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        let data = general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{mime_type};base64,{data}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => "image/jpeg",
    }
}

/// Substitutes used when a reply field is missing or unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadDefaults {
    pub object_name: &'static str,
    pub impact_rating: &'static str,
}

impl PayloadDefaults {
    pub const SERVICE: PayloadDefaults = PayloadDefaults {
        object_name: "Detected Item",
        impact_rating: "Unknown",
    };

    pub const CLIENT: PayloadDefaults = PayloadDefaults {
        object_name: "Unknown Object",
        impact_rating: "Unknown",
    };
}

pub const DEFAULT_CONFIDENCE: u8 = 75;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, scan::entities::ScanResult};

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Hex digits of the result id appended to report file names.
const ID_SUFFIX_LEN: usize = 8;

/// Pretty-printed (2-space indent) JSON report of a single result.
pub fn export_json(result: &ScanResult) -> Result<String, CoreError> {
    serde_json::to_string_pretty(result).map_err(|e| {
        tracing::error!("Failed to serialize scan result {}: {}", result.id, e);
        CoreError::InternalServerError
    })
}

/// File name for a downloaded report, e.g. `ecoscan-glass-jar-5f3a9c21.json`.
///
/// The slug keeps only `[a-z0-9-]`, so the name never contains a path
/// separator. The suffix comes from the random tail of the result id and
/// keeps reports for same-named items apart.
pub fn export_file_name(result: &ScanResult) -> String {
    let lowered = result.object_name.to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lowered, "-");
    let slug = match slug.trim_matches('-') {
        "" => "item",
        slug => slug,
    };

    let id = result.id.simple().to_string();
    let suffix = &id[id.len() - ID_SUFFIX_LEN..];

    format!("ecoscan-{slug}-{suffix}.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(result: &ScanResult, url: impl Into<String>) -> Self {
        Self {
            title: format!("EcoScan: {}", result.object_name),
            text: format!(
                "Scanned {} - Classification: {}",
                result.object_name, result.classification
            ),
            url: url.into(),
        }
    }

    /// Text copied to the clipboard when no native share target exists.
    pub fn clipboard_text(&self) -> String {
        if self.url.is_empty() {
            format!("{}\n{}", self.title, self.text)
        } else {
            format!("{}\n{}\n{}", self.title, self.text, self.url)
        }
    }
}

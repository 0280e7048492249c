use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Waste-handling category assigned to a scanned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Reusable,
    Recyclable,
    NonRecyclable,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Reusable,
        Classification::Recyclable,
        Classification::NonRecyclable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Reusable => "reusable",
            Classification::Recyclable => "recyclable",
            Classification::NonRecyclable => "non-recyclable",
        }
    }

    /// Exact match against the wire values; anything else is non-recyclable.
    pub fn from_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or(Classification::NonRecyclable)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

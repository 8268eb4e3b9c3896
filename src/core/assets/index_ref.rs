use serde::{Deserialize, Serialize};

/// Reference from a version document to its asset index file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetIndexRef {
    /// Asset index ID (e.g. "17" for 1.21.x).
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "totalSize", alias = "total_size")]
    pub total_size: u64,
    pub url: String,
}

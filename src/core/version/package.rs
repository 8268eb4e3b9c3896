// ─── Package Document ───
// Per-package summary (`<uid>/package.json` in the index).

use serde::{Deserialize, Serialize};

use crate::core::document::{current_format_version, CanonicalDocument, Versioned};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaPackage {
    #[serde(
        rename = "formatVersion",
        alias = "format_version",
        default = "current_format_version"
    )]
    pub format_version: u32,
    pub name: String,
    pub uid: String,
    /// Versions the launcher should offer first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "projectUrl",
        alias = "project_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub project_url: Option<String>,
}

impl MetaPackage {
    pub fn new(name: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            format_version: current_format_version(),
            name: name.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }
}

impl CanonicalDocument for MetaPackage {}

impl Versioned for MetaPackage {
    fn format_version(&self) -> u32 {
        self.format_version
    }
}

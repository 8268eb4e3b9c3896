use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::document::META_FORMAT_VERSION;

const APP_DIR_NAME: &str = "launcher-meta";
const SETTINGS_FILE: &str = "meta_settings.json";

/// Process-wide settings, loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaSettings {
    /// Highest `formatVersion` accepted when reading documents. May be set
    /// lower than [`META_FORMAT_VERSION`] but never above it.
    #[serde(default = "default_max_format_version")]
    max_format_version: u32,
}

fn default_max_format_version() -> u32 {
    META_FORMAT_VERSION
}

impl Default for MetaSettings {
    fn default() -> Self {
        Self {
            max_format_version: META_FORMAT_VERSION,
        }
    }
}

impl MetaSettings {
    pub fn with_max_format_version(max_format_version: u32) -> Self {
        Self {
            max_format_version: clamp_format_version(max_format_version),
        }
    }

    pub fn max_format_version(&self) -> u32 {
        self.max_format_version
    }

    /// Load `meta_settings.json` from `dir`, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(dir: &Path) -> Self {
        load_settings_from_disk(dir).unwrap_or_default()
    }

    pub fn save(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(dir.join(SETTINGS_FILE), json)
    }
}

fn clamp_format_version(requested: u32) -> u32 {
    if requested > META_FORMAT_VERSION {
        warn!(
            "max_format_version {} is newer than this build supports, using {}",
            requested, META_FORMAT_VERSION
        );
        META_FORMAT_VERSION
    } else {
        requested
    }
}

fn load_settings_from_disk(dir: &Path) -> Option<MetaSettings> {
    let raw = std::fs::read_to_string(dir.join(SETTINGS_FILE)).ok()?;
    match serde_json::from_str::<MetaSettings>(&raw) {
        Ok(settings) => Some(MetaSettings::with_max_format_version(
            settings.max_format_version,
        )),
        Err(e) => {
            warn!("Ignoring unreadable {}: {}", SETTINGS_FILE, e);
            None
        }
    }
}

/// Default root for the document store (`<data dir>/launcher-meta`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

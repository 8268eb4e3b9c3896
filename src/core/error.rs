use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the metadata schema.
/// Every module returns `Result<T, MetaError>`.
#[derive(Debug, Error)]
pub enum MetaError {
    // ── Coordinates ─────────────────────────────────────
    #[error("Malformed Maven coordinate: {0}")]
    MalformedCoordinate(String),

    // ── Enumerations ────────────────────────────────────
    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },

    // ── Documents ───────────────────────────────────────
    #[error("Unsupported format version {found} (max supported: {max})")]
    UnsupportedFormatVersion { found: u64, max: u32 },

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type MetaResult<T> = Result<T, MetaError>;

impl From<std::io::Error> for MetaError {
    fn from(source: std::io::Error) -> Self {
        MetaError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl MetaError {
    /// Re-type a serde failure raised while reading a document.
    ///
    /// Our own validators report through `serde::de::Error::custom` using the
    /// `Display` form of the matching variant, so the typed kind is recovered
    /// from that message.
    pub(crate) fn from_parse(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde_json appends the position of the failure to data errors; the
        // message itself may contain the same words.
        let bare = match message.rfind(" at line ") {
            Some(idx) => &message[..idx],
            None => message.as_str(),
        };

        if let Some(coord) = bare.strip_prefix("Malformed Maven coordinate: ") {
            return MetaError::MalformedCoordinate(coord.to_string());
        }

        if let Some(rest) = bare.strip_prefix("Invalid ") {
            if let Some((kind, value)) = rest.split_once(" value: ") {
                if let Some(kind) = ENUM_KINDS.iter().copied().find(|k| *k == kind) {
                    return MetaError::InvalidEnumValue {
                        kind,
                        value: value.trim_matches('"').to_string(),
                    };
                }
            }
        }

        if err.is_data() || err.is_eof() || err.is_syntax() {
            MetaError::SchemaValidation(message)
        } else {
            MetaError::Json(err)
        }
    }
}

/// Enumeration names reported through [`MetaError::InvalidEnumValue`].
pub const OS_NAME_KIND: &str = "OS name";
pub const RULE_ACTION_KIND: &str = "rule action";

const ENUM_KINDS: [&str; 2] = [OS_NAME_KIND, RULE_ACTION_KIND];

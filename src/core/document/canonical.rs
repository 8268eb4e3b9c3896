// ─── Canonical Documents ───
// Deterministic JSON rendering and the format-version gate shared by every
// top-level document of the index.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::error::{MetaError, MetaResult};
use crate::core::settings::MetaSettings;

/// Newest document format this build understands.
pub const META_FORMAT_VERSION: u32 = 1;

const FORMAT_VERSION_KEY: &str = "formatVersion";
const FORMAT_VERSION_FIELD: &str = "format_version";
const INDENT: &[u8] = b"    ";

pub(crate) fn current_format_version() -> u32 {
    META_FORMAT_VERSION
}

/// Documents carrying a `formatVersion`.
pub trait Versioned: Serialize + DeserializeOwned {
    fn format_version(&self) -> u32;

    /// Reject documents newer than this process understands.
    fn validate(&self, settings: &MetaSettings) -> MetaResult<()> {
        check_format_version(u64::from(self.format_version()), settings)
    }
}

/// A top-level document of the index.
///
/// Implementors only need serde impls; rendering goes through [`write`], which
/// sorts keys, drops `null` members and indents with four spaces.
pub trait CanonicalDocument: Versioned {
    /// Canonical byte form of this document. Fails for a `formatVersion`
    /// newer than [`META_FORMAT_VERSION`].
    fn to_canonical_bytes(&self) -> MetaResult<Vec<u8>> {
        self.validate(&MetaSettings::default())?;
        write(self)
    }

    /// Lowercase hex SHA-256 of the canonical bytes.
    fn digest(&self) -> MetaResult<String> {
        Ok(digest_bytes(&self.to_canonical_bytes()?))
    }
}

pub fn check_format_version(found: u64, settings: &MetaSettings) -> MetaResult<()> {
    let max = settings.max_format_version();
    if found > u64::from(max) {
        return Err(MetaError::UnsupportedFormatVersion { found, max });
    }
    Ok(())
}

/// Render any serializable value in canonical form.
pub fn write<T: Serialize + ?Sized>(doc: &T) -> MetaResult<Vec<u8>> {
    let value = canonicalize(serde_json::to_value(doc)?);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Parse a versioned document.
///
/// The format version is checked on the raw tree before any other field is
/// interpreted, so a newer document is never half-read. The typed document is
/// then read from the bytes themselves, which keeps map members (`archRules`)
/// in document order.
pub fn parse<T: Versioned>(bytes: &[u8], settings: &MetaSettings) -> MetaResult<T> {
    let value: Value = serde_json::from_slice(bytes).map_err(MetaError::from_parse)?;

    let found = match raw_format_version(&value)? {
        Some(v) => v,
        None => u64::from(META_FORMAT_VERSION),
    };
    check_format_version(found, settings)?;

    let doc: T = serde_json::from_slice(bytes).map_err(MetaError::from_parse)?;
    debug!("Parsed document (formatVersion {})", found);
    Ok(doc)
}

pub fn digest_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn raw_format_version(value: &Value) -> MetaResult<Option<u64>> {
    let Some(obj) = value.as_object() else {
        return Err(MetaError::SchemaValidation(
            "document root must be a JSON object".to_string(),
        ));
    };

    let raw = obj
        .get(FORMAT_VERSION_KEY)
        .or_else(|| obj.get(FORMAT_VERSION_FIELD));

    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| {
            MetaError::SchemaValidation(format!(
                "{FORMAT_VERSION_KEY} must be a non-negative integer, got {v}"
            ))
        }),
    }
}

/// Sort object keys and drop `null` members, recursively.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut entries: Vec<(String, Value)> = obj
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, canonicalize(v)))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

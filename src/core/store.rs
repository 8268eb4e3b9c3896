// ─── Document Store ───
// Reads and writes canonical documents under a root directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::document::{digest_bytes, parse, write, Versioned};
use crate::core::error::{MetaError, MetaResult};
use crate::core::settings::{default_data_dir, MetaSettings};

/// File layer for index documents.
///
/// Owns path selection and directory creation; writes go to a sibling temp
/// file first and are renamed into place.
pub struct MetaStore {
    /// Root directory of the index.
    root: PathBuf,
    settings: MetaSettings,
}

impl MetaStore {
    pub fn new(root: PathBuf, settings: MetaSettings) -> Self {
        Self { root, settings }
    }

    /// Store rooted at `root`, with settings read from the same directory.
    pub fn open(root: PathBuf) -> Self {
        let settings = MetaSettings::load(&root);
        Self::new(root, settings)
    }

    /// Store under the platform data directory.
    pub fn open_default() -> Self {
        Self::open(default_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &MetaSettings {
        &self.settings
    }

    /// `<root>/<uid>/package.json`
    pub fn package_path(&self, uid: &str) -> PathBuf {
        self.root.join(uid).join("package.json")
    }

    /// `<root>/<uid>/<version>.json`
    pub fn version_path(&self, uid: &str, version: &str) -> PathBuf {
        self.root.join(uid).join(format!("{}.json", version))
    }

    /// Write `doc` in canonical form and return the SHA-256 of the written bytes.
    pub async fn save<T: Versioned>(&self, path: &Path, doc: &T) -> MetaResult<String> {
        doc.validate(&self.settings)?;
        let bytes = write(doc)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MetaError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| MetaError::Io {
                path: tmp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(|e| MetaError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let digest = digest_bytes(&bytes);
        info!("Wrote {:?} ({} bytes, sha256 {})", path, bytes.len(), digest);
        Ok(digest)
    }

    /// Read and parse a document, applying the format-version gate.
    pub async fn load<T: Versioned>(&self, path: &Path) -> MetaResult<T> {
        let bytes = tokio::fs::read(path).await.map_err(|e| MetaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Read {:?} ({} bytes)", path, bytes.len());
        parse(&bytes, &self.settings)
    }
}

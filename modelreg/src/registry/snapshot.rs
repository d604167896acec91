//! Registry snapshot file.
//!
//! Reads and writes the whole name → record mapping as one pretty-printed JSON
//! document.
//!
//! Known limitations:
//! - `save` overwrites the file in place. A crash mid-write can leave a
//!   truncated document, which the next `load` reports as a parse error.
//! - There is no file locking. Two processes writing the same file race and
//!   the last writer wins.

use crate::error::PersistenceError;
use crate::types::ModelRecord;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Persisted mapping type.
pub type ModelMap = BTreeMap<String, ModelRecord>;

/// Handle to the `model-registry.json` file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a handle for the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the mapping. A missing or blank file yields an empty mapping.
    pub fn load(&self) -> Result<ModelMap, PersistenceError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "registry file not found, starting empty");
            return Ok(ModelMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(ModelMap::new());
        }
        let models: ModelMap =
            serde_json::from_str(&content).map_err(|source| PersistenceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        for (key, record) in &models {
            record
                .validate(key)
                .map_err(|reason| PersistenceError::Invalid {
                    path: self.path.clone(),
                    model: key.clone(),
                    reason,
                })?;
        }
        Ok(models)
    }

    /// Overwrite the file with the full mapping.
    pub fn save(&self, models: &ModelMap) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(models).map_err(PersistenceError::Serialize)?;
        let write_error = |source: std::io::Error| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.path, bytes).map_err(write_error)?;
        Ok(())
    }
}

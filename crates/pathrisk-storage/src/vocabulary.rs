//! Read-only vocabulary document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use pathrisk_core::errors::StorageError;

use crate::io::read_json;

#[derive(Debug, Clone)]
pub struct VocabularyStore {
    path: PathBuf,
}

impl VocabularyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document as-is.
    pub fn load(&self) -> Result<Value, StorageError> {
        let _span = pathrisk_core::storage_span!("load_vocabulary", self.path.display()).entered();
        read_json(&self.path).inspect_err(|e| warn!(error = %e, "vocabulary unavailable"))
    }
}

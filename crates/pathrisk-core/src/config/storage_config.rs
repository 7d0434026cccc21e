//! Storage configuration for the project store and vocabulary document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Locations of the externally owned JSON documents.
///
/// Relative paths are resolved against the root passed to [`StorageConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Base data directory. Default: `data`.
    pub data_dir: Option<PathBuf>,
    /// Directory holding one JSON file per project. Default: `<data_dir>/projects`.
    pub projects_dir: Option<PathBuf>,
    /// Read-only vocabulary document. Default: `<data_dir>/vocabulary.json`.
    pub vocabulary_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn effective_projects_dir(&self) -> PathBuf {
        self.projects_dir
            .clone()
            .unwrap_or_else(|| self.effective_data_dir().join("projects"))
    }

    pub fn effective_vocabulary_file(&self) -> PathBuf {
        self.vocabulary_file
            .clone()
            .unwrap_or_else(|| self.effective_data_dir().join("vocabulary.json"))
    }

    /// Absolute locations of `(projects_dir, vocabulary_file)` under `root`.
    pub fn resolve(&self, root: &Path) -> (PathBuf, PathBuf) {
        (
            root.join(self.effective_projects_dir()),
            root.join(self.effective_vocabulary_file()),
        )
    }
}

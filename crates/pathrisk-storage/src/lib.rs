//! File-backed storage for PathRisk: one JSON document per project plus a read-only
//! vocabulary document.

pub mod io;
pub mod projects;
pub mod types;
pub mod vocabulary;

pub use projects::ProjectStore;
pub use types::{ProjectDocument, ProjectSummary, StoreStatus};
pub use vocabulary::VocabularyStore;

use std::path::Path;

use pathrisk_core::config::StorageConfig;
use pathrisk_core::errors::StorageError;

/// Open both stores at the locations configured under `root`.
pub fn open_stores(
    config: &StorageConfig,
    root: &Path,
) -> Result<(ProjectStore, VocabularyStore), StorageError> {
    let (projects_dir, vocabulary_file) = config.resolve(root);
    Ok((
        ProjectStore::open(projects_dir)?,
        VocabularyStore::new(vocabulary_file),
    ))
}

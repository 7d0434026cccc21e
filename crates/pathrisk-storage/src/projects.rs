//! Project store: one `<name>.json` document per project in a single directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use pathrisk_core::errors::StorageError;

use crate::io::{io_error, read_json, write_json};
use crate::types::{ProjectDocument, ProjectSummary, StoreStatus};

const EXTENSION: &str = "json";

/// Directory of project documents.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every `*.json` document, sorted by name, with its modification time.
    pub fn list(&self) -> Result<Vec<ProjectSummary>, StorageError> {
        let _span = pathrisk_core::storage_span!("list", self.dir.display()).entered();

        let entries = fs::read_dir(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let mut projects = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .map_err(|e| io_error(&path, e))?;
            projects.push(ProjectSummary {
                name: name.to_string(),
                last_saved: iso_local(DateTime::<Local>::from(modified)),
            });
        }
        projects.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(count = projects.len(), "projects listed");
        Ok(projects)
    }

    /// Load a project, creating an empty document first if it does not exist.
    pub fn get(&self, name: &str) -> Result<ProjectDocument, StorageError> {
        let path = self.path_for(name)?;
        let _span = pathrisk_core::storage_span!("get", name).entered();

        if !path.exists() {
            write_json(&path, &ProjectDocument::default()).inspect_err(|e| {
                warn!(error = %e, "failed to create project");
            })?;
            debug!(path = %path.display(), "created empty project");
        }
        read_json(&path)
    }

    /// Replace an existing project's content, keeping its stored `simulated_path`.
    pub fn update(&self, name: &str, mut document: ProjectDocument) -> Result<StoreStatus, StorageError> {
        let path = self.path_for(name)?;
        let _span = pathrisk_core::storage_span!("update", name).entered();

        let existing: ProjectDocument = read_json(&path).inspect_err(|e| {
            warn!(error = %e, "cannot update project");
        })?;
        document.simulated_path = existing.simulated_path;
        write_json(&path, &document)?;

        Ok(StoreStatus::success("Project updated successfully!"))
    }

    /// Remove a project's document.
    pub fn delete(&self, name: &str) -> Result<StoreStatus, StorageError> {
        let path = self.path_for(name)?;
        let _span = pathrisk_core::storage_span!("delete", name).entered();

        fs::remove_file(&path).map_err(|e| {
            let err = io_error(&path, e);
            warn!(error = %err, "cannot delete project");
            err
        })?;
        Ok(StoreStatus::success("Project deleted successfully."))
    }

    /// Path of `name`'s document. A trailing `.json` on `name` is accepted.
    fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        if !is_valid_name(stem) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{stem}.{EXTENSION}")))
    }
}

fn is_valid_name(stem: &str) -> bool {
    !stem.is_empty()
        && stem.trim() == stem
        && !stem.contains(['/', '\\', '\0'])
        && !stem.contains("..")
}

fn iso_local(time: DateTime<Local>) -> String {
    time.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

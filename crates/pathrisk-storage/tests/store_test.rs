//! Project store and vocabulary loader against a temporary directory.

use pathrisk_core::config::StorageConfig;
use pathrisk_core::errors::StorageError;
use pathrisk_storage::{open_stores, ProjectDocument, ProjectStore, StoreStatus, VocabularyStore};
use serde_json::json;
use tempfile::TempDir;

fn store() -> (TempDir, ProjectStore) {
    let dir = TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path().join("projects")).unwrap();
    (dir, store)
}

fn document(value: serde_json::Value) -> ProjectDocument {
    serde_json::from_value(value).unwrap()
}

#[test]
fn get_creates_empty_document() {
    let (_dir, store) = store();
    let doc = store.get("fresh").unwrap();
    assert_eq!(doc, ProjectDocument::default());

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.dir().join("fresh.json")).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        json!({"situations": [], "events": [], "relationships": [], "simulated_path": []})
    );
}

#[test]
fn update_preserves_simulated_path() {
    let (_dir, store) = store();
    std::fs::write(
        store.dir().join("bank.json"),
        json!({"situations": [], "events": [], "relationships": [], "simulated_path": ["s1", "s2"]})
            .to_string(),
    )
    .unwrap();

    let status = store
        .update(
            "bank",
            document(json!({"situations": [{"id": 1}], "simulated_path": ["ignored"]})),
        )
        .unwrap();
    assert_eq!(status.status, "success");

    let doc = store.get("bank").unwrap();
    assert_eq!(doc.situations, vec![json!({"id": 1})]);
    assert_eq!(doc.simulated_path, vec![json!("s1"), json!("s2")]);
}

#[test]
fn update_requires_existing_document() {
    let (_dir, store) = store();
    let err = store.update("missing", ProjectDocument::default()).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let status = StoreStatus::from(&err);
    assert_eq!(status.status, "error");
    assert!(status.message.contains("missing.json"), "{}", status.message);
}

#[test]
fn list_reports_json_documents_only() {
    let (_dir, store) = store();
    store.get("beta").unwrap();
    store.get("alpha").unwrap();
    std::fs::write(store.dir().join("notes.txt"), "x").unwrap();

    let projects = store.list().unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta"]);
    for project in &projects {
        assert!(chrono::NaiveDateTime::parse_from_str(&project.last_saved, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}

#[test]
fn delete_removes_document() {
    let (_dir, store) = store();
    store.get("doomed").unwrap();
    assert_eq!(store.delete("doomed.json").unwrap().status, "success");
    assert!(store.list().unwrap().is_empty());
    assert!(matches!(
        store.delete("doomed").unwrap_err(),
        StorageError::NotFound { .. }
    ));
}

#[test]
fn invalid_names_are_rejected() {
    let (_dir, store) = store();
    for name in ["", "../escape", "nested/name"] {
        assert!(matches!(store.get(name), Err(StorageError::InvalidName(_))), "{name:?}");
    }
}

#[test]
fn malformed_document_is_json_error() {
    let (_dir, store) = store();
    std::fs::write(store.dir().join("broken.json"), "{").unwrap();
    assert!(matches!(store.get("broken"), Err(StorageError::Json { .. })));
}

#[test]
fn vocabulary_loads_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vocabulary.json");
    std::fs::write(&path, json!({"situations": ["Login"]}).to_string()).unwrap();

    let vocabulary = VocabularyStore::new(&path).load().unwrap();
    assert_eq!(vocabulary["situations"][0], "Login");

    let missing = VocabularyStore::new(dir.path().join("absent.json")).load();
    assert!(matches!(missing, Err(StorageError::NotFound { .. })));
}

#[test]
fn open_stores_uses_configured_layout() {
    let dir = TempDir::new().unwrap();
    let (projects, vocabulary) = open_stores(&StorageConfig::default(), dir.path()).unwrap();
    assert_eq!(projects.dir(), dir.path().join("data/projects"));
    assert_eq!(vocabulary.path(), dir.path().join("data/vocabulary.json"));
    assert!(projects.dir().is_dir());
}

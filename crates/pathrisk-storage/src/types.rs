//! Stored document shapes and store responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use pathrisk_core::errors::StorageError;

/// A saved project. Keys beyond the four known collections are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub situations: Vec<Value>,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default)]
    pub relationships: Vec<Value>,
    #[serde(default)]
    pub simulated_path: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    /// File modification time, ISO-8601 in local time.
    pub last_saved: String,
}

/// `{message, status}` acknowledgement of a mutating store call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub message: String,
    pub status: &'static str,
}

impl StoreStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "success",
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "error",
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

impl From<&StorageError> for StoreStatus {
    fn from(err: &StorageError) -> Self {
        Self::error(err.to_string())
    }
}

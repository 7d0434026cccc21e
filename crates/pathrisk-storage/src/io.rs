//! JSON file helpers mapping I/O and serde failures onto `StorageError`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use pathrisk_core::errors::StorageError;

pub(crate) fn io_error(path: &Path, err: std::io::Error) -> StorageError {
    if err.kind() == ErrorKind::NotFound {
        StorageError::NotFound {
            path: path.display().to_string(),
        }
    } else {
        StorageError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Read and decode one JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| StorageError::Json {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Pretty-print `value` to `path`, replacing any previous content.
///
/// Writes to a sibling temp file first and renames it over `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let tmp = path.with_extension("json.tmp");
    {
        let file = File::create(&tmp).map_err(|e| io_error(&tmp, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value).map_err(|e| StorageError::Json {
            path: tmp.display().to_string(),
            message: e.to_string(),
        })?;
        writer.flush().map_err(|e| io_error(&tmp, e))?;
    }
    fs::rename(&tmp, path).map_err(|e| io_error(path, e))
}

//! JSON artifact deserialization.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use basket_core::errors::StorageError;

/// Deserialize a JSON artifact from disk.
///
/// A missing file and a file that fails to deserialize are distinct errors;
/// both are fatal to the caller (there is nothing to show without the base
/// tables) and neither is retried.
pub fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::ArtifactMissing {
                path: path.display().to_string(),
            }
        } else {
            StorageError::ArtifactIo {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        }
    })?;
    serde_json::from_str(&raw).map_err(|e| StorageError::ArtifactCorrupt {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

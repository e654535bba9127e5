/// Artifact-loading errors. Fatal at startup, never retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("artifact not found: {path}")]
    ArtifactMissing { path: String },

    #[error("failed to read artifact {path}: {message}")]
    ArtifactIo { path: String, message: String },

    #[error("failed to deserialize artifact {path}: {message}")]
    ArtifactCorrupt { path: String, message: String },

    #[error("model cache lock poisoned: {message}")]
    CacheLock { message: String },
}

//! SnapshotError for serialized form values

/// Error type for encoding and decoding form snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("snapshot encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding checkpoints.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or the binary format failed
    #[error("checkpoint serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or the binary format failed
    #[error("checkpoint deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible format version
    #[error("unsupported checkpoint version {found}, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint is a serializable snapshot of a machine's current state and
//! transition history, enabling a long-lived session to survive process
//! restarts. The transition table is NOT part of a checkpoint: actions are
//! arbitrary closures and cannot be serialized, so the caller re-registers
//! its transitions after [`StateMachine::resume`](crate::machine::StateMachine::resume).

use crate::core::{Event, State, TransitionHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a state machine.
///
/// Produced by [`StateMachine::checkpoint`](crate::machine::StateMachine::checkpoint),
/// consumed by [`StateMachine::resume`](crate::machine::StateMachine::resume).
///
/// # Example
///
/// ```rust
/// use switchyard::checkpoint::Checkpoint;
/// use switchyard::machine::StateMachine;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Upload { Pending, Sending, Done }
/// }
/// event_enum! {
///     enum UploadEvent { Begin, Acked }
/// }
///
/// let mut machine = StateMachine::new(Upload::Pending);
/// machine
///     .add_transition(Upload::Pending, Upload::Sending, UploadEvent::Begin)
///     .unwrap();
/// machine.send_event(UploadEvent::Begin);
///
/// let json = machine.checkpoint().to_json().unwrap();
///
/// // ... process restarts ...
///
/// let checkpoint: Checkpoint<Upload, UploadEvent> = Checkpoint::from_json(&json).unwrap();
/// let mut restored = StateMachine::resume(checkpoint);
/// assert_eq!(restored.state(), &Upload::Sending);
///
/// // Transitions are re-registered by the caller.
/// restored
///     .add_transition(Upload::Sending, Upload::Done, UploadEvent::Acked)
///     .unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, E: Event> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When the checkpoint was created
    pub created_at: DateTime<Utc>,

    /// Current state of the machine
    pub current_state: S,

    /// Complete transition history
    pub history: TransitionHistory<S, E>,
}

impl<S: State, E: Event> Checkpoint<S, E> {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string, validating the format version.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate_version()?;
        Ok(checkpoint)
    }

    /// Serialize to a compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary encoding, validating the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate_version()?;
        Ok(checkpoint)
    }

    fn validate_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

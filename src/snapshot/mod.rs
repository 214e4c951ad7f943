//! Snapshot and restore functionality for state machines.
//!
//! This module provides serialization and deserialization of a machine's
//! dynamic state, so a save file can capture where every entity's brain was
//! and a load can put it back. Hooks are code, not data: a snapshot carries
//! the current state, any pending deferred transition, and the transition
//! log, and is restored into a machine whose states are already registered.

use crate::machine::{StateId, StateMachine, TransitionLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a machine's dynamic state.
/// Does NOT include state hooks (not serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: StateId> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// The state that was current, if the machine was initialized
    pub current: Option<S>,

    /// An unresolved deferred transition, if one was outstanding
    pub pending: Option<S>,

    /// The machine's transition log
    pub log: TransitionLog<S>,
}

impl<S: StateId> Snapshot<S> {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

impl<S: StateId, C: 'static> StateMachine<S, C> {
    /// Capture the machine's dynamic state.
    pub fn snapshot(&self) -> Snapshot<S> {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current: self.current().cloned(),
            pending: self.pending().cloned(),
            log: self.log().clone(),
        }
    }

    /// Restore dynamic state from a snapshot. No hooks fire; the machine
    /// simply resumes where the snapshot left it.
    ///
    /// Fails when the snapshot format version is unsupported or when the
    /// snapshot references a state this machine never registered. Restore is
    /// always strict: a missing state here is a wiring bug in the host, not
    /// a gameplay condition.
    pub fn restore(&mut self, snapshot: Snapshot<S>) -> Result<(), SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        for state in snapshot.current.iter().chain(snapshot.pending.iter()) {
            if !self.contains(state) {
                return Err(SnapshotError::UnknownState {
                    name: state.name().to_string(),
                });
            }
        }
        self.set_restored(snapshot.current, snapshot.pending, snapshot.log);
        Ok(())
    }
}

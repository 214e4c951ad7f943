//! Transition history tracking.
//!
//! A machine records every applied transition into an append-only log, so
//! hosts can inspect where an entity has been and when. The log is a plain
//! value: recording returns a new log rather than mutating in place.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a transition was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    /// The machine's first state, set with no prior state to leave.
    Initial,
    /// A synchronous transition applied at the call site.
    Immediate,
    /// A queued transition resolved at the top of the next update tick.
    Deferred,
}

/// Record of a single applied transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: StateId> {
    /// The state being left, or `None` for the initial transition.
    pub from: Option<S>,
    /// The state being entered.
    pub to: S,
    /// When the transition was applied.
    pub timestamp: DateTime<Utc>,
    /// How the transition was requested.
    pub cause: TransitionCause,
}

/// Ordered log of applied transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use gambit::machine::{TransitionCause, TransitionLog, TransitionRecord};
/// use gambit::state_id;
///
/// state_id! {
///     enum Phase {
///         Day,
///         Night,
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: None,
///     to: Phase::Day,
///     timestamp: Utc::now(),
///     cause: TransitionCause::Initial,
/// });
/// let log = log.record(TransitionRecord {
///     from: Some(Phase::Day),
///     to: Phase::Night,
///     timestamp: Utc::now(),
///     cause: TransitionCause::Immediate,
/// });
///
/// assert_eq!(log.path(), vec![&Phase::Day, &Phase::Night]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: StateId> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: StateId> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log. The original is unchanged.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The sequence of states the machine has occupied, in order.
    ///
    /// Starts with the first record's `from` state when one exists, then the
    /// `to` state of every record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            if let Some(from) = &first.from {
                path.push(from);
            }
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition, or
    /// `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! State identifier trait for tick-driven machines.
//!
//! A machine keys its registered behavior by a `StateId` value. Any enum,
//! string, or small comparable struct that works as a map key qualifies.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier for one named mode of behavior in a
/// [`StateMachine`](crate::machine::StateMachine).
///
/// # Required Traits
///
/// - `Clone + Eq + Hash`: identifiers are map keys and are copied into
///   transition records
/// - `Debug`: identifiers appear in diagnostics
/// - `Serialize` + `Deserialize`: identifiers must survive snapshots
///
/// The [`state_id!`](crate::state_id) macro generates all of this for plain
/// enums.
///
/// # Example
///
/// ```rust
/// use gambit::machine::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum ZombieState {
///     Idle,
///     Wander,
///     Chase,
/// }
///
/// impl StateId for ZombieState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Wander => "Wander",
///             Self::Chase => "Chase",
///         }
///     }
/// }
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + 'static
{
    /// Get the identifier's name for display and error messages.
    fn name(&self) -> &str;
}

/// String-keyed machines work out of the box, for hosts that define states
/// in data files rather than enums.
impl StateId for String {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
    enum TestState {
        Idle,
        Walk,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Walk => "Walk",
            }
        }
    }

    #[test]
    fn name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Walk.name(), "Walk");
    }

    #[test]
    fn name_is_stable() {
        let state = TestState::Idle;
        assert_eq!(state.name(), state.name());
    }

    #[test]
    fn string_state_ids_name_themselves() {
        let state = String::from("patrolling");
        assert_eq!(state.name(), "patrolling");
    }

    #[test]
    fn state_ids_are_comparable_map_keys() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TestState::Idle, 1);
        map.insert(TestState::Walk, 2);
        map.insert(TestState::Idle, 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&TestState::Idle], 3);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Walk;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

//! Errors for strict-mode machine operations and machine construction.

use thiserror::Error;

/// Errors from the strict (`try_*`) state machine operations.
///
/// The lenient variants of the same operations never fail; see the module
/// docs for the two modes.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("state `{name}` is not registered")]
    UnregisteredState { name: String },
}

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no states registered. Add at least one state with .state()")]
    NoStates,

    #[error("initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("initial state `{name}` is not registered")]
    UnknownInitialState { name: String },
}

//! Builder for constructing state machines.

use super::error::BuildError;
use super::hooks::StateHooks;
use super::runtime::StateMachine;
use super::state::StateId;

/// Builder for constructing state machines with a fluent API.
///
/// `build` validates that at least one state was registered and that the
/// initial state is among them, then hands back a machine already sitting in
/// the initial state with its `on_enter` fired.
///
/// # Example
///
/// ```rust
/// use gambit::machine::{MachineBuilder, StateHooks};
/// use gambit::state_id;
///
/// state_id! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// let mut creaks = 0u32;
/// let machine = MachineBuilder::new()
///     .state(
///         Door::Closed,
///         StateHooks::new().on_update(|_: &mut u32| None),
///     )
///     .state(
///         Door::Open,
///         StateHooks::new().on_enter(|creaks: &mut u32| *creaks += 1),
///     )
///     .initial(Door::Closed)
///     .build(&mut creaks)
///     .unwrap();
///
/// assert_eq!(machine.current(), Some(&Door::Closed));
/// assert_eq!(creaks, 0);
/// ```
pub struct MachineBuilder<S: StateId, C: 'static> {
    states: Vec<(S, StateHooks<S, C>)>,
    initial: Option<S>,
}

impl<S: StateId, C: 'static> MachineBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
        }
    }

    /// Register a state's behavior. Registering the same key twice keeps the
    /// later hooks, matching [`StateMachine::register`].
    pub fn state(mut self, state: S, hooks: StateHooks<S, C>) -> Self {
        self.states.push((state, hooks));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the machine and enter the initial state.
    /// Returns an error if required pieces are missing.
    pub fn build(self, ctx: &mut C) -> Result<StateMachine<S, C>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new();
        for (state, hooks) in self.states {
            machine.register(state, hooks);
        }
        if !machine.contains(&initial) {
            return Err(BuildError::UnknownInitialState {
                name: initial.name().to_string(),
            });
        }
        machine.set_initial(initial, ctx);
        Ok(machine)
    }
}

impl<S: StateId, C: 'static> Default for MachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

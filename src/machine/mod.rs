//! Tick-driven finite state machines.
//!
//! A [`StateMachine`] is a keyed registry of states, each carrying optional
//! enter/update/leave hooks, with at most one state current at a time. The
//! host drives it by calling [`StateMachine::update`] once per tick and
//! requests transitions either immediately or deferred to the next tick.
//!
//! # Key Concepts
//!
//! - **States**: identified by any [`StateId`] value (enums via the
//!   [`state_id!`](crate::state_id) macro, or strings)
//! - **Hooks**: per-state [`StateHooks`] callbacks over a host context
//! - **Deferred transitions**: requested now, applied at the top of the next
//!   tick, last request wins
//! - **Transition log**: every applied transition is recorded in a
//!   [`TransitionLog`]
//!
//! Machines are single-owner, single-threaded values; see the crate docs for
//! the threading contract.

pub mod builder;
pub mod error;
pub mod history;
pub mod hooks;
pub mod macros;
pub mod runtime;
pub mod state;

pub use builder::MachineBuilder;
pub use error::{BuildError, MachineError};
pub use history::{TransitionCause, TransitionLog, TransitionRecord};
pub use hooks::StateHooks;
pub use runtime::StateMachine;
pub use state::StateId;

/// Create hooks with only a per-tick callback.
///
/// # Example
///
/// ```
/// use gambit::machine::{update_only, StateMachine};
/// use gambit::state_id;
///
/// state_id! {
///     enum Pulse {
///         Beat,
///     }
/// }
///
/// let mut machine = StateMachine::new();
/// machine.register(
///     Pulse::Beat,
///     update_only(|beats: &mut u32| {
///         *beats += 1;
///         None
///     }),
/// );
///
/// let mut beats = 0;
/// machine.set_initial(Pulse::Beat, &mut beats);
/// machine.update(&mut beats);
/// assert_eq!(beats, 1);
/// ```
pub fn update_only<S, C, F>(update: F) -> StateHooks<S, C>
where
    S: StateId,
    C: 'static,
    F: FnMut(&mut C) -> Option<S> + 'static,
{
    StateHooks::new().on_update(update)
}

/// Create hooks with an enter callback and a per-tick callback.
///
/// # Example
///
/// ```
/// use gambit::machine::{enter_update, StateMachine};
/// use gambit::state_id;
///
/// state_id! {
///     enum Alarm {
///         Ringing,
///     }
/// }
///
/// let mut machine = StateMachine::new();
/// machine.register(
///     Alarm::Ringing,
///     enter_update(
///         |volume: &mut u32| *volume = 10,
///         |volume: &mut u32| {
///             *volume += 1;
///             None
///         },
///     ),
/// );
///
/// let mut volume = 0;
/// machine.set_initial(Alarm::Ringing, &mut volume);
/// machine.update(&mut volume);
/// assert_eq!(volume, 11);
/// ```
pub fn enter_update<S, C, E, F>(enter: E, update: F) -> StateHooks<S, C>
where
    S: StateId,
    C: 'static,
    E: FnMut(&mut C) + 'static,
    F: FnMut(&mut C) -> Option<S> + 'static,
{
    StateHooks::new().on_enter(enter).on_update(update)
}

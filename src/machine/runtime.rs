//! The tick-driven state machine runtime.

use std::collections::HashMap;

use chrono::Utc;

use super::error::MachineError;
use super::history::{TransitionCause, TransitionLog, TransitionRecord};
use super::hooks::StateHooks;
use super::state::StateId;

/// A keyed registry of states with at most one current state, driven by a
/// host calling [`update`](StateMachine::update) once per tick.
///
/// Transitions come in two modes: [`change_now`](StateMachine::change_now)
/// applies synchronously (`on_leave`, pointer update, `on_enter`, in that
/// order), while [`change_to`](StateMachine::change_to) defers to the top of
/// the next tick. A second deferred request before resolution overwrites the
/// first; the last writer wins.
///
/// Operations targeting a state that was never registered are tolerated
/// no-ops by default, since gameplay systems prefer degraded behavior over
/// crashes mid-session. The `try_*` variants reject unknown keys with
/// [`MachineError::UnregisteredState`] for hosts that want the failure
/// surfaced.
///
/// # Example
///
/// ```rust
/// use gambit::machine::{StateHooks, StateMachine};
/// use gambit::state_id;
///
/// state_id! {
///     enum Mood {
///         Idle,
///         Walk,
///     }
/// }
///
/// struct Counters {
///     idle: u32,
///     walk: u32,
/// }
///
/// let mut counters = Counters { idle: 0, walk: 0 };
/// let mut machine = StateMachine::new();
/// machine.register(
///     Mood::Idle,
///     StateHooks::new().on_update(|c: &mut Counters| {
///         c.idle += 1;
///         None
///     }),
/// );
/// machine.register(
///     Mood::Walk,
///     StateHooks::new().on_update(|c: &mut Counters| {
///         c.walk += 1;
///         None
///     }),
/// );
///
/// machine.set_initial(Mood::Idle, &mut counters);
/// machine.update(&mut counters);
/// machine.update(&mut counters);
/// assert_eq!(counters.idle, 2);
///
/// machine.change_now(Mood::Walk, &mut counters);
/// machine.update(&mut counters);
/// assert_eq!((counters.idle, counters.walk), (2, 1));
/// assert_eq!(machine.current(), Some(&Mood::Walk));
/// ```
pub struct StateMachine<S: StateId, C: 'static> {
    states: HashMap<S, StateHooks<S, C>>,
    current: Option<S>,
    pending: Option<S>,
    log: TransitionLog<S>,
}

impl<S: StateId, C: 'static> StateMachine<S, C> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
            pending: None,
            log: TransitionLog::new(),
        }
    }

    /// Register a state's behavior, overwriting any earlier registration for
    /// the same key. The last registration wins; this never fails.
    pub fn register(&mut self, state: S, hooks: StateHooks<S, C>) {
        self.states.insert(state, hooks);
    }

    /// Set the current state for the first time, firing its `on_enter`. No
    /// `on_leave` fires; there is no prior state.
    ///
    /// Lenient: an unregistered key is ignored and the machine stays
    /// uninitialized. Use [`try_set_initial`](Self::try_set_initial) to get
    /// an error instead.
    pub fn set_initial(&mut self, state: S, ctx: &mut C) {
        if self.states.contains_key(&state) {
            self.enter_initial(state, ctx);
        }
    }

    /// Strict [`set_initial`](Self::set_initial): rejects unregistered keys.
    pub fn try_set_initial(&mut self, state: S, ctx: &mut C) -> Result<(), MachineError> {
        self.ensure_registered(&state)?;
        self.enter_initial(state, ctx);
        Ok(())
    }

    /// Transition synchronously: the outgoing state's `on_leave` fires, the
    /// state pointer updates, the incoming state's `on_enter` fires, in that
    /// order. Any outstanding deferred request is superseded and dropped.
    ///
    /// Lenient: an unregistered target still becomes current, its missing
    /// hooks are skipped, and [`update`](Self::update) no-ops from then on.
    pub fn change_now(&mut self, state: S, ctx: &mut C) {
        self.pending = None;
        self.apply(state, TransitionCause::Immediate, ctx);
    }

    /// Strict [`change_now`](Self::change_now): rejects unregistered targets.
    pub fn try_change_now(&mut self, state: S, ctx: &mut C) -> Result<(), MachineError> {
        self.ensure_registered(&state)?;
        self.change_now(state, ctx);
        Ok(())
    }

    /// Request a deferred transition, resolved at the top of the next
    /// [`update`](Self::update) call. A later request before resolution
    /// overwrites this one.
    pub fn change_to(&mut self, state: S) {
        self.pending = Some(state);
    }

    /// Strict [`change_to`](Self::change_to): rejects unregistered targets
    /// at request time.
    pub fn try_change_to(&mut self, state: S) -> Result<(), MachineError> {
        self.ensure_registered(&state)?;
        self.change_to(state);
        Ok(())
    }

    /// Advance one tick: resolve a pending transition if one exists, then
    /// invoke the current state's `on_update` exactly once. A `Some(next)`
    /// return from the hook becomes the new pending request.
    ///
    /// No-op when the machine is uninitialized or the current state has no
    /// registered hooks.
    pub fn update(&mut self, ctx: &mut C) {
        if let Some(next) = self.pending.take() {
            self.apply(next, TransitionCause::Deferred, ctx);
        }

        let Some(current) = self.current.clone() else {
            return;
        };
        let requested = match self.states.get_mut(&current) {
            Some(hooks) => match hooks.on_update.as_mut() {
                Some(update) => update(ctx),
                None => None,
            },
            None => None,
        };
        if let Some(next) = requested {
            self.pending = Some(next);
        }
    }

    /// The active state identifier, or `None` before initialization.
    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Whether `state` is the active state.
    pub fn is_current(&self, state: &S) -> bool {
        self.current.as_ref() == Some(state)
    }

    /// The target of an unresolved deferred transition, if any.
    pub fn pending(&self) -> Option<&S> {
        self.pending.as_ref()
    }

    /// Whether `state` has been registered.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state has been registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The log of every transition this machine has applied.
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    pub(crate) fn set_restored(
        &mut self,
        current: Option<S>,
        pending: Option<S>,
        log: TransitionLog<S>,
    ) {
        self.current = current;
        self.pending = pending;
        self.log = log;
    }

    fn ensure_registered(&self, state: &S) -> Result<(), MachineError> {
        if self.states.contains_key(state) {
            Ok(())
        } else {
            Err(MachineError::UnregisteredState {
                name: state.name().to_string(),
            })
        }
    }

    fn enter_initial(&mut self, state: S, ctx: &mut C) {
        self.log = self.log.record(TransitionRecord {
            from: None,
            to: state.clone(),
            timestamp: Utc::now(),
            cause: TransitionCause::Initial,
        });
        self.current = Some(state.clone());
        if let Some(hooks) = self.states.get_mut(&state) {
            if let Some(enter) = hooks.on_enter.as_mut() {
                enter(ctx);
            }
        }
    }

    fn apply(&mut self, next: S, cause: TransitionCause, ctx: &mut C) {
        let from = self.current.take();
        if let Some(prev) = &from {
            if let Some(hooks) = self.states.get_mut(prev) {
                if let Some(leave) = hooks.on_leave.as_mut() {
                    leave(ctx);
                }
            }
        }
        self.log = self.log.record(TransitionRecord {
            from,
            to: next.clone(),
            timestamp: Utc::now(),
            cause,
        });
        self.current = Some(next.clone());
        if let Some(hooks) = self.states.get_mut(&next) {
            if let Some(enter) = hooks.on_enter.as_mut() {
                enter(ctx);
            }
        }
    }
}

impl<S: StateId, C: 'static> Default for StateMachine<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

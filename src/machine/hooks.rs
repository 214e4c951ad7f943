//! Per-state behavior hooks.
//!
//! Each registered state carries up to three callbacks: `on_enter`,
//! `on_update` (the per-tick behavior), and `on_leave`. All three receive a
//! mutable reference to the host context `C`, the data the state acts on.

use super::state::StateId;

/// Callback fired once when a state is entered or left.
pub(crate) type LifecycleFn<C> = Box<dyn FnMut(&mut C)>;

/// Callback fired once per tick while its state is current. Returning
/// `Some(next)` requests a deferred transition, resolved before the next
/// tick's update.
pub(crate) type UpdateFn<S, C> = Box<dyn FnMut(&mut C) -> Option<S>>;

/// The behavior triple attached to one registered state.
///
/// All callbacks are optional; a state with no hooks is a valid do-nothing
/// mode. Hooks are owned exclusively by the machine that registers them and
/// carry no `Send`/`Sync` bounds: a machine is driven by exactly one logical
/// owner on one thread.
///
/// # Example
///
/// ```rust
/// use gambit::machine::StateHooks;
/// use gambit::state_id;
///
/// state_id! {
///     enum Mood {
///         Calm,
///         Angry,
///     }
/// }
///
/// struct Npc {
///     insults_heard: u32,
/// }
///
/// let hooks: StateHooks<Mood, Npc> = StateHooks::new()
///     .on_enter(|npc: &mut Npc| npc.insults_heard = 0)
///     .on_update(|npc: &mut Npc| {
///         if npc.insults_heard > 2 {
///             Some(Mood::Angry)
///         } else {
///             None
///         }
///     });
/// ```
pub struct StateHooks<S: StateId, C: 'static> {
    pub(crate) on_enter: Option<LifecycleFn<C>>,
    pub(crate) on_update: Option<UpdateFn<S, C>>,
    pub(crate) on_leave: Option<LifecycleFn<C>>,
}

impl<S: StateId, C: 'static> StateHooks<S, C> {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_update: None,
            on_leave: None,
        }
    }

    /// Set the callback fired when the state becomes current.
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Set the per-tick callback. Returning `Some(next)` from it requests a
    /// deferred transition (last request in a tick wins).
    pub fn on_update<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut C) -> Option<S> + 'static,
    {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Set the callback fired when the state stops being current.
    pub fn on_leave<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        self.on_leave = Some(Box::new(f));
        self
    }
}

impl<S: StateId, C: 'static> Default for StateHooks<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

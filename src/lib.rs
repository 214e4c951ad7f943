//! Gambit: tick-driven state machines and weighted selection for game logic.
//!
//! Gambit packages the engine-independent core of entity gameplay code: a
//! per-tick finite state machine, a weighted loot table, and a bidirectional
//! map. No rendering, physics, or scene graph — the host engine calls
//! [`StateMachine::update`] once per frame and everything else is plain
//! in-memory data.
//!
//! # Core Concepts
//!
//! - **StateMachine**: registered states with enter/update/leave hooks,
//!   immediate or deferred transitions, and a transition log
//! - **WeightedTable**: proportional random draws over (value, weight)
//!   entries, with an injected random source for deterministic tests
//! - **BiMap**: a 1:1 mapping queryable from either side
//! - **Snapshot**: serializable machine state for save/load
//!
//! Everything is single-owner and single-threaded: one entity owns and
//! drives each machine or table. A multi-threaded host adds its own mutex.
//!
//! # Example
//!
//! ```rust
//! use gambit::machine::{MachineBuilder, StateHooks};
//! use gambit::state_id;
//!
//! state_id! {
//!     enum Mood {
//!         Idle,
//!         Alert,
//!     }
//! }
//!
//! struct World {
//!     noise: u32,
//!     ticks_alert: u32,
//! }
//!
//! let mut world = World { noise: 0, ticks_alert: 0 };
//!
//! let mut brain = MachineBuilder::new()
//!     .state(
//!         Mood::Idle,
//!         StateHooks::new().on_update(|w: &mut World| {
//!             if w.noise > 3 {
//!                 Some(Mood::Alert)
//!             } else {
//!                 None
//!             }
//!         }),
//!     )
//!     .state(
//!         Mood::Alert,
//!         StateHooks::new().on_update(|w: &mut World| {
//!             w.ticks_alert += 1;
//!             None
//!         }),
//!     )
//!     .initial(Mood::Idle)
//!     .build(&mut world)
//!     .unwrap();
//!
//! brain.update(&mut world); // quiet tick, stays Idle
//! world.noise = 5;
//! brain.update(&mut world); // Idle requests Alert for next tick
//! brain.update(&mut world); // Alert applied, then ticks
//!
//! assert_eq!(brain.current(), Some(&Mood::Alert));
//! assert_eq!(world.ticks_alert, 1);
//! ```

pub mod bimap;
pub mod machine;
pub mod snapshot;
pub mod table;

// Re-export commonly used types
pub use bimap::BiMap;
pub use machine::{
    BuildError, MachineBuilder, MachineError, StateHooks, StateId, StateMachine, TransitionCause,
    TransitionLog, TransitionRecord,
};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
pub use table::{WeightedEntry, WeightedTable};

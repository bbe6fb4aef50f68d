//! `arena-behavior` — interchangeable behavior states and their contract.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`command`]  | `Command` enum — what a state asks the host to do             |
//! | [`context`]  | `BattleView` (read-only snapshot), `TurnContext` (shared state) |
//! | [`registry`] | `Subscriptions` — the event-dispatch registry states join     |
//! | [`state`]    | `BehaviorState` trait, `Activation` counters                  |
//! | [`states`]   | The built-in roster (narrow lock, track, zigzag, anti-gravity) |
//!
//! # Lifecycle
//!
//! A state cycles Disabled → Enabled → Disabled any number of times.
//! `enable` resets the per-activation counters and subscribes the event
//! classes the state cares about; every callback and `execute` runs only
//! while enabled; `disable` unconditionally releases the subscriptions and
//! returns the activation's [`ActivationReport`][arena_ledger::ActivationReport]
//! for the manager to put on the ledger.
//!
//! States never touch the host directly: `execute` and the event hooks
//! return [`Command`]s, and the caller applies them.  That keeps a state's
//! side effects bounded to its own counters and the shared track store it is
//! handed through [`TurnContext`].

pub mod command;
pub mod context;
pub mod registry;
pub mod state;
pub mod states;


pub use command::Command;
pub use context::{BattleView, TurnContext};
pub use registry::Subscriptions;
pub use state::{Activation, BehaviorState};
pub use states::{AntiGravityState, NarrowLockState, TrackState, ZigZagState};

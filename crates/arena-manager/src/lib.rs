//! `arena-manager` — picks the behavior state and runs the turn loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`manager`]  | `StateManager` — registration, selection, event dispatch    |
//! | [`observer`] | `BattleObserver`, `NoopObserver`                            |
//! | [`driver`]   | `BattleDriver<H>` — per-turn loop over a [`HostPort`]       |
//! | [`error`]    | `ManagerError`, `ManagerResult<T>`                          |
//!
//! # Turn shape
//!
//! ```text
//! for each turn:
//!   ① Poll    — drain the host's buffered sensor events.
//!   ② Dispatch — forward each event to the active state (if subscribed);
//!                the state updates the shared track model and may emit
//!                commands.
//!   ③ Tick    — reselect if the active state went invalid (or none is
//!                active), then execute the active state exactly once.
//!   ④ Apply   — push every emitted command through the host port and
//!                close the turn.
//! ```
//!
//! Everything is synchronous and single-threaded: the shared track store
//! and the active-state pointer are only ever written by the manager and the
//! currently active state, which is the entire concurrency argument.
//!
//! [`HostPort`]: arena_host::HostPort

pub mod driver;
pub mod error;
pub mod manager;
pub mod observer;

#[cfg(test)]
mod tests;

pub use driver::BattleDriver;
pub use error::{ManagerError, ManagerResult};
pub use manager::StateManager;
pub use observer::{BattleObserver, NoopObserver};

//! `arena-ledger` — historical performance of each behavior state.
//!
//! One ledger instance is owned by the state manager and fed on every
//! state deactivation; it replaces the shared static statistics a naive
//! implementation would hang off each state class.  Records aggregate by
//! `(state, opponent count)` because a state that shines one-on-one may be
//! hopeless in a melee — the opponent count at deactivation time is the
//! context key.

mod ledger;

#[cfg(test)]
mod tests;

pub use ledger::{ActivationReport, PerfRecord, PerformanceLedger};

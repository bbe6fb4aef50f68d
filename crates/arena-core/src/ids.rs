//! Strongly typed behavior-state identifier.
//!
//! `StateId` is the registration index of a behavior state in the manager.
//! Registration order is load-bearing: it is the deterministic tie-break for
//! performance-score comparisons, so the id doubles as a priority.

use std::fmt;

/// Index of a behavior state in the manager's registration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateId(pub u16);

impl StateId {
    /// Sentinel meaning "no valid ID" — equivalent to `u16::MAX`.
    pub const INVALID: StateId = StateId(u16::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for StateId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

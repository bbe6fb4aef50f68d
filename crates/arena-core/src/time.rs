//! Battle time model.
//!
//! Time is the host's monotonically increasing turn counter, represented as
//! a `Tick`.  The core never derives wall-clock time: every duration it
//! cares about (activation length, time since a sighting) is a tick count.

use std::fmt;

/// An absolute battle turn counter.
///
/// Stored as `u64`: the host's counter is non-negative and a battle never
/// comes close to overflowing it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` turns after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, clamped to zero.
    ///
    /// Host clock anomalies can deliver an event stamped later than the
    /// current turn; a negative elapsed time must never reach decision
    /// logic, so the subtraction saturates.
    #[inline]
    pub fn saturating_since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

//! Control commands — the actions a state can request within a turn.
//!
//! Commands are produced by [`BehaviorState`][crate::BehaviorState] methods
//! and applied by the caller (the manager's driver, or the host adapter in a
//! live battle).  Multiple commands may be issued per turn; later commands of
//! the same kind supersede earlier ones, matching host semantics for `set_*`
//! actuation calls.

/// An action requested from the host for the current turn.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Turn the radar by the given angle, radians, clockwise positive.
    TurnRadar(f64),

    /// Turn the gun by the given angle, radians, clockwise positive.
    TurnGun(f64),

    /// Turn the body by the given angle, radians, clockwise positive.
    TurnBody(f64),

    /// Drive the given distance along the current body heading.  Negative
    /// values back up.
    Ahead(f64),

    /// Fire a bullet with the given power.
    Fire(f64),

    /// Force a radar scan this turn even if the radar did not move.
    Scan,
}

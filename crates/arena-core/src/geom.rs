//! Arena coordinates and angle math.
//!
//! The arena uses the host's compass convention: an angle of 0 points north
//! (+y), angles grow clockwise, and the unit vector for angle `θ` is
//! `(sin θ, cos θ)`.  All angles are radians unless a name says otherwise.
//!
//! Coordinates are `f64`.  A battle tracks at most a dozen opponents, so
//! there is no memory case for single precision, and the host reports
//! doubles.

use std::f64::consts::{PI, TAU};

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Wrap an absolute angle into `[0, 2π)`.
#[inline]
pub fn normalize_absolute(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Wrap a relative angle (a turn) into `(-π, π]`.
///
/// Turning commands should always be normalized this way so the agent never
/// turns the long way around.
#[inline]
pub fn normalize_relative(angle: f64) -> f64 {
    let a = normalize_absolute(angle);
    if a > PI { a - TAU } else { a }
}

// ── Point2 ────────────────────────────────────────────────────────────────────

/// A position on the battlefield.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Absolute compass angle from `self` to `other`, in `[0, 2π)`.
    ///
    /// Note the argument order of `atan2`: with the north-clockwise
    /// convention the x-delta is the sine component.
    #[inline]
    pub fn absolute_angle_to(self, other: Point2) -> f64 {
        normalize_absolute((other.x - self.x).atan2(other.y - self.y))
    }

    /// The point `distance` away from `self` along compass angle `angle`.
    #[inline]
    pub fn project(self, angle: f64, distance: f64) -> Point2 {
        Point2 {
            x: self.x + angle.sin() * distance,
            y: self.y + angle.cos() * distance,
        }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

/// The owning agent's position and body heading for one turn.
///
/// Geometry queries on tracked opponents take a `&Pose` argument rather than
/// holding a reference back to the agent: the owner moves every turn even
/// when an opponent is not re-observed, so derived bearings and distances
/// must never be cached against a stale pose.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Point2,
    /// Body heading, compass radians.
    pub heading_radians: f64,
}

impl Pose {
    #[inline]
    pub fn new(position: Point2, heading_radians: f64) -> Self {
        Self { position, heading_radians }
    }

    /// Relative bearing from this pose to `target`, in `(-π, π]`.
    #[inline]
    pub fn bearing_to(self, target: Point2) -> f64 {
        normalize_relative(self.position.absolute_angle_to(target) - self.heading_radians)
    }
}

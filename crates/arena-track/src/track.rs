//! Per-opponent kinematic record.

use std::cmp::Ordering;

use arena_core::{Affinity, Point2, Pose, ScanEvent, Tick};

use crate::GravityPoint;

/// Everything known about one opponent, updated on every sighting.
///
/// The record keeps a one-step heading history (`prev_heading*` holds the
/// heading exactly one observation back, not an unbounded trail) so turn-rate
/// estimates survive a single stale frame.  `updates` increments exactly once
/// per observation and never decreases.
#[derive(Clone, Debug)]
pub struct BotTrack {
    /// Sanitized name — the canonical key in the owning [`TrackStore`][crate::TrackStore].
    pub name: String,
    pub energy: f64,
    /// Body heading as last seen, degrees.
    pub heading: f64,
    /// Body heading as last seen, radians.
    pub heading_radians: f64,
    /// Heading from the observation before the current one, degrees.
    pub prev_heading: f64,
    /// Heading from the observation before the current one, radians.
    pub prev_heading_radians: f64,
    pub velocity: f64,
    /// Absolute battlefield position at the last sighting.
    pub position: Point2,
    /// Turn of the last observation.
    pub last_seen: Tick,
    /// Observations recorded for this opponent.  Monotone.
    pub updates: u32,
    /// Anti-gravity repulsion weight.  Seeded from the engine config by
    /// affinity at creation; movement states may tune it afterwards.
    pub strength: f64,
    /// Roster classification captured at sighting time.
    pub affinity: Affinity,
    /// Cleared when a death notification prunes this record; flagged
    /// records are invisible to every store query.
    pub(crate) alive: bool,
}

impl BotTrack {
    /// Build a record from a first sighting.
    ///
    /// Counts as observation #1.  The previous-heading pair is seeded with
    /// the current heading: the one-step lag is only meaningful from the
    /// second observation on, and a phantom zero heading would poison any
    /// heading-delta math on the very first turn.
    pub(crate) fn from_scan(name: String, scan: &ScanEvent, owner: &Pose, strength: f64) -> Self {
        Self {
            name,
            energy:               scan.energy,
            heading:              scan.heading,
            heading_radians:      scan.heading_radians,
            prev_heading:         scan.heading,
            prev_heading_radians: scan.heading_radians,
            velocity:             scan.velocity,
            position:             sighted_position(scan, owner),
            last_seen:            scan.time,
            updates:              1,
            strength,
            affinity:             scan.affinity,
            alive:                true,
        }
    }

    /// Fold a new sighting into the record.
    ///
    /// Overwrites, never merges: the position is recomputed absolutely from
    /// the event and the owner's current pose.  The heading pair shifts into
    /// the previous-heading slots first.
    pub(crate) fn update(&mut self, scan: &ScanEvent, owner: &Pose) {
        self.prev_heading         = self.heading;
        self.prev_heading_radians = self.heading_radians;

        self.energy          = scan.energy;
        self.heading         = scan.heading;
        self.heading_radians = scan.heading_radians;
        self.velocity        = scan.velocity;
        self.position        = sighted_position(scan, owner);
        self.last_seen       = scan.time;
        self.updates += 1;
    }

    // ── Derived geometry (live owner pose, never cached) ──────────────────

    /// Relative bearing from `owner` to this opponent, `(-π, π]`.
    #[inline]
    pub fn bearing_radians(&self, owner: &Pose) -> f64 {
        owner.bearing_to(self.position)
    }

    /// Relative bearing from `owner` to this opponent, degrees.
    #[inline]
    pub fn bearing_degrees(&self, owner: &Pose) -> f64 {
        self.bearing_radians(owner).to_degrees()
    }

    /// Absolute compass angle from `owner` to this opponent, `[0, 2π)`.
    #[inline]
    pub fn absolute_angle_from(&self, owner: &Pose) -> f64 {
        owner.position.absolute_angle_to(self.position)
    }

    /// Distance from `owner` to this opponent.
    #[inline]
    pub fn distance_to(&self, owner: &Pose) -> f64 {
        owner.position.distance_to(self.position)
    }

    // ── Derived combat quantities ─────────────────────────────────────────

    /// The repulsion source this opponent projects for movement planning.
    #[inline]
    pub fn gravity_point(&self) -> GravityPoint {
        GravityPoint::new(self.position, self.strength)
    }

    /// Turns elapsed since the last sighting, clamped to zero under host
    /// clock anomalies.
    #[inline]
    pub fn time_since_seen(&self, now: Tick) -> u64 {
        now.saturating_since(self.last_seen)
    }

    #[inline]
    pub fn is_hostile(&self) -> bool {
        self.affinity.is_hostile()
    }

    #[inline]
    pub fn is_allied(&self) -> bool {
        self.affinity.is_allied()
    }
}

impl std::fmt::Display for BotTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} e={:.1} h={:.1}° v={:.1} at {} ({} updates, last {})",
            self.name, self.energy, self.heading, self.velocity,
            self.position, self.updates, self.last_seen,
        )
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

/// Compare two tracks by energy, ascending.
///
/// An explicit comparator rather than an `Ord` impl: energy order is one of
/// several useful orderings, and a stable sort with this function preserves
/// insertion order for equal energies.
#[inline]
pub fn by_energy(a: &BotTrack, b: &BotTrack) -> Ordering {
    a.energy.total_cmp(&b.energy)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Absolute position of a sighted robot: the owner's position projected along
/// `owner heading + event bearing` by the reported distance.
#[inline]
fn sighted_position(scan: &ScanEvent, owner: &Pose) -> Point2 {
    owner
        .position
        .project(owner.heading_radians + scan.bearing_radians, scan.distance)
}

//! Sensor event vocabulary shared across all `arena-*` crates.
//!
//! The host adapter translates raw host callbacks into these types; inside
//! the core they are the only representation of what the sensors reported.
//! Events are delivered synchronously within a turn, always before the
//! turn's `execute` runs.

use crate::Tick;

// ── Affinity ──────────────────────────────────────────────────────────────────

/// Whether a sighted robot is on our side.
///
/// Team membership is host-provided ground truth, resolved by the adapter at
/// translation time — the core never infers it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affinity {
    Hostile,
    Allied,
}

impl Affinity {
    #[inline]
    pub fn is_hostile(self) -> bool {
        matches!(self, Affinity::Hostile)
    }

    #[inline]
    pub fn is_allied(self) -> bool {
        matches!(self, Affinity::Allied)
    }
}

// ── ScanEvent ─────────────────────────────────────────────────────────────────

/// One radar sighting of another robot.
///
/// `bearing_radians` is relative to the owner's body heading at scan time;
/// the absolute position is recovered by the kinematic model from the
/// owner's pose, not carried in the event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanEvent {
    /// Raw sighted name; the kinematic model sanitizes it into the
    /// canonical key.
    pub name: String,
    pub energy: f64,
    /// Body heading of the sighted robot, degrees.
    pub heading: f64,
    /// Body heading of the sighted robot, radians.
    pub heading_radians: f64,
    pub velocity: f64,
    /// Bearing from the owner to the sighted robot, relative to the owner's
    /// body heading.
    pub bearing_radians: f64,
    pub distance: f64,
    /// Host turn at which the sighting was made.
    pub time: Tick,
    /// Roster classification resolved by the adapter.
    pub affinity: Affinity,
}

// ── SensorEvent ───────────────────────────────────────────────────────────────

/// Any sensor callback the host can deliver within a turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorEvent {
    /// The radar swept over another robot.
    Scan(ScanEvent),

    /// An enemy bullet struck the owner.  `power` is the firing power; the
    /// energy lost follows the fixed damage formula in [`crate::combat`].
    HitByBullet { power: f64 },

    /// A robot died.  The kinematic model prunes its record so stale
    /// geometry can never be served for the name again.
    BotDeath { name: String },
}

impl SensorEvent {
    /// The subscription class this event is dispatched under.
    #[inline]
    pub fn class(&self) -> EventClass {
        match self {
            SensorEvent::Scan(_)            => EventClass::Scan,
            SensorEvent::HitByBullet { .. } => EventClass::HitByBullet,
            SensorEvent::BotDeath { .. }    => EventClass::BotDeath,
        }
    }
}

// ── EventClass ────────────────────────────────────────────────────────────────

/// The classes a behavior state can subscribe to while enabled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventClass {
    Scan,
    HitByBullet,
    BotDeath,
}

impl EventClass {
    /// Number of distinct classes; sizes the subscription registry.
    pub const COUNT: usize = 3;

    /// All classes, in dispatch order.
    pub const ALL: [EventClass; Self::COUNT] =
        [EventClass::Scan, EventClass::HitByBullet, EventClass::BotDeath];

    /// Dense index for registry storage.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            EventClass::Scan        => 0,
            EventClass::HitByBullet => 1,
            EventClass::BotDeath    => 2,
        }
    }

    /// Human-readable label, useful for observer output.
    pub fn as_str(self) -> &'static str {
        match self {
            EventClass::Scan        => "scan",
            EventClass::HitByBullet => "hit-by-bullet",
            EventClass::BotDeath    => "bot-death",
        }
    }
}

impl std::fmt::Display for EventClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

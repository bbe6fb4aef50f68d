//! Battle context handed to behavior states.

use arena_core::{BotRng, EngineConfig, Pose, Tick};
use arena_track::TrackStore;

// ── BattleView ────────────────────────────────────────────────────────────────

/// Read-only snapshot of the host-visible battle situation for one turn.
///
/// Built fresh from host queries before each dispatch and tick, so validity
/// predicates and execute decisions always see the current turn — never a
/// cached pose or count.
#[derive(Copy, Clone, Debug, Default)]
pub struct BattleView {
    /// Current host turn.
    pub now: Tick,

    /// The owning agent's position and body heading.
    pub owner: Pose,

    /// Live opponents remaining, per the host.
    pub opponent_count: usize,

    /// Radar turn still pending from an earlier command, radians.
    pub radar_turn_remaining: f64,

    /// Absolute radar heading, compass radians.
    pub radar_heading_radians: f64,

    /// Absolute gun heading, compass radians.
    pub gun_heading_radians: f64,

    /// Battlefield dimensions.
    pub arena_width: f64,
    pub arena_height: f64,
}

impl BattleView {
    /// `true` when the pending radar turn is effectively finished and a new
    /// sweep should be committed.
    #[inline]
    pub fn radar_idle(&self, config: &EngineConfig) -> bool {
        self.radar_turn_remaining.abs() < config.radar_slip_radians
    }
}

// ── TurnContext ───────────────────────────────────────────────────────────────

/// Everything the active state may read and write during a callback.
///
/// Only the manager constructs one, and only for the currently active state
/// — the single-writer discipline that lets the shared track store go
/// unlocked in a synchronous turn loop.
pub struct TurnContext<'a> {
    /// This turn's host snapshot.
    pub view: BattleView,

    /// The shared opponent model.  The active state updates it from events.
    pub tracks: &'a mut TrackStore,

    /// The agent's deterministic RNG.
    pub rng: &'a mut BotRng,

    /// Engine tuning knobs.
    pub config: &'a EngineConfig,
}

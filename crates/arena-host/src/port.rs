//! The `HostPort` trait — everything the core asks of the arena host.

use arena_behavior::{BattleView, Command};
use arena_core::{Affinity, Point2, Pose, SensorEvent, Tick};

/// The host-facing surface of the decision core.
///
/// Queries are synchronous reads of the host's current turn; actuation calls
/// are `set_*`-style and take effect when the turn closes.  Event intake is
/// a per-turn drain: the host buffers its sensor callbacks and the driver
/// collects them all before running the turn's decision pass, so decisions
/// always see the turn's complete sensor picture.
pub trait HostPort {
    // ── Queries ───────────────────────────────────────────────────────────

    /// The owning agent's battlefield position.
    fn position(&self) -> Point2;

    /// The owning agent's body heading, compass radians.
    fn heading_radians(&self) -> f64;

    /// Current host turn.
    fn time(&self) -> Tick;

    /// Radar turn still pending from an earlier command, radians.
    fn radar_turn_remaining_radians(&self) -> f64;

    /// Absolute radar heading, compass radians.
    fn radar_heading_radians(&self) -> f64;

    /// Absolute gun heading, compass radians.
    fn gun_heading_radians(&self) -> f64;

    /// Live opponents remaining.
    fn opponent_count(&self) -> usize;

    /// Battlefield `(width, height)`.
    fn arena_size(&self) -> (f64, f64);

    /// Host ground truth: is `name` on our team?
    fn is_teammate(&self, name: &str) -> bool;

    /// Host ground truth: is `name` an enemy?
    fn is_enemy(&self, name: &str) -> bool;

    // ── Actuation ─────────────────────────────────────────────────────────

    fn set_turn_radar_radians(&mut self, radians: f64);
    fn set_turn_gun_radians(&mut self, radians: f64);
    fn set_turn_body_radians(&mut self, radians: f64);
    fn set_ahead(&mut self, distance: f64);
    fn set_fire(&mut self, power: f64);

    /// Force a radar scan this turn even if the radar did not move.
    fn trigger_scan(&mut self);

    // ── Event intake and turn boundary ────────────────────────────────────

    /// Drain the sensor events buffered for the current turn.
    fn poll_events(&mut self) -> Vec<SensorEvent>;

    /// Close the turn: the host executes the pending actuation and advances
    /// its clock.
    fn end_turn(&mut self);

    // ── Provided: adapter glue ────────────────────────────────────────────

    /// The owner's pose for this turn.
    fn pose(&self) -> Pose {
        Pose::new(self.position(), self.heading_radians())
    }

    /// Roster classification for a sighted name.
    fn classify(&self, name: &str) -> Affinity {
        if self.is_teammate(name) {
            Affinity::Allied
        } else {
            Affinity::Hostile
        }
    }

    /// Snapshot the host queries into the view handed to behavior states.
    fn view(&self) -> BattleView {
        let (arena_width, arena_height) = self.arena_size();
        BattleView {
            now: self.time(),
            owner: self.pose(),
            opponent_count: self.opponent_count(),
            radar_turn_remaining: self.radar_turn_remaining_radians(),
            radar_heading_radians: self.radar_heading_radians(),
            gun_heading_radians: self.gun_heading_radians(),
            arena_width,
            arena_height,
        }
    }

    /// Apply one command to the matching actuation call.
    fn apply(&mut self, command: &Command) {
        match *command {
            Command::TurnRadar(r) => self.set_turn_radar_radians(r),
            Command::TurnGun(r)   => self.set_turn_gun_radians(r),
            Command::TurnBody(r)  => self.set_turn_body_radians(r),
            Command::Ahead(d)     => self.set_ahead(d),
            Command::Fire(p)      => self.set_fire(p),
            Command::Scan         => self.trigger_scan(),
        }
    }
}

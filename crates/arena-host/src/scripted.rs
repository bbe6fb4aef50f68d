//! `ScriptedHost` — a deterministic in-process arena host.
//!
//! # Why this exists
//!
//! The real host only runs inside the arena process.  Driving the decision
//! core in tests and demos needs a host that replays a pre-written sensor
//! script and honors actuation calls with crude-but-deterministic turn
//! kinematics.  It is a stand-in, not a physics engine: bullets don't fly,
//! energy doesn't drain, and movement is exact.
//!
//! # Turn model
//!
//! Actuation calls buffer until [`end_turn`][HostPort::end_turn], then apply
//! at once: body and gun turns land in full, movement follows the new
//! heading and clamps to the arena, and the radar works off its pending
//! angle at a fixed rate per turn — so radar re-trigger logic in behavior
//! states is exercised for real.

use std::collections::BTreeMap;

use arena_behavior::Command;
use arena_core::{Point2, Pose, SensorEvent, Tick};

use crate::HostPort;

/// Radar slew per turn, radians.
const RADAR_RATE: f64 = std::f64::consts::PI / 4.0;

/// A scripted implementation of [`HostPort`].
pub struct ScriptedHost {
    now: Tick,
    pose: Pose,
    arena: (f64, f64),
    gun_heading: f64,
    radar_heading: f64,
    /// Unserved radar turn, signed.
    radar_pending: f64,
    opponents: usize,
    teammates: Vec<String>,

    /// Scripted events keyed by the turn they arrive.
    script: BTreeMap<Tick, Vec<SensorEvent>>,

    /// Every command applied, tagged with the turn it was issued.
    pub issued: Vec<(Tick, Command)>,

    // Actuation buffered for the current turn.
    pending_body_turn: f64,
    pending_gun_turn: f64,
    pending_ahead: f64,
}

impl ScriptedHost {
    /// A host with the agent starting at `pose` in an arena of the given
    /// size, with `opponents` enemies at large.
    pub fn new(arena_width: f64, arena_height: f64, pose: Pose, opponents: usize) -> Self {
        Self {
            now: Tick::ZERO,
            pose,
            arena: (arena_width, arena_height),
            gun_heading: pose.heading_radians,
            radar_heading: pose.heading_radians,
            radar_pending: 0.0,
            opponents,
            teammates: Vec::new(),
            script: BTreeMap::new(),
            issued: Vec::new(),
            pending_body_turn: 0.0,
            pending_gun_turn: 0.0,
            pending_ahead: 0.0,
        }
    }

    /// Declare a name as a teammate for roster queries.
    pub fn add_teammate(&mut self, name: impl Into<String>) {
        self.teammates.push(name.into());
    }

    /// Queue `event` for delivery at `tick`.
    pub fn push_event(&mut self, tick: Tick, event: SensorEvent) {
        self.script.entry(tick).or_default().push(event);
    }

    /// Queue a whole script, e.g. from [`load_script_reader`][crate::load_script_reader].
    pub fn push_script(&mut self, script: impl IntoIterator<Item = (Tick, SensorEvent)>) {
        for (tick, event) in script {
            self.push_event(tick, event);
        }
    }

    /// Scripted events still undelivered.
    pub fn pending_events(&self) -> usize {
        self.script.values().map(Vec::len).sum()
    }

    /// Commands issued on `tick`.
    pub fn issued_at(&self, tick: Tick) -> Vec<&Command> {
        self.issued
            .iter()
            .filter(|(t, _)| *t == tick)
            .map(|(_, c)| c)
            .collect()
    }
}

impl HostPort for ScriptedHost {
    // ── Queries ───────────────────────────────────────────────────────────

    fn position(&self) -> Point2 {
        self.pose.position
    }

    fn heading_radians(&self) -> f64 {
        self.pose.heading_radians
    }

    fn time(&self) -> Tick {
        self.now
    }

    fn radar_turn_remaining_radians(&self) -> f64 {
        self.radar_pending
    }

    fn radar_heading_radians(&self) -> f64 {
        self.radar_heading
    }

    fn gun_heading_radians(&self) -> f64 {
        self.gun_heading
    }

    fn opponent_count(&self) -> usize {
        self.opponents
    }

    fn arena_size(&self) -> (f64, f64) {
        self.arena
    }

    fn is_teammate(&self, name: &str) -> bool {
        self.teammates.iter().any(|t| t == name)
    }

    fn is_enemy(&self, name: &str) -> bool {
        !self.is_teammate(name)
    }

    // ── Actuation (buffered until end_turn) ───────────────────────────────

    fn set_turn_radar_radians(&mut self, radians: f64) {
        self.radar_pending = radians;
        self.issued.push((self.now, Command::TurnRadar(radians)));
    }

    fn set_turn_gun_radians(&mut self, radians: f64) {
        self.pending_gun_turn = radians;
        self.issued.push((self.now, Command::TurnGun(radians)));
    }

    fn set_turn_body_radians(&mut self, radians: f64) {
        self.pending_body_turn = radians;
        self.issued.push((self.now, Command::TurnBody(radians)));
    }

    fn set_ahead(&mut self, distance: f64) {
        self.pending_ahead = distance;
        self.issued.push((self.now, Command::Ahead(distance)));
    }

    fn set_fire(&mut self, power: f64) {
        self.issued.push((self.now, Command::Fire(power)));
    }

    fn trigger_scan(&mut self) {
        self.issued.push((self.now, Command::Scan));
    }

    // ── Event intake and turn boundary ────────────────────────────────────

    fn poll_events(&mut self) -> Vec<SensorEvent> {
        let mut events = self.script.remove(&self.now).unwrap_or_default();
        for event in &mut events {
            match event {
                // Adapter duty: resolve affinity from the roster before the
                // event enters the core.
                SensorEvent::Scan(scan) => {
                    scan.affinity = self.classify(&scan.name);
                }
                // The host's live-opponent count drops as enemies die.
                SensorEvent::BotDeath { name } => {
                    if self.is_enemy(name) {
                        self.opponents = self.opponents.saturating_sub(1);
                    }
                }
                SensorEvent::HitByBullet { .. } => {}
            }
        }
        events
    }

    fn end_turn(&mut self) {
        // Body, then movement along the new heading, clamped to the arena.
        self.pose.heading_radians =
            arena_core::normalize_absolute(self.pose.heading_radians + self.pending_body_turn);
        let raw = self
            .pose
            .position
            .project(self.pose.heading_radians, self.pending_ahead);
        self.pose.position = Point2::new(
            raw.x.clamp(0.0, self.arena.0),
            raw.y.clamp(0.0, self.arena.1),
        );

        self.gun_heading =
            arena_core::normalize_absolute(self.gun_heading + self.pending_gun_turn);

        // Radar serves its pending angle at a fixed rate.
        let served = self.radar_pending.clamp(-RADAR_RATE, RADAR_RATE);
        self.radar_heading = arena_core::normalize_absolute(self.radar_heading + served);
        self.radar_pending -= served;

        self.pending_body_turn = 0.0;
        self.pending_gun_turn = 0.0;
        self.pending_ahead = 0.0;
        self.now = self.now + 1;
    }
}

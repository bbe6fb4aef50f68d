//! Duel state: narrow radar lock on the single remaining opponent.

use std::f64::consts::PI;

use arena_core::{normalize_relative, EventClass, ScanEvent};
use arena_ledger::ActivationReport;

use crate::{Activation, BattleView, BehaviorState, Command, Subscriptions, TurnContext};

use super::{fire_power_for, gun_solution, prune_dead, resweep};

/// Radar overshoot factor: turning past the target by this multiple of the
/// offset keeps the lock through one turn of target motion.
const LOCK_FACTOR: f64 = 2.0;

/// Keeps the radar slaved to one enemy and returns fire.
///
/// Only sound in a duel — with a second opponent alive the narrow beam goes
/// blind to everything off-lock, so `is_valid` restricts it to one-on-one.
pub struct NarrowLockState {
    activation: Activation,
}

impl NarrowLockState {
    pub fn new() -> Self {
        Self { activation: Activation::default() }
    }
}

impl Default for NarrowLockState {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorState for NarrowLockState {
    fn name(&self) -> &'static str {
        "narrow-lock"
    }

    fn is_valid(&self, view: &BattleView) -> bool {
        view.opponent_count <= 1
    }

    fn enable(&mut self, view: &BattleView, subs: &mut Subscriptions) {
        self.activation.begin(view.now);
        subs.subscribe(EventClass::Scan);
        subs.subscribe(EventClass::HitByBullet);
        subs.subscribe(EventClass::BotDeath);
    }

    fn disable(&mut self, view: &BattleView, subs: &mut Subscriptions) -> ActivationReport {
        subs.clear();
        self.activation.report(view.now)
    }

    fn execute(&mut self, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        // Without a lock the radar drifts idle; commit a half sweep to
        // reacquire, then force the scan so the lock re-arms this turn.
        let mut commands = Vec::new();
        if let Some(cmd) = resweep(ctx, PI) {
            commands.push(cmd);
        }
        commands.push(Command::Scan);
        commands
    }

    fn on_scan(&mut self, scan: &ScanEvent, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        let view = ctx.view;
        let track = ctx.tracks.observe(scan, &view.owner);
        if !track.is_hostile() {
            return vec![];
        }

        let absolute = track.absolute_angle_from(&view.owner);
        let distance = track.distance_to(&view.owner);

        // Narrow lock: swing the radar past the target so it stays painted.
        let radar_turn =
            normalize_relative(absolute - view.radar_heading_radians) * LOCK_FACTOR;
        let mut commands = vec![Command::TurnRadar(radar_turn)];

        let (gun_turn, on_target) = gun_solution(&view, absolute);
        commands.push(Command::TurnGun(gun_turn));
        if on_target {
            commands.push(Command::Fire(fire_power_for(distance)));
        }
        commands
    }

    fn on_hit_by_bullet(&mut self, power: f64, _ctx: &mut TurnContext<'_>) -> Vec<Command> {
        self.activation.absorb_hit(power);
        vec![]
    }

    fn on_bot_death(&mut self, name: &str, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        prune_dead(ctx.tracks, name);
        vec![]
    }
}

//! General-purpose state: full radar sweeps, turret on the nearest enemy.

use std::f64::consts::TAU;

use arena_core::{normalize_relative, EventClass, ScanEvent};
use arena_ledger::ActivationReport;

use crate::{Activation, BattleView, BehaviorState, Command, Subscriptions, TurnContext};

use super::{fire_power_for, gun_solution, prune_dead, resweep};

/// Don't close past this range; inside it the state holds position.
const STANDOFF_DISTANCE: f64 = 150.0;

/// Longest approach leg commanded in one turn.
const MAX_APPROACH: f64 = 100.0;

/// Sweeps continuously, walks the turret onto the nearest live enemy, and
/// closes to a standoff range.  Valid at any opponent count — the baseline
/// the ledger measures the specialists against.
pub struct TrackState {
    activation: Activation,
}

impl TrackState {
    pub fn new() -> Self {
        Self { activation: Activation::default() }
    }
}

impl Default for TrackState {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorState for TrackState {
    fn name(&self) -> &'static str {
        "track"
    }

    fn is_valid(&self, _view: &BattleView) -> bool {
        true
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
        let view = ctx.view;
        let mut commands = Vec::new();
        if let Some(cmd) = resweep(ctx, TAU) {
            commands.push(cmd);
        }

        // Events have already landed this turn, so the nearest-enemy answer
        // is as fresh as it gets.
        if let Some(target) = ctx.tracks.nearest_hostile(&view.owner) {
            let absolute = target.absolute_angle_from(&view.owner);
            let distance = target.distance_to(&view.owner);

            let (gun_turn, on_target) = gun_solution(&view, absolute);
            commands.push(Command::TurnGun(gun_turn));
            if on_target {
                commands.push(Command::Fire(fire_power_for(distance)));
            }

            if distance > STANDOFF_DISTANCE {
                let body_turn =
                    normalize_relative(absolute - view.owner.heading_radians);
                commands.push(Command::TurnBody(body_turn));
                commands.push(Command::Ahead(
                    (distance - STANDOFF_DISTANCE).min(MAX_APPROACH),
                ));
            }
        }

        commands.push(Command::Scan);
        commands
    }

    fn on_scan(&mut self, scan: &ScanEvent, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        let owner = ctx.view.owner;
        ctx.tracks.observe(scan, &owner);
        vec![]
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

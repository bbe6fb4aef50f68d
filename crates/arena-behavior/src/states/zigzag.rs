//! Dodging state: perpendicular zig-zag legs with jittered reversals.

use std::f64::consts::{FRAC_PI_2, TAU};

use arena_core::{normalize_relative, EventClass, ScanEvent};
use arena_ledger::ActivationReport;

use crate::{Activation, BattleView, BehaviorState, Command, Subscriptions, TurnContext};

use super::{prune_dead, resweep};

/// Distance driven per turn along the current leg.
const LEG_STEP: f64 = 60.0;

/// Bounds on how many turns a leg lasts before reversing.
const LEG_TURNS_MIN: u32 = 6;
const LEG_TURNS_MAX: u32 = 14;

/// Strafes perpendicular to the nearest enemy, reversing on a randomized
/// cadence so bullet-aim extrapolation never settles.  Getting hit forces an
/// immediate reversal.
pub struct ZigZagState {
    activation: Activation,
    /// +1 or −1: which way along the perpendicular the current leg runs.
    direction: f64,
    /// Turns left before the next scheduled reversal.
    leg_remaining: u32,
}

impl ZigZagState {
    pub fn new() -> Self {
        Self {
            activation: Activation::default(),
            direction: 1.0,
            leg_remaining: 0,
        }
    }
}

impl Default for ZigZagState {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorState for ZigZagState {
    fn name(&self) -> &'static str {
        "zigzag"
    }

    fn is_valid(&self, _view: &BattleView) -> bool {
        true
    }

    fn enable(&mut self, view: &BattleView, subs: &mut Subscriptions) {
        self.activation.begin(view.now);
        // Force a fresh direction draw on the first execute of this
        // activation (enable has no RNG access by design).
        self.leg_remaining = 0;
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
        if self.leg_remaining == 0 {
            self.direction = ctx.rng.sign();
            self.leg_remaining = ctx.rng.gen_range(LEG_TURNS_MIN..=LEG_TURNS_MAX);
        } else {
            self.leg_remaining -= 1;
        }

        let mut commands = Vec::new();
        if let Some(cmd) = resweep(ctx, TAU) {
            commands.push(cmd);
        }

        // Strafe across the nearest enemy's line of sight; with nothing
        // tracked yet, just keep moving on the current heading.
        if let Some(target) = ctx.tracks.nearest_hostile(&view.owner) {
            let absolute = target.absolute_angle_from(&view.owner);
            let body_turn = normalize_relative(
                absolute + FRAC_PI_2 - view.owner.heading_radians,
            );
            commands.push(Command::TurnBody(body_turn));
        }
        commands.push(Command::Ahead(self.direction * LEG_STEP));

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
        // Whatever cadence we were on, it just got read.  Reverse next turn.
        self.leg_remaining = 0;
        vec![]
    }

    fn on_bot_death(&mut self, name: &str, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        prune_dead(ctx.tracks, name);
        vec![]
    }
}

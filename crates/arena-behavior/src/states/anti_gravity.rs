//! Melee state: movement down the anti-gravity repulsion gradient.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use arena_core::{normalize_relative, EventClass, Point2, ScanEvent};
use arena_ledger::ActivationReport;
use arena_track::{net_force, GravityPoint};

use crate::{Activation, BattleView, BehaviorState, Command, Subscriptions, TurnContext};

use super::{prune_dead, resweep};

/// Distance driven down the gradient per turn.
const GRADIENT_STEP: f64 = 100.0;

/// Below this net-force magnitude the field is effectively flat and moving
/// is noise, not avoidance.
const FORCE_DEADBAND: f64 = 1e-4;

/// Steers away from the weighted sum of every tracked robot's repulsion
/// plus the four walls.  Only worth running in a melee: with a single
/// opponent the gradient degenerates to "run straight away", which the
/// duel states do better.
pub struct AntiGravityState {
    activation: Activation,
}

impl AntiGravityState {
    pub fn new() -> Self {
        Self { activation: Activation::default() }
    }
}

impl Default for AntiGravityState {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorState for AntiGravityState {
    fn name(&self) -> &'static str {
        "anti-gravity"
    }

    fn is_valid(&self, view: &BattleView) -> bool {
        view.opponent_count >= 2
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
        let here = view.owner.position;

        let mut commands = Vec::new();
        if let Some(cmd) = resweep(ctx, TAU) {
            commands.push(cmd);
        }

        let sources = ctx
            .tracks
            .gravity_points()
            .chain(wall_points(here, &view, ctx.config.wall_strength));
        let (fx, fy) = net_force(sources, here);

        if fx.hypot(fy) > FORCE_DEADBAND {
            // Head down the gradient, but never command a destination
            // closer to a wall than the configured margin.
            let escape = fx.atan2(fy);
            let margin = ctx.config.wall_margin;
            let raw = here.project(escape, GRADIENT_STEP);
            let dest = Point2::new(
                raw.x.clamp(margin, view.arena_width - margin),
                raw.y.clamp(margin, view.arena_height - margin),
            );

            let distance = here.distance_to(dest);
            if distance > 1.0 {
                let mut turn = view.owner.bearing_to(dest);
                let mut travel = distance;
                // Backing up beats turning more than a quarter circle.
                if turn.abs() > FRAC_PI_2 {
                    turn = normalize_relative(turn + PI);
                    travel = -travel;
                }
                commands.push(Command::TurnBody(turn));
                commands.push(Command::Ahead(travel));
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

// ── Wall repulsion ────────────────────────────────────────────────────────────

/// One repulsion source per wall, at the perpendicular foot from `here`.
fn wall_points(here: Point2, view: &BattleView, strength: f64) -> [GravityPoint; 4] {
    [
        GravityPoint::new(Point2::new(here.x, 0.0), strength),
        GravityPoint::new(Point2::new(here.x, view.arena_height), strength),
        GravityPoint::new(Point2::new(0.0, here.y), strength),
        GravityPoint::new(Point2::new(view.arena_width, here.y), strength),
    ]
}

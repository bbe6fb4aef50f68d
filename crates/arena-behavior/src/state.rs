//! The `BehaviorState` trait — the unit of interchangeable control logic.

use arena_core::{bullet_damage, ScanEvent, Tick};
use arena_ledger::ActivationReport;

use crate::{BattleView, Command, Subscriptions, TurnContext};

/// One interchangeable behavior mode.
///
/// Implementations are registered with the manager and driven through a
/// Disabled → Enabled → Disabled cycle that may repeat for the whole battle.
/// The manager guarantees that `execute` and the event hooks are only called
/// between `enable` and `disable`, and that `execute` runs exactly once per
/// turn while enabled.
///
/// # Required methods
///
/// `name`, `is_valid`, `enable`, `disable`, and `execute`.  The event hooks
/// default to no-ops so a state only implements the callbacks it subscribes
/// to.
///
/// # Purity of `is_valid`
///
/// `is_valid` is consulted while the state is disabled (that is how it gets
/// selected), so it must be a pure read of the [`BattleView`] — no counter
/// resets, no subscription changes.
pub trait BehaviorState {
    /// Stable identity.  The manager rejects two registrations with the
    /// same name.
    fn name(&self) -> &'static str;

    /// Whether this state may be used under the current circumstances.
    fn is_valid(&self, view: &BattleView) -> bool;

    /// Begin an activation: reset per-activation counters and subscribe the
    /// event classes this state handles.
    fn enable(&mut self, view: &BattleView, subs: &mut Subscriptions);

    /// End the activation: release all subscriptions unconditionally and
    /// report the accumulated counters for the ledger.
    fn disable(&mut self, view: &BattleView, subs: &mut Subscriptions) -> ActivationReport;

    /// One turn of control while enabled.
    fn execute(&mut self, ctx: &mut TurnContext<'_>) -> Vec<Command>;

    /// The radar swept over a robot.
    ///
    /// Default: no commands (the sighting is ignored).
    fn on_scan(&mut self, _scan: &ScanEvent, _ctx: &mut TurnContext<'_>) -> Vec<Command> {
        vec![]
    }

    /// An enemy bullet hit the owner.
    ///
    /// Default: no commands (the hit is ignored).
    fn on_hit_by_bullet(&mut self, _power: f64, _ctx: &mut TurnContext<'_>) -> Vec<Command> {
        vec![]
    }

    /// A robot died.
    ///
    /// Default: no commands (the death is ignored).
    fn on_bot_death(&mut self, _name: &str, _ctx: &mut TurnContext<'_>) -> Vec<Command> {
        vec![]
    }
}

// ── Activation ────────────────────────────────────────────────────────────────

/// Per-activation counters every state carries.
///
/// Plain shared data rather than a base class: each state owns one directly
/// and may read its fields at will.
#[derive(Copy, Clone, Debug, Default)]
pub struct Activation {
    /// Turn at which the current activation began.
    pub started: Tick,
    /// Energy lost to bullet hits during the current activation.
    pub damage_taken: f64,
}

impl Activation {
    /// Reset for a fresh activation starting `now`.
    #[inline]
    pub fn begin(&mut self, now: Tick) {
        self.started = now;
        self.damage_taken = 0.0;
    }

    /// Fold in one incoming hit of the given bullet power.
    #[inline]
    pub fn absorb_hit(&mut self, power: f64) {
        self.damage_taken += bullet_damage(power);
    }

    /// The ledger entry for an activation ending `now`.
    #[inline]
    pub fn report(&self, now: Tick) -> ActivationReport {
        ActivationReport {
            damage_taken: self.damage_taken,
            turns_active: now.saturating_since(self.started),
        }
    }
}

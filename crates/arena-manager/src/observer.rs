//! Battle observer trait for progress reporting and diagnostics.

use arena_core::{EventClass, Tick};

/// Callbacks invoked by [`StateManager`][crate::StateManager] and
/// [`BattleDriver`][crate::BattleDriver] at key points in the turn loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — switch printer
///
/// ```rust,ignore
/// struct SwitchPrinter;
///
/// impl BattleObserver for SwitchPrinter {
///     fn on_state_switch(&mut self, from: Option<&'static str>, to: &'static str, tick: Tick) {
///         println!("{tick}: {} -> {to}", from.unwrap_or("<none>"));
///     }
/// }
/// ```
pub trait BattleObserver {
    /// A new state was enabled, replacing `from` (None on the first
    /// selection of the battle).
    fn on_state_switch(&mut self, _from: Option<&'static str>, _to: &'static str, _tick: Tick) {}

    /// The active state was disabled with no successor (battle end, or no
    /// valid candidate).
    fn on_state_retired(&mut self, _name: &'static str, _tick: Tick) {}

    /// Selection ran and found no valid state; the manager idles this turn.
    fn on_no_valid_state(&mut self, _tick: Tick) {}

    /// A sensor event arrived with no active state or no matching
    /// subscription and was dropped.  A no-op condition, not an error.
    fn on_event_dropped(&mut self, _class: EventClass, _tick: Tick) {}

    /// A turn finished; `commands` is how many commands were issued.
    fn on_turn_end(&mut self, _tick: Tick, _commands: usize) {}

    /// The driver finished the battle.
    fn on_battle_end(&mut self, _final_tick: Tick) {}
}

/// A [`BattleObserver`] that does nothing.  Use when you need to call the
/// manager but don't want callbacks.
pub struct NoopObserver;

impl BattleObserver for NoopObserver {}

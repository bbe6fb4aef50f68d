//! The `BattleDriver` — runs the per-turn loop over a host port.

use arena_host::HostPort;

use crate::{BattleObserver, StateManager};

/// Drives a [`StateManager`] against a [`HostPort`] one turn at a time.
///
/// Per turn: drain the host's buffered events, dispatch them all, then run
/// the manager's tick, apply every emitted command through the port, and
/// close the turn.  Events always land before `execute`, so execute-time
/// decisions see the turn's complete sensor picture; commands are all
/// applied before the turn closes, which is the host's deadline.
pub struct BattleDriver<H: HostPort> {
    pub manager: StateManager,
    pub host: H,
}

impl<H: HostPort> BattleDriver<H> {
    pub fn new(manager: StateManager, host: H) -> Self {
        Self { manager, host }
    }

    /// Run a single turn.  Returns the number of commands issued.
    pub fn run_turn<O: BattleObserver>(&mut self, observer: &mut O) -> usize {
        // Poll before snapshotting: event side effects (an enemy death
        // dropping the live count) must be visible to this turn's view.
        let events = self.host.poll_events();
        let view = self.host.view();

        let mut commands = Vec::new();
        for event in &events {
            commands.extend(self.manager.dispatch(event, &view, observer));
        }
        commands.extend(self.manager.tick(&view, observer));

        for command in &commands {
            self.host.apply(command);
        }
        observer.on_turn_end(view.now, commands.len());
        self.host.end_turn();
        commands.len()
    }

    /// Run `turns` turns, then retire the active state so its final
    /// activation lands on the ledger.
    pub fn run<O: BattleObserver>(&mut self, turns: u64, observer: &mut O) {
        for _ in 0..turns {
            self.run_turn(observer);
        }
        let view = self.host.view();
        self.manager.retire(&view, observer);
        observer.on_battle_end(view.now);
    }
}

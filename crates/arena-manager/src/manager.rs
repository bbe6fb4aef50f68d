//! The `StateManager` — registration, performance-ranked selection, and
//! event dispatch.

use arena_behavior::{BattleView, BehaviorState, Command, Subscriptions, TurnContext};
use arena_core::{ArenaResult, BotRng, EngineConfig, SensorEvent, StateId};
use arena_ledger::PerformanceLedger;
use arena_track::TrackStore;

use crate::{BattleObserver, ManagerError, ManagerResult};

/// Owns the registered behavior states, the shared opponent model, and the
/// performance ledger, and decides which state runs each turn.
///
/// Exactly one state is active at a time, or none — before the first
/// selection, and whenever every registered state is invalid for the
/// current situation (an explicit steady state, not an error).
pub struct StateManager {
    /// Registered states, in registration order.  Order is load-bearing:
    /// it breaks selection ties deterministically.
    states: Vec<Box<dyn BehaviorState>>,

    active: Option<StateId>,

    /// Event classes the active state is subscribed to.
    subs: Subscriptions,

    /// The shared opponent model, written only by the active state's
    /// callbacks.
    tracks: TrackStore,

    /// Historical performance, fed on every disable.
    ledger: PerformanceLedger,

    rng: BotRng,
    config: EngineConfig,
}

impl StateManager {
    /// Build a manager with the given tuning and RNG seed.
    pub fn new(config: EngineConfig, seed: u64) -> ArenaResult<Self> {
        config.validate()?;
        Ok(Self {
            states: Vec::new(),
            active: None,
            subs: Subscriptions::new(),
            tracks: TrackStore::new(&config),
            ledger: PerformanceLedger::new(&config),
            rng: BotRng::new(seed),
            config,
        })
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a state.  Registration order decides selection ties.
    ///
    /// Two states with the same declared name would alias each other in the
    /// ledger, so duplicates are rejected here rather than discovered as
    /// scrambled statistics later.
    pub fn add_state(&mut self, state: Box<dyn BehaviorState>) -> ManagerResult<StateId> {
        let name = state.name();
        if self.states.iter().any(|s| s.name() == name) {
            return Err(ManagerError::DuplicateState(name.to_string()));
        }
        let id = StateId(self.states.len() as u16);
        self.states.push(state);
        Ok(id)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The currently active state, if any.
    pub fn active(&self) -> Option<StateId> {
        self.active
    }

    /// Name of the currently active state, if any.
    pub fn active_name(&self) -> Option<&'static str> {
        self.active.map(|id| self.states[id.index()].name())
    }

    /// Declared name of a registered state.
    pub fn state_name(&self, id: StateId) -> &'static str {
        self.states[id.index()].name()
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The shared opponent model.
    pub fn tracks(&self) -> &TrackStore {
        &self.tracks
    }

    /// The performance ledger.
    pub fn ledger(&self) -> &PerformanceLedger {
        &self.ledger
    }

    /// Event classes the active state currently subscribes to.
    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subs
    }

    // ── Event dispatch ────────────────────────────────────────────────────

    /// Forward a sensor event to the active state's matching callback.
    ///
    /// Events with no active state, or outside the active state's
    /// subscriptions, are dropped — reported to the observer as a no-op,
    /// never an error.
    pub fn dispatch<O: BattleObserver>(
        &mut self,
        event:    &SensorEvent,
        view:     &BattleView,
        observer: &mut O,
    ) -> Vec<Command> {
        let class = event.class();
        let Some(active) = self.active else {
            observer.on_event_dropped(class, view.now);
            return vec![];
        };
        if !self.subs.contains(class) {
            observer.on_event_dropped(class, view.now);
            return vec![];
        }

        // Explicit field borrows so the boxed state and the shared stores
        // borrow disjointly.
        let state = &mut self.states[active.index()];
        let mut ctx = TurnContext {
            view:   *view,
            tracks: &mut self.tracks,
            rng:    &mut self.rng,
            config: &self.config,
        };
        match event {
            SensorEvent::Scan(scan)            => state.on_scan(scan, &mut ctx),
            SensorEvent::HitByBullet { power } => state.on_hit_by_bullet(*power, &mut ctx),
            SensorEvent::BotDeath { name }     => state.on_bot_death(name, &mut ctx),
        }
    }

    // ── Turn processing ───────────────────────────────────────────────────

    /// Run one turn: reselect if needed, then execute the active state
    /// exactly once.
    ///
    /// Selection happens when no state is active yet or the active state's
    /// validity predicate no longer holds.  With no valid candidate the
    /// manager idles: zero commands, no active state.
    pub fn tick<O: BattleObserver>(
        &mut self,
        view:     &BattleView,
        observer: &mut O,
    ) -> Vec<Command> {
        let needs_selection = match self.active {
            None => true,
            Some(id) => !self.states[id.index()].is_valid(view),
        };
        if needs_selection {
            self.select(view, observer);
        }

        match self.active {
            None => vec![],
            Some(id) => {
                let state = &mut self.states[id.index()];
                let mut ctx = TurnContext {
                    view:   *view,
                    tracks: &mut self.tracks,
                    rng:    &mut self.rng,
                    config: &self.config,
                };
                state.execute(&mut ctx)
            }
        }
    }

    /// Deactivate the active state, flushing its ledger entry.
    ///
    /// Used at battle end so the final activation is recorded like any
    /// other.
    pub fn retire<O: BattleObserver>(&mut self, view: &BattleView, observer: &mut O) {
        if let Some(prev) = self.active.take() {
            let name = self.states[prev.index()].name();
            let report = self.states[prev.index()].disable(view, &mut self.subs);
            self.ledger.record(prev, view.opponent_count, report);
            observer.on_state_retired(name, view.now);
        }
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Pick the best valid state per the ledger and swap it in.
    ///
    /// The outgoing state is disabled first — its subscriptions are released
    /// and its activation lands on the ledger keyed by the opponent count at
    /// this moment — even when nothing valid replaces it.
    fn select<O: BattleObserver>(&mut self, view: &BattleView, observer: &mut O) {
        let candidates: Vec<StateId> = (0..self.states.len())
            .map(|i| StateId(i as u16))
            .filter(|id| self.states[id.index()].is_valid(view))
            .collect();

        match self.ledger.best(&candidates, view.opponent_count) {
            None => {
                self.retire(view, observer);
                observer.on_no_valid_state(view.now);
            }
            Some(next) => {
                let prev_name = self.active_name();
                if let Some(prev) = self.active.take() {
                    let report = self.states[prev.index()].disable(view, &mut self.subs);
                    self.ledger.record(prev, view.opponent_count, report);
                }
                self.states[next.index()].enable(view, &mut self.subs);
                self.active = Some(next);
                observer.on_state_switch(prev_name, self.states[next.index()].name(), view.now);
            }
        }
    }
}

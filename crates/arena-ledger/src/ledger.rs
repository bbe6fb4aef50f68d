//! The `PerformanceLedger` and its record types.

use arena_core::{EngineConfig, StateId};
use rustc_hash::FxHashMap;

// ── ActivationReport ──────────────────────────────────────────────────────────

/// What one completed enable/disable activation of a state cost.
///
/// Produced by the state's disable transition; consumed exactly once by
/// [`PerformanceLedger::record`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ActivationReport {
    /// Energy lost to bullet hits while the state was active.
    pub damage_taken: f64,
    /// Turns the state was active.
    pub turns_active: u64,
}

// ── PerfRecord ────────────────────────────────────────────────────────────────

/// Aggregate over every completed activation for one `(state, opponent
/// count)` key.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PerfRecord {
    pub activations: u32,
    pub damage_taken: f64,
    pub turns_active: u64,
}

impl PerfRecord {
    fn fold(&mut self, report: ActivationReport) {
        self.activations += 1;
        self.damage_taken += report.damage_taken;
        self.turns_active += report.turns_active;
    }
}

// ── PerformanceLedger ─────────────────────────────────────────────────────────

/// Historical effectiveness of every registered behavior state, keyed by
/// `(state, opponent count at deactivation)`.
///
/// Mutated only through [`record`][Self::record] on a state's disable
/// transition; everything else is read-only queries.
pub struct PerformanceLedger {
    records: FxHashMap<(StateId, usize), PerfRecord>,
    untried_score: f64,
    damage_floor: f64,
}

impl PerformanceLedger {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            records: FxHashMap::default(),
            untried_score: config.untried_score,
            damage_floor:  config.damage_floor,
        }
    }

    /// Fold one completed activation into the aggregate for
    /// `(state, opponent_count)`.
    pub fn record(&mut self, state: StateId, opponent_count: usize, report: ActivationReport) {
        self.records
            .entry((state, opponent_count))
            .or_default()
            .fold(report);
    }

    /// Effectiveness of `state` at `opponent_count`: turns survived per
    /// point of damage taken, higher is better.
    ///
    /// Total by construction — never divides by zero and never returns
    /// NaN/∞.  A key with no recorded turns scores the configured
    /// `untried_score` (high, so unexplored states get tried), and the
    /// damage denominator is floored so an unscathed activation scores
    /// proportionally to its length instead of infinitely.
    pub fn score(&self, state: StateId, opponent_count: usize) -> f64 {
        match self.records.get(&(state, opponent_count)) {
            None => self.untried_score,
            Some(rec) if rec.turns_active == 0 => self.untried_score,
            Some(rec) => rec.turns_active as f64 / rec.damage_taken.max(self.damage_floor),
        }
    }

    /// The best-scoring candidate for `opponent_count`.
    ///
    /// Candidates are compared in the order given; only a strictly greater
    /// score displaces the leader, so ties resolve to the
    /// earliest-registered state and selection is deterministic.
    pub fn best(&self, candidates: &[StateId], opponent_count: usize) -> Option<StateId> {
        let mut winner: Option<(StateId, f64)> = None;
        for &candidate in candidates {
            let score = self.score(candidate, opponent_count);
            match winner {
                Some((_, best)) if score <= best => {}
                _ => winner = Some((candidate, score)),
            }
        }
        winner.map(|(id, _)| id)
    }

    /// The aggregate for one key, if any activation has been recorded.
    pub fn get(&self, state: StateId, opponent_count: usize) -> Option<&PerfRecord> {
        self.records.get(&(state, opponent_count))
    }

    /// All recorded `(key, aggregate)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&(StateId, usize), &PerfRecord)> {
        self.records.iter()
    }

    /// Number of distinct `(state, opponent count)` keys recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

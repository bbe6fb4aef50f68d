//! Unit tests for arena-ledger.

use arena_core::{EngineConfig, StateId};

use crate::{ActivationReport, PerformanceLedger};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ledger() -> PerformanceLedger {
    PerformanceLedger::new(&EngineConfig::default())
}

fn report(damage: f64, turns: u64) -> ActivationReport {
    ActivationReport { damage_taken: damage, turns_active: turns }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use super::*;

    #[test]
    fn untried_state_scores_finite_default() {
        let ledger = ledger();
        let score = ledger.score(StateId(0), 3);
        assert!(score.is_finite());
        assert_eq!(score, EngineConfig::default().untried_score);
    }

    #[test]
    fn zero_turn_activation_scores_untried() {
        // Enabled and immediately invalidated: zero turns, no division fault.
        let mut ledger = ledger();
        ledger.record(StateId(0), 1, report(0.0, 0));
        let score = ledger.score(StateId(0), 1);
        assert!(score.is_finite());
        assert_eq!(score, EngineConfig::default().untried_score);
    }

    #[test]
    fn unscathed_activation_scores_finite() {
        let mut ledger = ledger();
        ledger.record(StateId(0), 1, report(0.0, 40));
        let score = ledger.score(StateId(0), 1);
        assert!(score.is_finite() && !score.is_nan());
        // Damage floored at 1.0: 40 turns / 1.0.
        assert_eq!(score, 40.0);
    }

    #[test]
    fn less_damage_per_turn_scores_higher() {
        let mut ledger = ledger();
        ledger.record(StateId(0), 1, report(30.0, 60)); // 0.5 dmg/turn
        ledger.record(StateId(1), 1, report(90.0, 60)); // 1.5 dmg/turn
        assert!(ledger.score(StateId(0), 1) > ledger.score(StateId(1), 1));
    }

    #[test]
    fn opponent_counts_are_separate_keys() {
        let mut ledger = ledger();
        ledger.record(StateId(0), 1, report(100.0, 10));
        // Same state, different opponent count: still untried.
        assert_eq!(ledger.score(StateId(0), 5), EngineConfig::default().untried_score);
    }

    #[test]
    fn record_aggregates_across_activations() {
        let mut ledger = ledger();
        ledger.record(StateId(0), 2, report(10.0, 20));
        ledger.record(StateId(0), 2, report(30.0, 60));
        let rec = ledger.get(StateId(0), 2).unwrap();
        assert_eq!(rec.activations, 2);
        assert_eq!(rec.damage_taken, 40.0);
        assert_eq!(rec.turns_active, 80);
        // 80 turns / 40 damage.
        assert_eq!(ledger.score(StateId(0), 2), 2.0);
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn best_prefers_higher_score() {
        let mut ledger = ledger();
        ledger.record(StateId(0), 1, report(80.0, 20)); // 0.25
        ledger.record(StateId(1), 1, report(10.0, 20)); // 2.0
        assert_eq!(ledger.best(&[StateId(0), StateId(1)], 1), Some(StateId(1)));
    }

    #[test]
    fn tie_resolves_to_first_candidate() {
        let mut ledger = ledger();
        // Identical histories → identical scores.
        ledger.record(StateId(0), 1, report(20.0, 40));
        ledger.record(StateId(1), 1, report(20.0, 40));
        assert_eq!(ledger.best(&[StateId(0), StateId(1)], 1), Some(StateId(0)));
        // Candidate order is what breaks the tie, not id order.
        assert_eq!(ledger.best(&[StateId(1), StateId(0)], 1), Some(StateId(1)));
    }

    #[test]
    fn untried_states_tie_to_first() {
        let ledger = ledger();
        assert_eq!(
            ledger.best(&[StateId(2), StateId(0), StateId(1)], 4),
            Some(StateId(2))
        );
    }

    #[test]
    fn empty_candidate_set_is_none() {
        let ledger = ledger();
        assert_eq!(ledger.best(&[], 1), None);
    }
}

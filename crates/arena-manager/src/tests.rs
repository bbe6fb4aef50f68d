//! Unit and integration tests for arena-manager.

use std::cell::RefCell;
use std::rc::Rc;

use arena_behavior::{
    Activation, BattleView, BehaviorState, Command, Subscriptions, TurnContext,
};
use arena_core::{
    bullet_damage, Affinity, EngineConfig, EventClass, Point2, Pose, ScanEvent, SensorEvent,
    StateId, Tick,
};
use arena_ledger::ActivationReport;

use crate::{BattleObserver, ManagerError, StateManager};

// ── Probe state ───────────────────────────────────────────────────────────────

/// Call counters shared between a probe and the test that planted it.
#[derive(Default)]
struct ProbeLog {
    enables: u32,
    disables: u32,
    executes: u32,
    scans: u32,
    hits: u32,
    deaths: u32,
}

/// A scriptable state: validity is a predicate over the opponent count, and
/// every lifecycle call is counted.
struct ProbeState {
    name: &'static str,
    valid: Box<dyn Fn(usize) -> bool>,
    classes: Vec<EventClass>,
    activation: Activation,
    log: Rc<RefCell<ProbeLog>>,
}

fn probe(
    name: &'static str,
    valid: impl Fn(usize) -> bool + 'static,
) -> (ProbeState, Rc<RefCell<ProbeLog>>) {
    let log = Rc::new(RefCell::new(ProbeLog::default()));
    let state = ProbeState {
        name,
        valid: Box::new(valid),
        classes: EventClass::ALL.to_vec(),
        activation: Activation::default(),
        log: Rc::clone(&log),
    };
    (state, log)
}

impl BehaviorState for ProbeState {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_valid(&self, view: &BattleView) -> bool {
        (self.valid)(view.opponent_count)
    }

    fn enable(&mut self, view: &BattleView, subs: &mut Subscriptions) {
        self.activation.begin(view.now);
        for &class in &self.classes {
            subs.subscribe(class);
        }
        self.log.borrow_mut().enables += 1;
    }

    fn disable(&mut self, view: &BattleView, subs: &mut Subscriptions) -> ActivationReport {
        subs.clear();
        self.log.borrow_mut().disables += 1;
        self.activation.report(view.now)
    }

    fn execute(&mut self, _ctx: &mut TurnContext<'_>) -> Vec<Command> {
        self.log.borrow_mut().executes += 1;
        vec![Command::Scan]
    }

    fn on_scan(&mut self, scan: &ScanEvent, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        let owner = ctx.view.owner;
        ctx.tracks.observe(scan, &owner);
        self.log.borrow_mut().scans += 1;
        vec![]
    }

    fn on_hit_by_bullet(&mut self, power: f64, _ctx: &mut TurnContext<'_>) -> Vec<Command> {
        self.activation.absorb_hit(power);
        self.log.borrow_mut().hits += 1;
        vec![]
    }

    fn on_bot_death(&mut self, name: &str, ctx: &mut TurnContext<'_>) -> Vec<Command> {
        let _ = ctx.tracks.mark_dead(name);
        self.log.borrow_mut().deaths += 1;
        vec![]
    }
}

// ── Counting observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct CountingObserver {
    switches: Vec<(Option<&'static str>, &'static str)>,
    retired: Vec<&'static str>,
    no_valid: u32,
    dropped: u32,
    battle_ends: u32,
}

impl BattleObserver for CountingObserver {
    fn on_state_switch(&mut self, from: Option<&'static str>, to: &'static str, _tick: Tick) {
        self.switches.push((from, to));
    }

    fn on_state_retired(&mut self, name: &'static str, _tick: Tick) {
        self.retired.push(name);
    }

    fn on_no_valid_state(&mut self, _tick: Tick) {
        self.no_valid += 1;
    }

    fn on_event_dropped(&mut self, _class: EventClass, _tick: Tick) {
        self.dropped += 1;
    }

    fn on_battle_end(&mut self, _tick: Tick) {
        self.battle_ends += 1;
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn manager() -> StateManager {
    StateManager::new(EngineConfig::default(), 42).unwrap()
}

fn view(now: u64, opponents: usize) -> BattleView {
    BattleView {
        now: Tick(now),
        owner: Pose::new(Point2::new(400.0, 300.0), 0.0),
        opponent_count: opponents,
        radar_turn_remaining: 0.0,
        radar_heading_radians: 0.0,
        gun_heading_radians: 0.0,
        arena_width: 800.0,
        arena_height: 600.0,
    }
}

fn scan_event(name: &str, time: u64) -> SensorEvent {
    SensorEvent::Scan(ScanEvent {
        name: name.to_string(),
        energy: 100.0,
        heading: 0.0,
        heading_radians: 0.0,
        velocity: 8.0,
        bearing_radians: 0.3,
        distance: 180.0,
        time: Tick(time),
        affinity: Affinity::Hostile,
    })
}

// ── Registration ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use super::*;

    #[test]
    fn ids_follow_registration_order() {
        let mut mgr = manager();
        let (a, _) = probe("alpha", |_| true);
        let (b, _) = probe("beta", |_| true);
        assert_eq!(mgr.add_state(Box::new(a)).unwrap(), StateId(0));
        assert_eq!(mgr.add_state(Box::new(b)).unwrap(), StateId(1));
        assert_eq!(mgr.state_name(StateId(1)), "beta");
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut mgr = manager();
        let (a, _) = probe("alpha", |_| true);
        let (dup, _) = probe("alpha", |_| false);
        mgr.add_state(Box::new(a)).unwrap();
        assert_eq!(
            mgr.add_state(Box::new(dup)).unwrap_err(),
            ManagerError::DuplicateState("alpha".to_string())
        );
        assert_eq!(mgr.state_count(), 1);
    }

    #[test]
    fn bad_config_rejected_at_construction() {
        let config = EngineConfig { untried_score: -1.0, ..EngineConfig::default() };
        assert!(StateManager::new(config, 0).is_err());
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn no_states_means_idle_turn() {
        let mut mgr = manager();
        let mut obs = CountingObserver::default();
        let commands = mgr.tick(&view(0, 3), &mut obs);
        assert!(commands.is_empty());
        assert_eq!(mgr.active(), None);
        assert_eq!(obs.no_valid, 1);
    }

    #[test]
    fn all_invalid_means_idle_turn() {
        let mut mgr = manager();
        let (a, log) = probe("duel-only", |n| n <= 1);
        mgr.add_state(Box::new(a)).unwrap();

        let mut obs = CountingObserver::default();
        let commands = mgr.tick(&view(0, 4), &mut obs);
        assert!(commands.is_empty());
        assert_eq!(mgr.active(), None);
        assert_eq!(log.borrow().enables, 0);
    }

    #[test]
    fn first_selection_prefers_registration_order() {
        let mut mgr = manager();
        let (a, log_a) = probe("alpha", |_| true);
        let (b, log_b) = probe("beta", |_| true);
        mgr.add_state(Box::new(a)).unwrap();
        mgr.add_state(Box::new(b)).unwrap();

        let mut obs = CountingObserver::default();
        let commands = mgr.tick(&view(0, 2), &mut obs);
        assert_eq!(mgr.active_name(), Some("alpha"));
        assert_eq!(commands, [Command::Scan]);
        assert_eq!(log_a.borrow().enables, 1);
        assert_eq!(log_b.borrow().enables, 0);
        assert_eq!(obs.switches, [(None, "alpha")]);
    }

    #[test]
    fn valid_active_state_is_left_alone() {
        let mut mgr = manager();
        let (a, log) = probe("alpha", |_| true);
        let (b, _) = probe("beta", |_| true);
        mgr.add_state(Box::new(a)).unwrap();
        mgr.add_state(Box::new(b)).unwrap();

        let mut obs = CountingObserver::default();
        for now in 0..5 {
            mgr.tick(&view(now, 2), &mut obs);
        }
        // One enable, five executes: no churn while the state stays valid.
        assert_eq!(log.borrow().enables, 1);
        assert_eq!(log.borrow().executes, 5);
        assert_eq!(obs.switches.len(), 1);
    }

    #[test]
    fn invalidation_switches_and_flushes_ledger() {
        let mut mgr = manager();
        let (a, log_a) = probe("duel", |n| n <= 1);
        let (b, log_b) = probe("melee", |_| true);
        let a_id = mgr.add_state(Box::new(a)).unwrap();
        mgr.add_state(Box::new(b)).unwrap();

        let mut obs = CountingObserver::default();
        mgr.tick(&view(0, 1), &mut obs);
        assert_eq!(mgr.active_name(), Some("duel"));

        // Damage lands on the duel state's activation.
        mgr.dispatch(&SensorEvent::HitByBullet { power: 3.0 }, &view(5, 1), &mut obs);

        // A second opponent appears: the duel state goes invalid mid-battle.
        mgr.tick(&view(20, 2), &mut obs);
        assert_eq!(mgr.active_name(), Some("melee"));
        assert_eq!(log_a.borrow().disables, 1);
        assert_eq!(log_b.borrow().enables, 1);

        // Exactly one ledger entry, keyed by the count at disable time.
        let record = mgr.ledger().get(a_id, 2).unwrap();
        assert_eq!(record.activations, 1);
        assert_eq!(record.damage_taken, bullet_damage(3.0));
        assert_eq!(record.turns_active, 20);
        assert_eq!(obs.switches, [(None, "duel"), (Some("duel"), "melee")]);
    }

    #[test]
    fn ledger_score_guides_reselection() {
        let mut mgr = manager();
        let (a, _) = probe("bruised", |_| true);
        let (b, _) = probe("fresh", |_| true);
        mgr.add_state(Box::new(a)).unwrap();
        mgr.add_state(Box::new(b)).unwrap();

        let mut obs = CountingObserver::default();
        // First activation: "bruised" wins the untried tie and takes a
        // beating over 20 turns.
        mgr.tick(&view(0, 2), &mut obs);
        mgr.dispatch(&SensorEvent::HitByBullet { power: 3.0 }, &view(5, 2), &mut obs);
        mgr.dispatch(&SensorEvent::HitByBullet { power: 3.0 }, &view(9, 2), &mut obs);
        mgr.retire(&view(20, 2), &mut obs);

        // Next selection at the same opponent count: the untried state now
        // outscores the bruised one.
        mgr.tick(&view(21, 2), &mut obs);
        assert_eq!(mgr.active_name(), Some("fresh"));
    }

    #[test]
    fn invalidation_with_no_successor_idles() {
        let mut mgr = manager();
        let (a, log) = probe("duel", |n| n <= 1);
        let a_id = mgr.add_state(Box::new(a)).unwrap();

        let mut obs = CountingObserver::default();
        mgr.tick(&view(0, 1), &mut obs);
        assert_eq!(mgr.active_name(), Some("duel"));

        let commands = mgr.tick(&view(10, 5), &mut obs);
        assert!(commands.is_empty());
        assert_eq!(mgr.active(), None);
        assert_eq!(obs.no_valid, 1);
        // The outgoing activation still flushed, and its subscriptions are
        // gone even though nothing replaced it.
        assert_eq!(log.borrow().disables, 1);
        assert!(mgr.ledger().get(a_id, 5).is_some());
        assert!(mgr.subscriptions().is_empty());
    }

    #[test]
    fn states_reactivate_across_the_battle() {
        let mut mgr = manager();
        let (a, log_a) = probe("duel", |n| n <= 1);
        let (b, _) = probe("melee", |n| n >= 2);
        let a_id = mgr.add_state(Box::new(a)).unwrap();
        mgr.add_state(Box::new(b)).unwrap();

        let mut obs = CountingObserver::default();
        mgr.tick(&view(0, 1), &mut obs);  // duel
        mgr.tick(&view(10, 3), &mut obs); // melee
        mgr.tick(&view(30, 1), &mut obs); // duel again

        assert_eq!(mgr.active_name(), Some("duel"));
        assert_eq!(log_a.borrow().enables, 2);
        assert_eq!(log_a.borrow().disables, 1);
        // Each completed activation is exactly one ledger record.
        assert_eq!(mgr.ledger().get(a_id, 3).unwrap().activations, 1);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;

    #[test]
    fn events_without_active_state_are_dropped() {
        let mut mgr = manager();
        let (a, log) = probe("alpha", |_| true);
        mgr.add_state(Box::new(a)).unwrap();

        let mut obs = CountingObserver::default();
        // No tick yet, so nothing is active or subscribed.
        let commands = mgr.dispatch(&scan_event("Walls", 0), &view(0, 2), &mut obs);
        assert!(commands.is_empty());
        assert_eq!(obs.dropped, 1);
        assert_eq!(log.borrow().scans, 0);
        assert!(mgr.tracks().is_empty());
    }

    #[test]
    fn unsubscribed_classes_are_dropped() {
        let mut mgr = manager();
        let (mut a, log) = probe("scan-only", |_| true);
        a.classes = vec![EventClass::Scan];
        mgr.add_state(Box::new(a)).unwrap();

        let mut obs = CountingObserver::default();
        mgr.tick(&view(0, 2), &mut obs);
        let commands =
            mgr.dispatch(&SensorEvent::HitByBullet { power: 1.0 }, &view(1, 2), &mut obs);
        assert!(commands.is_empty());
        assert_eq!(obs.dropped, 1);
        assert_eq!(log.borrow().hits, 0);
    }

    #[test]
    fn scans_update_the_shared_tracks() {
        let mut mgr = manager();
        let (a, log) = probe("alpha", |_| true);
        mgr.add_state(Box::new(a)).unwrap();

        let mut obs = CountingObserver::default();
        mgr.tick(&view(0, 2), &mut obs);
        mgr.dispatch(&scan_event("Walls", 1), &view(1, 2), &mut obs);

        assert_eq!(log.borrow().scans, 1);
        assert_eq!(mgr.tracks().get("Walls").unwrap().updates, 1);
    }

    #[test]
    fn deaths_prune_tracks_through_the_state() {
        let mut mgr = manager();
        let (a, _) = probe("alpha", |_| true);
        mgr.add_state(Box::new(a)).unwrap();

        let mut obs = CountingObserver::default();
        mgr.tick(&view(0, 2), &mut obs);
        mgr.dispatch(&scan_event("Walls", 1), &view(1, 2), &mut obs);
        mgr.dispatch(&SensorEvent::BotDeath { name: "Walls".into() }, &view(2, 2), &mut obs);

        assert!(mgr.tracks().get("Walls").is_err());
    }
}

// ── End-to-end scripted battle ────────────────────────────────────────────────

#[cfg(test)]
mod battle {
    use super::*;

    use arena_behavior::{AntiGravityState, NarrowLockState, TrackState, ZigZagState};
    use arena_core::Tick;
    use arena_host::{HostPort, ScriptedHost};

    use crate::BattleDriver;

    fn scripted_melee() -> ScriptedHost {
        let mut host = ScriptedHost::new(
            800.0,
            600.0,
            Pose::new(Point2::new(400.0, 300.0), 0.0),
            3,
        );
        // Three enemies sighted early and re-sighted periodically.
        for (turn, name, bearing_deg, distance) in [
            (1u64, "Aggro", 20.0f64, 240.0),
            (1, "Camper", 160.0, 320.0),
            (2, "Rambler", 250.0, 180.0),
            (6, "Aggro", 30.0, 200.0),
            (12, "Camper", 150.0, 300.0),
        ] {
            host.push_event(
                Tick(turn),
                SensorEvent::Scan(ScanEvent {
                    name: name.to_string(),
                    energy: 100.0,
                    heading: 0.0,
                    heading_radians: 0.0,
                    velocity: 8.0,
                    bearing_radians: bearing_deg.to_radians(),
                    distance,
                    time: Tick(turn),
                    affinity: Affinity::Hostile,
                }),
            );
        }
        // Incoming fire while the melee is on.
        host.push_event(Tick(8), SensorEvent::HitByBullet { power: 2.0 });
        // The field thins out to a duel.
        host.push_event(Tick(15), SensorEvent::BotDeath { name: "Rambler".into() });
        host.push_event(Tick(22), SensorEvent::BotDeath { name: "Camper".into() });
        host
    }

    #[test]
    fn melee_collapses_into_a_duel() {
        let mut mgr = manager();
        // Roster in preference order for the untried tie-break.
        mgr.add_state(Box::new(AntiGravityState::new())).unwrap();
        mgr.add_state(Box::new(NarrowLockState::new())).unwrap();
        mgr.add_state(Box::new(TrackState::new())).unwrap();
        mgr.add_state(Box::new(ZigZagState::new())).unwrap();

        let mut obs = CountingObserver::default();
        let mut driver = BattleDriver::new(mgr, scripted_melee());
        driver.run(30, &mut obs);

        // Opens in anti-gravity (3 opponents), drops to narrow lock when
        // the count falls past the melee threshold.
        assert_eq!(
            obs.switches,
            [(None, "anti-gravity"), (Some("anti-gravity"), "narrow-lock")]
        );

        // The dead are pruned; the survivor is still tracked.
        assert!(driver.manager.tracks().get("Rambler").is_err());
        assert!(driver.manager.tracks().get("Camper").is_err());
        assert_eq!(driver.manager.tracks().get("Aggro").unwrap().updates, 2);

        // The battle-end retire flushed the final activation.
        assert_eq!(driver.manager.active(), None);
        assert!(driver.manager.subscriptions().is_empty());
        assert_eq!(obs.retired, ["narrow-lock"]);
        assert_eq!(obs.battle_ends, 1);

        // Two completed activations → two ledger keys, one of them holding
        // the melee damage.
        assert_eq!(driver.manager.ledger().len(), 2);
        let melee_key: Vec<_> = driver
            .manager
            .ledger()
            .iter()
            .filter(|(_, rec)| rec.damage_taken > 0.0)
            .collect();
        assert_eq!(melee_key.len(), 1);
        assert_eq!(melee_key[0].1.damage_taken, bullet_damage(2.0));

        // The host actually received commands every turn.
        assert!(!driver.host.issued.is_empty());
        assert!(driver.host.issued_at(Tick(0)).iter().any(|c| matches!(c, Command::Scan)));
    }

    #[test]
    fn driver_applies_commands_before_turn_close() {
        let mut mgr = manager();
        mgr.add_state(Box::new(TrackState::new())).unwrap();

        let mut driver = BattleDriver::new(mgr, scripted_melee());
        let mut obs = CountingObserver::default();
        let issued = driver.run_turn(&mut obs);
        assert!(issued > 0);
        // Everything issued this turn is logged against turn 0.
        assert_eq!(driver.host.issued_at(Tick(0)).len(), issued);
        assert_eq!(driver.host.time(), Tick(1));
    }
}

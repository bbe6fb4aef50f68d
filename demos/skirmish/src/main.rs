//! skirmish — two scripted melee rounds against the rust_arena decision core.
//!
//! Round one opens as a three-way melee that collapses into a duel; the
//! duel state takes a beating, and the ledger remembers.  Round two replays
//! a similar battle with the same manager: when the field thins out again,
//! selection passes over the bruised duel state for an untried one.

use std::io::Cursor;

use anyhow::Result;

use arena_behavior::{AntiGravityState, NarrowLockState, TrackState, ZigZagState};
use arena_core::{EngineConfig, EventClass, Point2, Pose, Tick};
use arena_host::{load_script_reader, ScriptedHost};
use arena_manager::{BattleDriver, BattleObserver, StateManager};

// ── Constants ─────────────────────────────────────────────────────────────────

const ARENA_WIDTH: f64 = 800.0;
const ARENA_HEIGHT: f64 = 600.0;
const SEED: u64 = 42;
const ROUND_TURNS: u64 = 60;
const START_OPPONENTS: usize = 3;

// ── Battle scripts ────────────────────────────────────────────────────────────

// Round 1: three enemies and a teammate.  The field thins at turns 18 and
// 26; the duel phase then costs the active state two power-3 hits.
const ROUND_ONE: &str = "\
turn,kind,name,energy,heading_deg,velocity,bearing_deg,distance,power\n\
1,scan,Shredder,100,45,8,30,260,0\n\
1,scan,Bulwark,100,180,0,140,340,0\n\
2,scan,Vagrant,100,270,8,230,200,0\n\
6,scan,Shredder,94,50,8,35,230,0\n\
8,hit,,0,0,0,0,0,1.5\n\
12,scan,Bulwark,88,180,0,150,310,0\n\
14,scan,Mate,100,90,8,300,120,0\n\
18,death,Vagrant,0,0,0,0,0,0\n\
22,scan,Shredder,80,60,8,20,210,0\n\
26,death,Bulwark,0,0,0,0,0,0\n\
30,scan,Shredder,74,70,8,15,190,0\n\
33,hit,,0,0,0,0,0,3\n\
38,hit,,0,0,0,0,0,3\n\
44,scan,Shredder,61,80,8,10,170,0\n\
";

// Round 2: a fresh but similar battle.  Same collapse into a duel.
const ROUND_TWO: &str = "\
turn,kind,name,energy,heading_deg,velocity,bearing_deg,distance,power\n\
1,scan,Shredder,100,20,8,40,280,0\n\
2,scan,Bulwark,100,200,0,160,300,0\n\
3,scan,Vagrant,100,300,8,250,220,0\n\
7,hit,,0,0,0,0,0,1\n\
10,scan,Shredder,92,30,8,30,250,0\n\
14,scan,Mate,100,90,8,310,110,0\n\
20,death,Vagrant,0,0,0,0,0,0\n\
24,scan,Shredder,85,40,8,25,220,0\n\
28,death,Bulwark,0,0,0,0,0,0\n\
34,scan,Shredder,77,50,8,20,200,0\n\
48,scan,Shredder,70,60,8,15,180,0\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints selection activity as it happens and tallies the round.
#[derive(Default)]
struct RoundReport {
    switches: u32,
    dropped: u32,
    commands: usize,
}

impl BattleObserver for RoundReport {
    fn on_state_switch(&mut self, from: Option<&'static str>, to: &'static str, tick: Tick) {
        self.switches += 1;
        println!("  {tick}: {} -> {to}", from.unwrap_or("<none>"));
    }

    fn on_state_retired(&mut self, name: &'static str, tick: Tick) {
        println!("  {tick}: {name} retired");
    }

    fn on_no_valid_state(&mut self, tick: Tick) {
        println!("  {tick}: no valid state, idling");
    }

    fn on_event_dropped(&mut self, _class: EventClass, _tick: Tick) {
        self.dropped += 1;
    }

    fn on_turn_end(&mut self, _tick: Tick, commands: usize) {
        self.commands += commands;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn build_manager() -> Result<StateManager> {
    let mut manager = StateManager::new(EngineConfig::default(), SEED)?;
    // Registration order is the untried tie-break: melee specialist first,
    // then the duel roster.
    manager.add_state(Box::new(AntiGravityState::new()))?;
    manager.add_state(Box::new(NarrowLockState::new()))?;
    manager.add_state(Box::new(TrackState::new()))?;
    manager.add_state(Box::new(ZigZagState::new()))?;
    Ok(manager)
}

fn run_round(manager: StateManager, script: &str, label: &str) -> Result<StateManager> {
    println!("── {label} ──");

    let mut host = ScriptedHost::new(
        ARENA_WIDTH,
        ARENA_HEIGHT,
        Pose::new(Point2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0), 0.0),
        START_OPPONENTS,
    );
    host.add_teammate("Mate");
    host.push_script(load_script_reader(Cursor::new(script))?);

    let mut report = RoundReport::default();
    let mut driver = BattleDriver::new(manager, host);
    driver.run(ROUND_TURNS, &mut report);

    println!(
        "  {} turns, {} commands, {} switches, {} events dropped",
        ROUND_TURNS, report.commands, report.switches, report.dropped
    );
    println!();

    Ok(driver.manager)
}

fn main() -> Result<()> {
    println!("=== skirmish — rust_arena behavior selection ===");
    println!("Arena: {ARENA_WIDTH}x{ARENA_HEIGHT}  |  Seed: {SEED}  |  {ROUND_TURNS} turns/round");
    println!();

    let manager = build_manager()?;
    let manager = run_round(manager, ROUND_ONE, "round 1")?;

    // Same manager, fresh battle: the ledger carries over, so the duel
    // phase below should pick differently than round 1 did.
    let manager = run_round(manager, ROUND_TWO, "round 2")?;

    // ── Ledger summary ────────────────────────────────────────────────────
    println!("{:<14} {:>9} {:>12} {:>8} {:>8}", "state", "opponents", "activations", "damage", "score");
    println!("{}", "-".repeat(56));
    let mut rows: Vec<_> = manager.ledger().iter().collect();
    rows.sort_by_key(|((id, count), _)| (*id, *count));
    for ((id, count), rec) in rows {
        println!(
            "{:<14} {:>9} {:>12} {:>8.1} {:>8.2}",
            manager.state_name(*id),
            count,
            rec.activations,
            rec.damage_taken,
            manager.ledger().score(*id, *count),
        );
    }
    println!();

    // ── Survivor tracks ───────────────────────────────────────────────────
    println!("{:<12} {:>8} {:>8} {:>10}", "survivor", "energy", "updates", "last seen");
    println!("{}", "-".repeat(42));
    for track in manager.tracks().ranked_by_energy() {
        println!(
            "{:<12} {:>8.1} {:>8} {:>10}",
            track.name, track.energy, track.updates, track.last_seen.to_string(),
        );
    }

    Ok(())
}

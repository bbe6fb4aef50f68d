//! CSV battle-script loader.
//!
//! # CSV format
//!
//! One row per scripted sensor event:
//!
//! ```csv
//! turn,kind,name,energy,heading_deg,velocity,bearing_deg,distance,power
//! 1,scan,Walls,100,90,8,45,220,0
//! 5,hit,,0,0,0,0,0,2.5
//! 9,death,Walls,0,0,0,0,0,0
//! ```
//!
//! **`kind`** field:
//!
//! | Value   | Event                                        | Fields used                                  |
//! |---------|----------------------------------------------|----------------------------------------------|
//! | `scan`  | `SensorEvent::Scan`                          | all except `power`                           |
//! | `hit`   | `SensorEvent::HitByBullet`                   | `power`                                      |
//! | `death` | `SensorEvent::BotDeath`                      | `name`                                       |
//!
//! Scan affinity is left as `Hostile` in the loaded script; the host resolves
//! the real roster classification when the event is delivered.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use arena_core::{Affinity, ScanEvent, SensorEvent, Tick};

use crate::{HostError, HostResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    turn:        u64,
    kind:        String,
    name:        String,
    energy:      f64,
    heading_deg: f64,
    velocity:    f64,
    bearing_deg: f64,
    distance:    f64,
    power:       f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a battle script from a CSV file.
pub fn load_script_csv(path: &Path) -> HostResult<Vec<(Tick, SensorEvent)>> {
    let file = std::fs::File::open(path).map_err(HostError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a script in a
/// binary.
pub fn load_script_reader<R: Read>(reader: R) -> HostResult<Vec<(Tick, SensorEvent)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut script = Vec::new();

    for result in csv_reader.deserialize::<ScriptRecord>() {
        let row = result.map_err(|e| HostError::Parse(e.to_string()))?;
        let event = parse_event(&row)?;
        script.push((Tick(row.turn), event));
    }

    Ok(script)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_event(row: &ScriptRecord) -> HostResult<SensorEvent> {
    match row.kind.as_str() {
        "scan" => Ok(SensorEvent::Scan(ScanEvent {
            name:            row.name.clone(),
            energy:          row.energy,
            heading:         row.heading_deg,
            heading_radians: row.heading_deg.to_radians(),
            velocity:        row.velocity,
            bearing_radians: row.bearing_deg.to_radians(),
            distance:        row.distance,
            time:            Tick(row.turn),
            affinity:        Affinity::Hostile,
        })),
        "hit" => Ok(SensorEvent::HitByBullet { power: row.power }),
        "death" => Ok(SensorEvent::BotDeath { name: row.name.clone() }),
        other => Err(HostError::Parse(format!(
            "invalid event kind {other:?}: expected \"scan\", \"hit\", or \"death\""
        ))),
    }
}

//! The `TrackStore` — name-keyed, insertion-ordered opponent records.

use arena_core::{sanitize_name, EngineConfig, Pose, ScanEvent};
use rustc_hash::FxHashMap;

use crate::{by_energy, BotTrack, GravityPoint, TrackError, TrackResult};

/// The shared collection of opponent records all behavior states read and
/// the active one writes.
///
/// Storage is a slot vector plus a name index.  Slots are never reordered or
/// reused, which keeps the insertion order of survivors stable — the
/// tie-break for the ascending-energy ranking depends on it.  A death flags
/// the slot and drops the name from the index, so every query for a dead or
/// never-seen opponent fails with [`TrackError::UnknownBot`] instead of
/// serving stale geometry.
pub struct TrackStore {
    slots: Vec<BotTrack>,
    /// Live names only; flagged slots have no entry here.
    index: FxHashMap<String, usize>,
    enemy_strength: f64,
    teammate_strength: f64,
}

impl TrackStore {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            slots: Vec::new(),
            index: FxHashMap::default(),
            enemy_strength:    config.enemy_strength,
            teammate_strength: config.teammate_strength,
        }
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Fold a sighting into the store, creating the record on first contact.
    ///
    /// The raw event name is sanitized into the canonical key.  New records
    /// get the configured default strength for their affinity; existing
    /// records keep whatever strength they carry (it may have been tuned).
    /// Each call is one observation: the update counter always increments,
    /// even for a byte-identical repeat event — deduplication is the
    /// deliverer's job.
    pub fn observe(&mut self, scan: &ScanEvent, owner: &Pose) -> &BotTrack {
        let key = sanitize_name(&scan.name);
        match self.index.get(&key) {
            Some(&slot) => {
                let track = &mut self.slots[slot];
                track.update(scan, owner);
                track
            }
            None => {
                let strength = if scan.affinity.is_allied() {
                    self.teammate_strength
                } else {
                    self.enemy_strength
                };
                let slot = self.slots.len();
                self.slots
                    .push(BotTrack::from_scan(key.clone(), scan, owner, strength));
                self.index.insert(key, slot);
                &self.slots[slot]
            }
        }
    }

    /// Prune the record for a robot reported dead, returning its final state.
    ///
    /// The slot is flagged dead and the name leaves the index, so later
    /// geometry queries for this opponent fail explicitly.
    pub fn mark_dead(&mut self, name: &str) -> TrackResult<BotTrack> {
        let key = sanitize_name(name);
        let slot = self
            .index
            .remove(&key)
            .ok_or_else(|| TrackError::UnknownBot(key))?;
        self.slots[slot].alive = false;
        Ok(self.slots[slot].clone())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The live record for `name`, or [`TrackError::UnknownBot`] if the
    /// opponent was never sighted or has died.
    pub fn get(&self, name: &str) -> TrackResult<&BotTrack> {
        let key = sanitize_name(name);
        match self.index.get(&key) {
            Some(&slot) => Ok(&self.slots[slot]),
            None => Err(TrackError::UnknownBot(key)),
        }
    }

    /// Mutable access to the live record for `name`.
    ///
    /// Used by movement states to tune a track's anti-gravity strength.
    pub fn get_mut(&mut self, name: &str) -> TrackResult<&mut BotTrack> {
        let key = sanitize_name(name);
        match self.index.get(&key) {
            Some(&slot) => Ok(&mut self.slots[slot]),
            None => Err(TrackError::UnknownBot(key)),
        }
    }

    /// All live tracks, in first-sighting order.
    pub fn live(&self) -> impl Iterator<Item = &BotTrack> {
        self.slots.iter().filter(|t| t.alive)
    }

    /// Number of live tracks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ── Derived views ─────────────────────────────────────────────────────

    /// Live tracks sorted by energy, ascending.
    ///
    /// Stable: equal energies keep their first-sighting order, so the
    /// ranking is deterministic without a secondary key.
    pub fn ranked_by_energy(&self) -> Vec<&BotTrack> {
        let mut ranked: Vec<&BotTrack> = self.live().collect();
        ranked.sort_by(|a, b| by_energy(a, b));
        ranked
    }

    /// The live hostile track closest to `owner`, if any.
    pub fn nearest_hostile(&self, owner: &Pose) -> Option<&BotTrack> {
        self.live()
            .filter(|t| t.is_hostile())
            .min_by(|a, b| a.distance_to(owner).total_cmp(&b.distance_to(owner)))
    }

    /// Repulsion sources for every live track, for movement planning.
    pub fn gravity_points(&self) -> impl Iterator<Item = GravityPoint> + '_ {
        self.live().map(BotTrack::gravity_point)
    }
}

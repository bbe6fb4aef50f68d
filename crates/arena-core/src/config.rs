//! Engine configuration.
//!
//! The anti-gravity strength constants and the effectiveness-score shape are
//! tuning knobs, not fixed truths, so they live here rather than as
//! hardcoded constants.  The defaults reproduce the stock tuning.
//! Applications that want file-driven tuning enable the `serde` feature and
//! deserialize this struct from TOML/JSON.

/// Tunable constants for the whole decision core.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Anti-gravity strength assigned to a newly tracked hostile robot.
    pub enemy_strength: f64,

    /// Anti-gravity strength assigned to a newly tracked allied robot.
    /// Lower than `enemy_strength`: teammates are avoided, not fled.
    pub teammate_strength: f64,

    /// Effectiveness score reported for a state with no recorded turns at a
    /// given opponent count.  High by default so untried states get a shot
    /// before the ledger has evidence against them.
    pub untried_score: f64,

    /// Floor applied to accumulated damage in the score denominator, keeping
    /// "inverse damage-per-turn" total for unscathed activations.
    pub damage_floor: f64,

    /// Remaining radar turn below which the sweep counts as finished and is
    /// re-triggered.
    pub radar_slip_radians: f64,

    /// Anti-gravity strength of each arena wall.
    pub wall_strength: f64,

    /// Distance from a wall at which wall repulsion starts to dominate.
    pub wall_margin: f64,
}

impl EngineConfig {
    /// Check the invariants the rest of the core assumes.
    ///
    /// The score guards in particular depend on `untried_score` and
    /// `damage_floor` being positive; a zero floor would reintroduce the
    /// division the guard exists to prevent.
    pub fn validate(&self) -> crate::ArenaResult<()> {
        if self.damage_floor <= 0.0 {
            return Err(crate::ArenaError::Config(format!(
                "damage_floor must be positive, got {}",
                self.damage_floor
            )));
        }
        if self.untried_score <= 0.0 {
            return Err(crate::ArenaError::Config(format!(
                "untried_score must be positive, got {}",
                self.untried_score
            )));
        }
        if self.radar_slip_radians < 0.0 {
            return Err(crate::ArenaError::Config(format!(
                "radar_slip_radians must be non-negative, got {}",
                self.radar_slip_radians
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enemy_strength:     50.0,
            teammate_strength:  25.0,
            untried_score:      100.0,
            damage_floor:       1.0,
            radar_slip_radians: 0.001,
            wall_strength:      80.0,
            wall_margin:        60.0,
        }
    }
}

//! Deterministic RNG for behavior decisions.
//!
//! The agent owns exactly one `BotRng`, seeded once per battle.  Every
//! stochastic movement decision (dodge reversals, dither) draws from it, so
//! a battle replayed against the same scripted host is bit-identical.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The agent's deterministic RNG.
pub struct BotRng(SmallRng);

impl BotRng {
    pub fn new(seed: u64) -> Self {
        BotRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniformly random sign: `+1.0` or `-1.0`.
    #[inline]
    pub fn sign(&mut self) -> f64 {
        if self.0.r#gen::<bool>() { 1.0 } else { -1.0 }
    }
}

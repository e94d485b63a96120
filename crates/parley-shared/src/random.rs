//! Injectable randomness for template and enthusiasm selection.
//!
//! Production code uses `StdRandom::from_entropy()`. Tests use a seeded
//! `StdRandom` or a `ScriptedRandom` with pre-configured draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource: Send {
    /// Next uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index into a list of `len` items (`floor(r * len)`)
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len - 1)
    }
}

/// Randomness backed by `rand`'s standard generator
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Fake randomness that replays a fixed list of draws, cycling at the end
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, pos: 0 }
    }

    /// Always draws the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        value.clamp(0.0, 0.999_999)
    }
}

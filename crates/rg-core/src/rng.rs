//! Seeded dice
//!
//! A game replays identically from its seed. Saves keep only the seed, so a
//! restored generator starts its stream over.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct GameRng {
    seed: u64,
    stream: ChaCha8Rng,
}

impl From<u64> for GameRng {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<GameRng> for u64 {
    fn from(rng: GameRng) -> Self {
        rng.seed
    }
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            stream: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from the OS
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll in `0..n`. A zero-sided roll is always 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        match n {
            0 => 0,
            n => self.stream.gen_range(0..n),
        }
    }

    /// True once in `n` rolls
    pub fn one_in(&mut self, n: u32) -> bool {
        self.rn2(n) == 0
    }
}

//! Injected randomness
//!
//! The frame update never creates its own generator. It draws uniform
//! integers from a `RandomSource` so a seeded PCG stream drives real play and
//! a scripted sequence drives tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of uniform integers
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`; `bound` is at least 1
    fn next_below(&mut self, bound: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Replays a fixed list of rolls, then repeats the last one
///
/// Rolls are reduced modulo the requested bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u32>,
    last: u32,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            last: 0,
        }
    }

    /// Always returns the same roll
    pub fn constant(roll: u32) -> Self {
        Self {
            rolls: VecDeque::new(),
            last: roll,
        }
    }

    /// Rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn next_below(&mut self, bound: u32) -> u32 {
        if let Some(roll) = self.rolls.pop_front() {
            self.last = roll;
        }
        self.last % bound
    }
}

//! Core domain: duel clock and random source.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Simulated time in milliseconds, advanced once per fixed step.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DuelClock {
    pub now_ms: u64,
    pub ticks: u64,
}

impl DuelClock {
    pub fn advance(&mut self, step_ms: u64) {
        self.now_ms += step_ms;
        self.ticks += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random source for opponent decisions.
#[derive(Resource, Debug)]
pub struct DuelRng(pub ChaCha8Rng);

impl DuelRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seed from the thread RNG when no fixed seed was requested.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }
}

//! Dice sources for combat resolution
//!
//! Combat never reaches for a global RNG; the caller hands in a
//! `DiceSource`. Games seed a `SeededDice` once at startup, tests script
//! exact rolls with `ScriptedDice`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::error::{GameError, Result};

/// Faces on a combat die
pub const DIE_FACES: u32 = 6;

/// Supplies uniformly distributed rolls in `1..=DIE_FACES`
pub trait DiceSource {
    fn roll_die(&mut self) -> u32;

    /// Roll `count` dice and sum them; zero dice sum to zero
    ///
    /// The total saturates at `u32::MAX` instead of overflowing.
    fn roll_sum(&mut self, count: u32) -> u32 {
        (0..count).fold(0u32, |total, _| total.saturating_add(self.roll_die()))
    }
}

/// Deterministic ChaCha-backed dice
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy for normal play
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Use the given seed, or OS entropy when there is none
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl DiceSource for SeededDice {
    fn roll_die(&mut self) -> u32 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of rolls, wrapping around when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<u32>) -> Result<Self> {
        if rolls.is_empty() {
            return Err(GameError::Configuration("scripted dice need at least one roll".into()));
        }
        if let Some(bad) = rolls.iter().find(|r| !(1..=DIE_FACES).contains(*r)) {
            return Err(GameError::Configuration(format!(
                "scripted roll {} is outside 1..={}",
                bad, DIE_FACES
            )));
        }
        Ok(Self { rolls, cursor: 0 })
    }

    /// Number of rolls drawn so far
    pub fn rolls_taken(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u32 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}

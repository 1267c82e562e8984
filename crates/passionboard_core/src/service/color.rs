//! Injectable color assignment seam.
//!
//! # Responsibility
//! - Decouple command handlers from the process PRNG so color assignment
//!   is deterministic under test.
//!
//! # Invariants
//! - Every returned color is a member of `PALETTE`.

use crate::model::passion::{PassionColor, PALETTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of cosmetic colors for newly created passions.
pub trait ColorSource {
    /// Returns the color to assign to the next created passion.
    fn next_color(&mut self) -> PassionColor;
}

/// Production source: uniform sampling over the fixed palette.
#[derive(Debug)]
pub struct RandomColorSource {
    rng: StdRng,
}

impl RandomColorSource {
    /// Creates a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a source with a fixed seed, for reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> PassionColor {
        PALETTE[self.rng.gen_range(0..PALETTE.len())]
    }
}

/// Scripted source cycling through a fixed sequence, for tests.
#[derive(Debug)]
pub struct ScriptedColorSource {
    sequence: Vec<PassionColor>,
    cursor: usize,
}

impl ScriptedColorSource {
    /// Creates a source replaying `sequence` and wrapping at the end.
    ///
    /// An empty sequence falls back to the first palette entry.
    pub fn new(sequence: Vec<PassionColor>) -> Self {
        Self {
            sequence,
            cursor: 0,
        }
    }
}

impl ColorSource for ScriptedColorSource {
    fn next_color(&mut self) -> PassionColor {
        if self.sequence.is_empty() {
            return PALETTE[0];
        }
        let color = self.sequence[self.cursor % self.sequence.len()];
        self.cursor += 1;
        color
    }
}

//! Piece generators - decide which piece spawns next
//!
//! - [`UniformGenerator`]: each draw is uniform over the 7 kinds. Long droughts
//!   of one kind are possible; this is the default.
//! - [`BagGenerator`]: the "7-bag" scheme, every run of 7 draws contains each
//!   kind exactly once.
//! - [`SequenceGenerator`]: replays a fixed list forever, for tests and demos.
//!
//! Random generators use a PCG32 stream so a seed reproduces a whole game.

use std::collections::VecDeque;
use std::fmt;

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Source of upcoming pieces
pub trait PieceGenerator: fmt::Debug {
    /// Produce the next piece kind
    fn draw(&mut self) -> PieceKind;
}

/// Which random generator a session should build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomizerKind {
    #[default]
    Uniform,
    Bag,
}

impl RandomizerKind {
    /// Build a boxed generator, seeded from OS entropy when `seed` is `None`
    pub fn build(self, seed: Option<u64>) -> Box<dyn PieceGenerator> {
        let rng = match seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        match self {
            RandomizerKind::Uniform => Box::new(UniformGenerator::from_rng(rng)),
            RandomizerKind::Bag => Box::new(BagGenerator::from_rng(rng)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RandomizerKind::Uniform => "uniform",
            RandomizerKind::Bag => "bag",
        }
    }
}

/// Uniform random piece selection
#[derive(Debug, Clone)]
pub struct UniformGenerator {
    rng: Pcg32,
}

impl UniformGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Pcg32::seed_from_u64(seed))
    }

    fn from_rng(rng: Pcg32) -> Self {
        Self { rng }
    }
}

impl PieceGenerator for UniformGenerator {
    fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::LEN)]
    }
}

/// 7-bag piece selection
#[derive(Debug, Clone)]
pub struct BagGenerator {
    rng: Pcg32,
    bag: VecDeque<PieceKind>,
}

impl BagGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Pcg32::seed_from_u64(seed))
    }

    fn from_rng(rng: Pcg32) -> Self {
        Self {
            rng,
            bag: VecDeque::with_capacity(PieceKind::LEN),
        }
    }

    fn refill(&mut self) {
        let mut new_bag = PieceKind::ALL;
        new_bag.shuffle(&mut self.rng);
        self.bag.extend(new_bag);
    }
}

impl PieceGenerator for BagGenerator {
    fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.bag.pop_front() {
                return kind;
            }
            self.refill();
        }
    }
}

/// Cycles through a fixed list of pieces
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    pieces: Vec<PieceKind>,
    pos: usize,
}

impl SequenceGenerator {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn new(pieces: impl Into<Vec<PieceKind>>) -> Self {
        let pieces = pieces.into();
        assert!(!pieces.is_empty(), "sequence generator needs at least one piece");
        Self { pieces, pos: 0 }
    }
}

impl PieceGenerator for SequenceGenerator {
    fn draw(&mut self) -> PieceKind {
        let kind = self.pieces[self.pos];
        self.pos = (self.pos + 1) % self.pieces.len();
        kind
    }
}

//! RNG module - piece sequence generation
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! Draws from the bag until empty, then generates a new bag.
//!
//! A uniform policy is also provided. Both are seeded, so a seed fully
//! determines the sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Which randomizer a new engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomizerPolicy {
    /// Each shape exactly once per shuffled group of seven
    #[default]
    Bag,
    /// Independent uniform choice per piece (droughts possible)
    Uniform,
}

impl RandomizerPolicy {
    /// Parse from a config string (`bag` / `7bag` / `uniform`)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bag" | "7bag" | "7-bag" => Some(Self::Bag),
            "uniform" | "random" => Some(Self::Uniform),
            _ => None,
        }
    }
}

/// An unbounded sequence of shapes
pub trait ShapeSource {
    /// Consume and return the next shape
    fn draw(&mut self) -> PieceKind;

    /// The shape the next `draw` will return, without consuming it
    fn peek(&self) -> PieceKind;
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: StdRng,
}

impl BagRandomizer {
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        queue.refill_bag();
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl ShapeSource for BagRandomizer {
    fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    fn peek(&self) -> PieceKind {
        if let Some(&next) = self.bag.get(self.bag_index) {
            return next;
        }

        // Preview the next bag on a clone of the RNG so the following draw()
        // shuffles identically.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        next_bag.shuffle(&mut preview_rng);
        next_bag[0]
    }
}

/// Uniform piece generator
///
/// Keeps one shape drawn ahead so `peek` can stay `&self`.
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    next: PieceKind,
    rng: StdRng,
}

impl UniformRandomizer {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = Self::pick(&mut rng);
        Self { next, rng }
    }

    fn pick(rng: &mut StdRng) -> PieceKind {
        PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
    }
}

impl ShapeSource for UniformRandomizer {
    fn draw(&mut self) -> PieceKind {
        let upcoming = Self::pick(&mut self.rng);
        std::mem::replace(&mut self.next, upcoming)
    }

    fn peek(&self) -> PieceKind {
        self.next
    }
}

/// Randomizer selected by [`RandomizerPolicy`]
#[derive(Debug, Clone)]
pub enum Randomizer {
    Bag(BagRandomizer),
    Uniform(UniformRandomizer),
}

impl Randomizer {
    pub fn new(policy: RandomizerPolicy, seed: u64) -> Self {
        match policy {
            RandomizerPolicy::Bag => Self::Bag(BagRandomizer::new(seed)),
            RandomizerPolicy::Uniform => Self::Uniform(UniformRandomizer::new(seed)),
        }
    }

    pub fn policy(&self) -> RandomizerPolicy {
        match self {
            Self::Bag(_) => RandomizerPolicy::Bag,
            Self::Uniform(_) => RandomizerPolicy::Uniform,
        }
    }
}

impl ShapeSource for Randomizer {
    fn draw(&mut self) -> PieceKind {
        match self {
            Self::Bag(bag) => bag.draw(),
            Self::Uniform(uniform) => uniform.draw(),
        }
    }

    fn peek(&self) -> PieceKind {
        match self {
            Self::Bag(bag) => bag.peek(),
            Self::Uniform(uniform) => uniform.peek(),
        }
    }
}

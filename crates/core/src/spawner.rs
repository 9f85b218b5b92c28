//! Spawner module - produces tile values for the initial fill and refills
//!
//! The board pulls every new tile from a [`Spawner`]. Implementations own their
//! RNG handle, so two boards seeded alike draw identical sequences.
//!
//! - [`UniformSpawner`]: every tile type equally likely (the default)
//! - [`WeightedSpawner`]: per-type integer weights
//! - [`ScriptedSpawner`]: replays a fixed sequence, for puzzles and fixtures

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, RngCore};

use crate::error::BoardError;
use crate::rng::SimpleRng;
use crate::types::TileValue;

/// Source of new tile values
pub trait Spawner {
    /// Number of distinct values this spawner emits; values are in `[0, count)`
    fn tile_type_count(&self) -> u8;

    /// Draw the next value
    fn next_tile_value(&mut self) -> TileValue;
}

impl<S: Spawner + ?Sized> Spawner for Box<S> {
    fn tile_type_count(&self) -> u8 {
        (**self).tile_type_count()
    }

    fn next_tile_value(&mut self) -> TileValue {
        (**self).next_tile_value()
    }
}

/// Uniform sampling over `[0, tile_types)`
#[derive(Debug, Clone)]
pub struct UniformSpawner<R = SimpleRng> {
    rng: R,
    tile_types: u8,
}

impl UniformSpawner<SimpleRng> {
    /// Uniform spawner backed by a [`SimpleRng`] with the given seed
    pub fn with_seed(tile_types: u8, seed: u32) -> Self {
        Self::new(tile_types, SimpleRng::new(seed))
    }
}

impl<R: RngCore> UniformSpawner<R> {
    pub fn new(tile_types: u8, rng: R) -> Self {
        assert!(tile_types > 0, "a spawner needs at least one tile type");
        Self { rng, tile_types }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RngCore> Spawner for UniformSpawner<R> {
    fn tile_type_count(&self) -> u8 {
        self.tile_types
    }

    fn next_tile_value(&mut self) -> TileValue {
        self.rng.gen_range(0..self.tile_types)
    }
}

/// Weighted sampling: tile type `i` is drawn with probability `weights[i] / sum`
#[derive(Debug, Clone)]
pub struct WeightedSpawner<R = SimpleRng> {
    rng: R,
    dist: WeightedIndex<u32>,
    tile_types: u8,
}

impl WeightedSpawner<SimpleRng> {
    pub fn with_seed(weights: &[u32], seed: u32) -> Result<Self, BoardError> {
        Self::new(weights, SimpleRng::new(seed))
    }
}

impl<R: RngCore> WeightedSpawner<R> {
    /// Fails if `weights` is empty, longer than 255 entries, or sums to zero.
    pub fn new(weights: &[u32], rng: R) -> Result<Self, BoardError> {
        let tile_types = u8::try_from(weights.len()).map_err(|_| BoardError::TooManyTileTypes {
            got: weights.len(),
            max: u8::MAX as usize,
        })?;
        let dist = WeightedIndex::new(weights)?;
        Ok(Self {
            rng,
            dist,
            tile_types,
        })
    }
}

impl<R: RngCore> Spawner for WeightedSpawner<R> {
    fn tile_type_count(&self) -> u8 {
        self.tile_types
    }

    fn next_tile_value(&mut self) -> TileValue {
        // Index is < weights.len() <= 255
        self.dist.sample(&mut self.rng) as TileValue
    }
}

/// Replays `values` in order, wrapping around at the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSpawner {
    values: Vec<TileValue>,
    cursor: usize,
    tile_types: u8,
}

impl ScriptedSpawner {
    pub fn new(tile_types: u8, values: Vec<TileValue>) -> Self {
        debug_assert!(values.iter().all(|&v| v < tile_types));
        Self {
            values,
            cursor: 0,
            tile_types,
        }
    }

    /// Number of values handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl Spawner for ScriptedSpawner {
    fn tile_type_count(&self) -> u8 {
        self.tile_types
    }

    fn next_tile_value(&mut self) -> TileValue {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

/// Spawner chosen at runtime from a [`BoardConfig`](crate::config::BoardConfig)
#[derive(Debug, Clone)]
pub enum ConfiguredSpawner {
    Uniform(UniformSpawner),
    Weighted(WeightedSpawner),
}

impl Spawner for ConfiguredSpawner {
    fn tile_type_count(&self) -> u8 {
        match self {
            ConfiguredSpawner::Uniform(s) => s.tile_type_count(),
            ConfiguredSpawner::Weighted(s) => s.tile_type_count(),
        }
    }

    fn next_tile_value(&mut self) -> TileValue {
        match self {
            ConfiguredSpawner::Uniform(s) => s.next_tile_value(),
            ConfiguredSpawner::Weighted(s) => s.next_tile_value(),
        }
    }
}

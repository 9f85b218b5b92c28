//! Board configuration
//!
//! A `BoardConfig` describes a board before it exists: dimensions, how many
//! tile types, the RNG seed, and optional per-type spawn weights. It
//! deserializes from JSON with every field optional:
//!
//! ```
//! use match3_core::BoardConfig;
//!
//! let config = BoardConfig::from_json_str(r#"{ "width": 9, "seed": 7 }"#).unwrap();
//! assert_eq!(config.width, 9);
//! assert_eq!(config.height, 8);
//! assert_eq!(config.tile_types, 6);
//! ```
//!
//! # Environment Variables
//!
//! [`BoardConfig::apply_env`] overrides fields from:
//!
//! - `MATCH3_WIDTH`, `MATCH3_HEIGHT`: dimensions
//! - `MATCH3_TILE_TYPES`: number of tile types
//! - `MATCH3_SEED`: RNG seed

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::spawner::{ConfiguredSpawner, UniformSpawner, WeightedSpawner};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_TILE_TYPES, DEFAULT_WIDTH, MIN_TILE_TYPES};

pub const ENV_WIDTH: &str = "MATCH3_WIDTH";
pub const ENV_HEIGHT: &str = "MATCH3_HEIGHT";
pub const ENV_TILE_TYPES: &str = "MATCH3_TILE_TYPES";
pub const ENV_SEED: &str = "MATCH3_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub tile_types: u8,
    pub seed: u32,
    /// One weight per tile type; `None` means uniform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<u32>>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_types: DEFAULT_TILE_TYPES,
            seed: 1,
            weights: None,
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, BoardError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_types < MIN_TILE_TYPES {
            return Err(BoardError::TooFewTileTypes {
                got: self.tile_types,
                min: MIN_TILE_TYPES,
            });
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.tile_types as usize {
                return Err(BoardError::WeightCountMismatch {
                    expected: self.tile_types as usize,
                    got: weights.len(),
                });
            }
            if weights.iter().all(|&w| w == 0) {
                return Err(BoardError::ZeroWeights);
            }
        }
        Ok(())
    }

    /// Override fields from environment-style key lookups.
    ///
    /// Takes a lookup function so callers (and tests) decide where values come
    /// from; the binary passes `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), BoardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, BoardError> {
            raw.trim()
                .parse()
                .map_err(|_| BoardError::InvalidEnv { key, value: raw })
        }

        if let Some(raw) = lookup(ENV_WIDTH) {
            self.width = parse(ENV_WIDTH, raw)?;
        }
        if let Some(raw) = lookup(ENV_HEIGHT) {
            self.height = parse(ENV_HEIGHT, raw)?;
        }
        if let Some(raw) = lookup(ENV_TILE_TYPES) {
            self.tile_types = parse(ENV_TILE_TYPES, raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            self.seed = parse(ENV_SEED, raw)?;
        }
        Ok(())
    }

    /// Build the spawner this config describes
    pub fn spawner(&self) -> Result<ConfiguredSpawner, BoardError> {
        match &self.weights {
            Some(weights) => Ok(ConfiguredSpawner::Weighted(WeightedSpawner::with_seed(
                weights, self.seed,
            )?)),
            None => Ok(ConfiguredSpawner::Uniform(UniformSpawner::with_seed(
                self.tile_types,
                self.seed,
            ))),
        }
    }
}

//! Construction and configuration errors.
//!
//! Swaps never produce errors; their outcome is a [`SwapResult`](crate::types::SwapResult).
//! These errors only come from building a board or parsing its config.

use std::path::PathBuf;

use rand::distributions::WeightedError;
use thiserror::Error;

use crate::types::{Position, TileValue};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("at least {min} tile types are required, got {got}")]
    TooFewTileTypes { got: u8, min: u8 },

    #[error("expected one weight per tile type ({expected}), got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("at most {max} tile types are supported, got {got}")]
    TooManyTileTypes { got: usize, max: usize },

    #[error("every tile weight is zero")]
    ZeroWeights,

    #[error("invalid tile weights: {0}")]
    InvalidWeights(#[from] WeightedError),

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("tile value {value} at {position} is outside [0, {tile_types})")]
    TileOutOfRange {
        value: TileValue,
        position: Position,
        tile_types: u8,
    },

    #[error("malformed board config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{key}={value:?} is not a valid value")]
    InvalidEnv { key: &'static str, value: String },
}

//! Move helpers on top of the core simulation.
//!
//! - [`moves`]: apply a swap and classify why it was rejected
//! - [`hint`]: find swaps that would match, pick the best one, detect deadlock

pub mod hint;
pub mod moves;

pub use match3_core as core;
pub use match3_types as types;

pub use hint::{best_swap, find_swaps, is_deadlocked, Swap};
pub use moves::{apply_move, MoveError};

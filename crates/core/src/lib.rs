//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: board state, swap validation, match
//! detection, special tiles, and cascade resolution. It has **no dependencies**
//! on rendering, input, audio or I/O, making it:
//!
//! - **Deterministic**: Same seed and same swaps produce identical boards
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Runs headless, in a terminal, or behind any presentation layer
//! - **Synchronous**: One swap runs its whole cascade before returning
//!
//! # Module Structure
//!
//! - [`spawner`]: Sources of new tile values (uniform, weighted, scripted)
//! - [`grid`]: Flat storage for tiles and the special-tile overlay
//! - [`board`]: The owning [`Board`] and the read-only [`BoardView`] trait
//! - [`matcher`]: Run and L/T shape detection
//! - [`special`]: Special-tile creation rules and activation areas
//! - [`resolver`]: Swap validation and the clear/collapse/refill loop
//! - [`config`]: Serde-backed [`BoardConfig`]
//! - [`snapshot`]: Owned, serializable copy of a board for presentation
//!
//! # Rules
//!
//! - **Swap**: Two on-board, orthogonally adjacent cells; kept only if it makes a run
//! - **Match**: 3+ identical tiles in a row or column; L/T crossings are tracked too
//! - **Specials**: 4-run makes Bomb (horizontal) or Lightning (vertical), 5-run
//!   makes Rainbow, 6+ makes Star; a T crossing makes Star, an L makes Bomb
//! - **Cascade**: Clear, collapse toward `y = 0`, refill from the top, repeat
//!   until no run remains
//!
//! # Example
//!
//! ```
//! use match3_core::{Board, BoardView};
//! use match3_core::types::Position;
//!
//! let mut board = Board::with_seed(8, 8, 6, 12345);
//! assert!(board.is_at_rest());
//!
//! // Diagonal swaps are always rejected without touching the board
//! let result = board.try_swap_and_resolve(Position::new(0, 0), Position::new(1, 1));
//! assert!(!result.success);
//!
//! // Whatever happens, the board is full again afterwards
//! board.try_swap_and_resolve(Position::new(0, 0), Position::new(1, 0));
//! assert!(board.grid().count_empty() == 0);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod snapshot;
pub mod spawner;
pub mod special;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardView};
pub use config::BoardConfig;
pub use error::BoardError;
pub use grid::Grid;
pub use matcher::{find_matches, find_runs, has_match, has_match_at, MatchSet, Run, Shape};
pub use resolver::{are_adjacent, CascadeStep};
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
pub use spawner::{ConfiguredSpawner, ScriptedSpawner, Spawner, UniformSpawner, WeightedSpawner};
pub use special::{activate_marked, activation_area, plan_creations, Creation};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no required dependencies, making them usable
//! in any context (simulation core, move search, presentation layers).
//! Enable the `serde` feature to derive `Serialize`/`Deserialize`.
//!
//! # Coordinates
//!
//! Positions are `(x, y)` with `x` growing to the right and `y` growing
//! **upwards**: row `0` is the bottom row. Gravity pulls tiles toward `y = 0`
//! and refills enter from the top row.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 8 | Columns on a default board |
//! | `DEFAULT_HEIGHT` | 8 | Rows on a default board |
//! | `DEFAULT_TILE_TYPES` | 6 | Distinct tile colors |
//! | `MIN_RUN_LENGTH` | 3 | Shortest run that counts as a match |
//! | `MAX_FILL_ATTEMPTS` | 10 | Re-draws per cell during the initial fill |
//! | `MAX_CASCADE_PASSES` | 256 | Upper bound on cascade passes per swap |
//!
//! # Special tiles
//!
//! | Trigger | Kind |
//! |---------|------|
//! | Horizontal run of 4 | Bomb |
//! | Vertical run of 4 | Lightning |
//! | Run of 5 | Rainbow |
//! | Run of 6+ | Star |
//! | T shape | Star |
//! | L shape | Bomb |
//!
//! When several triggers land on one cell the highest priority wins:
//! Star > Rainbow > Lightning > Bomb.
//!
//! # Examples
//!
//! ```
//! use match3_types::{Axis, Position, SpecialKind, ShapeKind};
//!
//! let a = Position::new(2, 3);
//! assert!(a.is_adjacent(Position::new(2, 4)));
//! assert!(!a.is_adjacent(Position::new(3, 4)));
//!
//! assert_eq!(SpecialKind::for_run(Axis::Horizontal, 4), Some(SpecialKind::Bomb));
//! assert_eq!(SpecialKind::for_run(Axis::Vertical, 4), Some(SpecialKind::Lightning));
//! assert_eq!(SpecialKind::for_shape(ShapeKind::T), SpecialKind::Star);
//! assert!(SpecialKind::Star.priority() > SpecialKind::Bomb.priority());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default board width in cells (8 columns)
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height in cells (8 rows)
pub const DEFAULT_HEIGHT: usize = 8;

/// Default number of distinct tile values
pub const DEFAULT_TILE_TYPES: u8 = 6;

/// Fewest tile types a playable board may use
pub const MIN_TILE_TYPES: u8 = 3;

/// Shortest run of identical values that counts as a match
pub const MIN_RUN_LENGTH: usize = 3;

/// Maximum draws per cell while filling a fresh board.
///
/// After this many rejected draws the last value is accepted even if it
/// completes a run. The fill is best-effort, never an unbounded loop.
pub const MAX_FILL_ATTEMPTS: u32 = 10;

/// Upper bound on clear/collapse/refill passes inside one swap.
pub const MAX_CASCADE_PASSES: u32 = 256;


/// A tile color in `[0, tile_type_count)`
pub type TileValue = u8;

/// A cell on the board
///
/// - `None`: Empty cell (only observable mid-resolve, or out of bounds)
/// - `Some(TileValue)`: Cell holding a tile of that color
pub type Cell = Option<TileValue>;

/// A board coordinate. `y = 0` is the bottom row.
///
/// Coordinates are signed so callers can probe neighbors of edge cells
/// (`x - 1`, `y + 1`) and get the out-of-bounds sentinel back instead of
/// having to guard every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`, widened so opposite corners of the
    /// `i32` plane do not overflow
    pub fn manhattan(self, other: Position) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Chebyshev distance to `other` (king moves)
    pub fn chebyshev(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Two positions are adjacent iff they differ by exactly one step
    /// horizontally or vertically (no diagonals).
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::Position;
    ///
    /// assert!(Position::new(0, 0).is_adjacent(Position::new(1, 0)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(1, 1)));
    /// ```
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Offset by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Along a row (varying `x`)
    Horizontal,
    /// Along a column (varying `y`)
    Vertical,
}

/// Crossing shape formed by a horizontal and a vertical run sharing a cell
///
/// - **T**: the shared cell lies strictly inside the horizontal run
/// - **L**: the shared cell is an end of the horizontal run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    L,
    T,
}

/// Kind of special tile
///
/// Each kind has one activation effect:
/// - **Bomb**: clears the square of Chebyshev radius `1 + power`
/// - **Lightning**: clears its whole row and whole column
/// - **Rainbow**: clears every tile sharing its `base_value`
/// - **Star**: clears its whole row and whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpecialKind {
    Bomb,
    Lightning,
    Rainbow,
    Star,
}

impl SpecialKind {
    /// Special tile created by a straight run of `len` cells, if any
    pub fn for_run(axis: Axis, len: usize) -> Option<Self> {
        match (axis, len) {
            (_, 0..=3) => None,
            (Axis::Horizontal, 4) => Some(SpecialKind::Bomb),
            (Axis::Vertical, 4) => Some(SpecialKind::Lightning),
            (_, 5) => Some(SpecialKind::Rainbow),
            _ => Some(SpecialKind::Star),
        }
    }

    /// Special tile created by an L or T crossing
    pub fn for_shape(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::T => SpecialKind::Star,
            ShapeKind::L => SpecialKind::Bomb,
        }
    }

    /// Tie-break rank when several triggers target one cell (higher wins)
    pub fn priority(self) -> u8 {
        match self {
            SpecialKind::Bomb => 0,
            SpecialKind::Lightning => 1,
            SpecialKind::Rainbow => 2,
            SpecialKind::Star => 3,
        }
    }

    /// Parse kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::SpecialKind;
    ///
    /// assert_eq!(SpecialKind::from_str("bomb"), Some(SpecialKind::Bomb));
    /// assert_eq!(SpecialKind::from_str("STAR"), Some(SpecialKind::Star));
    /// assert_eq!(SpecialKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bomb" => Some(SpecialKind::Bomb),
            "lightning" => Some(SpecialKind::Lightning),
            "rainbow" => Some(SpecialKind::Rainbow),
            "star" => Some(SpecialKind::Star),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialKind::Bomb => "bomb",
            SpecialKind::Lightning => "lightning",
            SpecialKind::Rainbow => "rainbow",
            SpecialKind::Star => "star",
        }
    }
}

/// A special tile sitting in the overlay on top of a regular tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialTile {
    /// Color of the run that created it (Rainbow clears this color)
    pub base_value: TileValue,
    pub kind: SpecialKind,
    /// Effect strength; Bomb radius is `1 + power`
    pub power: u8,
}

impl SpecialTile {
    pub const fn new(base_value: TileValue, kind: SpecialKind) -> Self {
        Self {
            base_value,
            kind,
            power: 0,
        }
    }

    pub const fn with_power(mut self, power: u8) -> Self {
        self.power = power;
        self
    }
}

/// Outcome of one swap request.
///
/// A rejected swap (`success == false`) never mutates the board and always
/// reports zero cleared tiles and zero chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwapResult {
    pub success: bool,
    /// Tiles cleared over every cascade pass
    pub cleared: u32,
    /// Number of cascade passes that cleared something
    pub chains: u32,
}

impl SwapResult {
    pub const fn rejected() -> Self {
        Self {
            success: false,
            cleared: 0,
            chains: 0,
        }
    }
}

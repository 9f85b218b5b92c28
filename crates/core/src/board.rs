//! Board module - the owner of one match-3 grid
//!
//! [`Board`] exclusively owns the tile grid, the special-tile overlay, the
//! spawner that refills them, and the results of the most recent swap.
//! Everything that only needs to look at the board takes a [`BoardView`]
//! instead, so the match detector, the special-tile engine, presentation code
//! and move search never hold a mutable alias.
//!
//! Out-of-range reads return the empty sentinel (`None`) rather than failing;
//! out-of-range writes are no-ops that return `false`.

use log::debug;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::grid::Grid;
use crate::matcher::has_match;
use crate::resolver::CascadeStep;
use crate::spawner::{ConfiguredSpawner, Spawner, UniformSpawner};
use crate::types::{Cell, Position, SpecialTile, TileValue, MAX_FILL_ATTEMPTS};

/// Read-only surface over a board
pub trait BoardView {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Number of distinct tile values; every tile is in `[0, count)`
    fn tile_type_count(&self) -> u8;

    /// Tile at (x, y), `None` if empty or out of bounds
    fn get_tile(&self, x: i32, y: i32) -> Cell;

    /// Special tile at (x, y), `None` if there is none or out of bounds
    fn get_special_tile(&self, x: i32, y: i32) -> Option<SpecialTile>;

    /// Cells cleared by the most recent swap, pass by pass
    fn last_cleared(&self) -> &[Position] {
        &[]
    }

    /// Cells refilled by the spawner during the most recent swap
    fn last_spawned(&self) -> &[Position] {
        &[]
    }

    /// Cells that received a new special tile during the most recent swap
    fn last_created_specials(&self) -> &[Position] {
        &[]
    }

    fn in_bounds(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width() && (p.y as usize) < self.height()
    }

    fn tile_at(&self, p: Position) -> Cell {
        self.get_tile(p.x, p.y)
    }

    fn special_at(&self, p: Position) -> Option<SpecialTile> {
        self.get_special_tile(p.x, p.y)
    }
}

/// A match-3 board and everything needed to resolve swaps on it
#[derive(Debug, Clone)]
pub struct Board<S: Spawner = UniformSpawner> {
    pub(crate) grid: Grid,
    pub(crate) spawner: S,
    pub(crate) last_cleared: Vec<Position>,
    pub(crate) last_spawned: Vec<Position>,
    pub(crate) last_created: Vec<Position>,
    pub(crate) last_steps: Vec<CascadeStep>,
}

impl Board<UniformSpawner> {
    /// Board filled from a uniform spawner seeded with `seed`
    pub fn with_seed(width: usize, height: usize, tile_types: u8, seed: u32) -> Self {
        Self::new(width, height, UniformSpawner::with_seed(tile_types, seed))
    }
}

impl Board<ConfiguredSpawner> {
    /// Validate `config` and build a freshly filled board from it
    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let spawner = config.spawner()?;
        Ok(Self::new(config.width, config.height, spawner))
    }
}

impl<S: Spawner> Board<S> {
    /// Create a board and run the initial fill.
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize, spawner: S) -> Self {
        let grid = Grid::new(width, height, spawner.tile_type_count());
        let mut board = Self::empty(grid, spawner);
        board.initialize();
        board
    }

    /// Load a fixed layout without running the fill.
    ///
    /// `rows[y][x]`, bottom row first. The layout is taken as-is, so it may
    /// contain matches; [`Board::settle`] resolves them.
    pub fn from_rows<R: AsRef<[TileValue]>>(rows: &[R], spawner: S) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let tile_types = spawner.tile_type_count();
        let mut grid = Grid::new(width, height, tile_types);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(BoardError::RaggedRows {
                    row: y,
                    got: row.len(),
                    expected: width,
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let position = Position::new(x as i32, y as i32);
                if value >= tile_types {
                    return Err(BoardError::TileOutOfRange {
                        value,
                        position,
                        tile_types,
                    });
                }
                grid.set_tile(position.x, position.y, Some(value));
            }
        }

        Ok(Self::empty(grid, spawner))
    }

    fn empty(grid: Grid, spawner: S) -> Self {
        Self {
            grid,
            spawner,
            last_cleared: Vec::new(),
            last_spawned: Vec::new(),
            last_created: Vec::new(),
            last_steps: Vec::new(),
        }
    }

    /// (Re)fill every cell from the spawner, dropping all specials.
    ///
    /// Cells are filled left to right within rows, bottom row first. A value
    /// that would complete a run with the two cells to its left or below is
    /// re-drawn, up to [`MAX_FILL_ATTEMPTS`] draws per cell. If every draw is
    /// rejected the last one is kept anyway, so the fill is best-effort: a
    /// spawner with very few types or skewed weights can leave a starting run.
    pub fn initialize(&mut self) {
        self.grid.clear();
        self.clear_last_operation();

        let mut imperfect = 0usize;
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let mut value = self.spawner.next_tile_value();
                let mut attempts = 1;
                while attempts < MAX_FILL_ATTEMPTS && self.grid.completes_run_backwards(x, y, value)
                {
                    value = self.spawner.next_tile_value();
                    attempts += 1;
                }
                if self.grid.completes_run_backwards(x, y, value) {
                    imperfect += 1;
                    debug!(
                        "fill: accepting run-completing value {} at ({}, {}) after {} attempts",
                        value, x, y, attempts
                    );
                }
                self.grid.set_tile(x, y, Some(value));
            }
        }

        debug!(
            "initialized {}x{} board with {} tile types ({} imperfect cells)",
            self.grid.width(),
            self.grid.height(),
            self.grid.tile_type_count(),
            imperfect
        );
    }

    /// Overwrite the tile at (x, y). Returns false if out of bounds.
    ///
    /// Setting `None` empties the cell and drops its special tile.
    pub fn set_tile(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        self.grid.set_tile(x, y, cell)
    }

    /// Overwrite the special overlay at (x, y). Returns false if out of bounds.
    pub fn set_special_tile(&mut self, x: i32, y: i32, special: Option<SpecialTile>) -> bool {
        self.grid.set_special_tile(x, y, special)
    }

    /// No empty cells and no runs anywhere
    pub fn is_at_rest(&self) -> bool {
        self.grid.count_empty() == 0 && !has_match(&self.grid)
    }

    /// Tile layer, row-major, bottom row first
    pub fn tiles(&self) -> &[Cell] {
        self.grid.tiles()
    }

    /// Special overlay, same layout as [`Board::tiles`]
    pub fn specials(&self) -> &[Option<SpecialTile>] {
        self.grid.specials()
    }

    /// Borrow the underlying grid (tiles + overlay)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Per-pass breakdown of the most recent swap
    pub fn last_steps(&self) -> &[CascadeStep] {
        &self.last_steps
    }

    pub(crate) fn clear_last_operation(&mut self) {
        self.last_cleared.clear();
        self.last_spawned.clear();
        self.last_created.clear();
        self.last_steps.clear();
    }
}

impl<S: Spawner> BoardView for Board<S> {
    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn tile_type_count(&self) -> u8 {
        self.grid.tile_type_count()
    }

    fn get_tile(&self, x: i32, y: i32) -> Cell {
        self.grid.get_tile(x, y)
    }

    fn get_special_tile(&self, x: i32, y: i32) -> Option<SpecialTile> {
        self.grid.get_special_tile(x, y)
    }

    fn last_cleared(&self) -> &[Position] {
        &self.last_cleared
    }

    fn last_spawned(&self) -> &[Position] {
        &self.last_spawned
    }

    fn last_created_specials(&self) -> &[Position] {
        &self.last_created
    }
}

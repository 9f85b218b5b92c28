//! Grid module - flat storage for tiles and the special-tile overlay
//!
//! A `width x height` grid where each cell holds an optional tile value and an
//! optional special tile. Both layers live in parallel flat arrays (row-major,
//! `y * width + x`) that are created together and always have the same length.
//!
//! Coordinates: `(x, y)` with `x` growing right and `y` growing up; row 0 is the
//! bottom row. Gravity compacts columns toward `y = 0`.

use crate::board::BoardView;
use crate::types::{Cell, Position, SpecialTile, TileValue, MIN_RUN_LENGTH};

/// Tile values plus special overlay, without a spawner or history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tile_types: u8,
    /// Flat array of cells, row-major order (y * width + x)
    tiles: Vec<Cell>,
    /// Special overlay, same layout as `tiles`
    specials: Vec<Option<SpecialTile>>,
}

impl Grid {
    /// Create an empty grid. Panics on a zero dimension.
    pub fn new(width: usize, height: usize, tile_types: u8) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be non-zero, got {width}x{height}"
        );
        let size = width * height;
        Self {
            width,
            height,
            tile_types,
            tiles: vec![None; size],
            specials: vec![None; size],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Inverse of [`Grid::index`]
    #[inline]
    pub fn position(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn in_bounds(&self, p: Position) -> bool {
        self.index(p.x, p.y).is_some()
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Set the tile at (x, y). Emptying a cell also drops its special tile.
    /// Returns false if out of bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = cell;
                if cell.is_none() {
                    self.specials[idx] = None;
                }
                true
            }
            None => false,
        }
    }

    /// Set the special overlay at (x, y)
    /// Returns false if out of bounds
    pub fn set_special_tile(&mut self, x: i32, y: i32, special: Option<SpecialTile>) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.specials[idx] = special;
                true
            }
            None => false,
        }
    }

    /// Exchange tile and special overlay between two cells.
    /// Returns false (and changes nothing) if either is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a.x, a.y), self.index(b.x, b.y)) {
            (Some(ia), Some(ib)) => {
                self.tiles.swap(ia, ib);
                self.specials.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Empty a cell (tile and special)
    pub fn clear_cell(&mut self, p: Position) {
        if let Some(idx) = self.index(p.x, p.y) {
            self.tiles[idx] = None;
            self.specials[idx] = None;
        }
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.tiles.fill(None);
        self.specials.fill(None);
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.tiles.iter().filter(|c| c.is_none()).count()
    }

    /// Would placing `value` at (x, y) complete a run with the two cells to
    /// its left or the two cells below it?
    ///
    /// Only looks backwards, matching a fill order of left-to-right within
    /// bottom-to-top rows.
    pub fn completes_run_backwards(&self, x: i32, y: i32, value: TileValue) -> bool {
        debug_assert_eq!(MIN_RUN_LENGTH, 3);
        let left = self.get_tile(x - 1, y) == Some(value) && self.get_tile(x - 2, y) == Some(value);
        let below =
            self.get_tile(x, y - 1) == Some(value) && self.get_tile(x, y - 2) == Some(value);
        left || below
    }

    /// Compact column `x` toward the bottom, preserving the order of the
    /// remaining tiles (specials travel with their tiles).
    ///
    /// Single write-index pass, no repeated shifting.
    /// Returns the number of empty cells left at the top of the column.
    pub fn collapse_column(&mut self, x: usize) -> usize {
        if x >= self.width {
            return 0;
        }

        let width = self.width;
        let mut write_y = 0usize;

        // Scan from bottom to top
        for read_y in 0..self.height {
            let read = read_y * width + x;
            if self.tiles[read].is_none() {
                continue;
            }
            if write_y != read_y {
                let write = write_y * width + x;
                self.tiles[write] = self.tiles[read].take();
                self.specials[write] = self.specials[read].take();
            }
            write_y += 1;
        }

        self.height - write_y
    }

    /// Tile layer, row-major
    pub fn tiles(&self) -> &[Cell] {
        &self.tiles
    }

    /// Special overlay, row-major
    pub fn specials(&self) -> &[Option<SpecialTile>] {
        &self.specials
    }

    /// Convert to rows of cells (`rows[y][x]`, bottom row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.tiles.chunks(self.width).map(<[Cell]>::to_vec).collect()
    }
}

impl BoardView for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn tile_type_count(&self) -> u8 {
        self.tile_types
    }

    fn get_tile(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).and_then(|idx| self.tiles[idx])
    }

    fn get_special_tile(&self, x: i32, y: i32) -> Option<SpecialTile> {
        self.index(x, y).and_then(|idx| self.specials[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpecialKind;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(8, 6, 5);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(7, 0), Some(7));
        assert_eq!(grid.index(0, 1), Some(8));
        assert_eq!(grid.index(7, 5), Some(47));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(8, 0), None);
        assert_eq!(grid.index(0, 6), None);
        assert_eq!(grid.position(47), Position::new(7, 5));
    }

    #[test]
    fn test_out_of_bounds_reads_are_sentinels() {
        let mut grid = Grid::new(3, 3, 4);
        grid.set_tile(0, 0, Some(2));
        grid.set_special_tile(0, 0, Some(SpecialTile::new(2, SpecialKind::Bomb)));

        assert_eq!(grid.get_tile(-1, 0), None);
        assert_eq!(grid.get_tile(3, 0), None);
        assert_eq!(grid.get_special_tile(0, -1), None);
        assert_eq!(grid.get_special_tile(0, 3), None);
        assert!(!grid.set_tile(3, 3, Some(1)));
        assert!(!grid.set_special_tile(-1, 0, None));
    }

    #[test]
    fn test_emptying_a_cell_drops_special() {
        let mut grid = Grid::new(2, 2, 4);
        grid.set_tile(1, 1, Some(3));
        grid.set_special_tile(1, 1, Some(SpecialTile::new(3, SpecialKind::Star)));
        grid.set_tile(1, 1, None);
        assert_eq!(grid.get_special_tile(1, 1), None);
    }

    #[test]
    fn test_swap_moves_specials_with_tiles() {
        let mut grid = Grid::new(2, 1, 4);
        grid.set_tile(0, 0, Some(1));
        grid.set_tile(1, 0, Some(2));
        grid.set_special_tile(0, 0, Some(SpecialTile::new(1, SpecialKind::Lightning)));

        assert!(grid.swap(Position::new(0, 0), Position::new(1, 0)));
        assert_eq!(grid.get_tile(0, 0), Some(2));
        assert_eq!(grid.get_tile(1, 0), Some(1));
        assert_eq!(grid.get_special_tile(0, 0), None);
        assert_eq!(
            grid.get_special_tile(1, 0).map(|s| s.kind),
            Some(SpecialKind::Lightning)
        );

        assert!(!grid.swap(Position::new(0, 0), Position::new(2, 0)));
    }

    #[test]
    fn test_collapse_column_preserves_order() {
        let mut grid = Grid::new(1, 6, 6);
        // bottom -> top: 1, _, 2, _, _, 3
        grid.set_tile(0, 0, Some(1));
        grid.set_tile(0, 2, Some(2));
        grid.set_tile(0, 5, Some(3));
        grid.set_special_tile(0, 5, Some(SpecialTile::new(3, SpecialKind::Bomb)));

        let vacant = grid.collapse_column(0);
        assert_eq!(vacant, 3);
        assert_eq!(grid.get_tile(0, 0), Some(1));
        assert_eq!(grid.get_tile(0, 1), Some(2));
        assert_eq!(grid.get_tile(0, 2), Some(3));
        assert_eq!(
            grid.get_special_tile(0, 2).map(|s| s.kind),
            Some(SpecialKind::Bomb)
        );
        for y in 3..6 {
            assert_eq!(grid.get_tile(0, y), None);
            assert_eq!(grid.get_special_tile(0, y), None);
        }
    }

    #[test]
    fn test_collapse_full_column_is_noop() {
        let mut grid = Grid::new(1, 3, 3);
        for y in 0..3 {
            grid.set_tile(0, y, Some(y as u8));
        }
        let before = grid.clone();
        assert_eq!(grid.collapse_column(0), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_completes_run_backwards() {
        let mut grid = Grid::new(4, 4, 4);
        grid.set_tile(0, 0, Some(1));
        grid.set_tile(1, 0, Some(1));
        assert!(grid.completes_run_backwards(2, 0, 1));
        assert!(!grid.completes_run_backwards(2, 0, 2));

        grid.set_tile(3, 0, Some(2));
        grid.set_tile(3, 1, Some(2));
        assert!(grid.completes_run_backwards(3, 2, 2));
        assert!(!grid.completes_run_backwards(3, 2, 1));
    }
}

use serde::{Deserialize, Serialize};

use crate::board::BoardView;
use crate::types::{Cell, Position, SpecialTile};

/// Owned copy of everything a presentation layer reads from a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub tile_types: u8,
    /// Row-major, bottom row first
    pub tiles: Vec<Cell>,
    /// Row-major, bottom row first
    pub specials: Vec<Option<SpecialTile>>,
    pub last_cleared: Vec<Position>,
    pub last_spawned: Vec<Position>,
    pub last_created: Vec<Position>,
}

impl BoardSnapshot {
    pub fn capture<V: BoardView + ?Sized>(view: &V) -> Self {
        let (w, h) = (view.width() as i32, view.height() as i32);
        let mut tiles = Vec::with_capacity((w * h) as usize);
        let mut specials = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                tiles.push(view.get_tile(x, y));
                specials.push(view.get_special_tile(x, y));
            }
        }

        Self {
            width: view.width(),
            height: view.height(),
            tile_types: view.tile_type_count(),
            tiles,
            specials,
            last_cleared: view.last_cleared().to_vec(),
            last_spawned: view.last_spawned().to_vec(),
            last_created: view.last_created_specials().to_vec(),
        }
    }

    pub fn tile(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.tiles[y as usize * self.width + x as usize]
    }

    /// Rows as text, top row first, one digit per tile (`.` empty, `*` special)
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let i = y * self.width + x;
                let c = match (self.tiles[i], self.specials[i]) {
                    (None, _) => '.',
                    (Some(_), Some(_)) => '*',
                    (Some(v), None) => char::from_digit(v as u32 % 36, 36).unwrap_or('?'),
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::spawner::ScriptedSpawner;
    use crate::types::SpecialKind;

    #[test]
    fn capture_matches_board() {
        let rows = [[0u8, 1, 2], [2, 0, 1]];
        let mut board = Board::from_rows(&rows, ScriptedSpawner::new(3, vec![0])).unwrap();
        board.set_special_tile(2, 1, Some(SpecialTile::new(1, SpecialKind::Star)));

        let snap = BoardSnapshot::capture(&board);
        assert_eq!(snap.width, 3);
        assert_eq!(snap.tile(1, 1), Some(0));
        assert_eq!(snap.tile(3, 0), None);
        assert_eq!(snap.render_text(), "20*\n012\n");
    }

    #[test]
    fn serializes_to_json() {
        let board = Board::with_seed(4, 4, 5, 8);
        let snap = BoardSnapshot::capture(&board);
        let json = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}

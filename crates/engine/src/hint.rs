//! Hint search - which swaps would make a match right now
//!
//! Works on a scratch copy of the tile values, so the board itself is never
//! touched and no spawner draws are consumed.

use arrayvec::ArrayVec;
use log::trace;

use crate::core::{find_matches, has_match_at, BoardView, Grid};
use crate::types::Position;

/// A swap that creates at least one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub a: Position,
    pub b: Position,
    /// Cells matched immediately after the swap (before any cascade)
    pub matched: usize,
}

/// Right and upper neighbors of `p` that are on the board
fn forward_neighbors<V: BoardView + ?Sized>(view: &V, p: Position) -> ArrayVec<Position, 2> {
    let mut out = ArrayVec::new();
    for q in [p.offset(1, 0), p.offset(0, 1)] {
        if view.in_bounds(q) {
            out.push(q);
        }
    }
    out
}

fn scratch_copy<V: BoardView + ?Sized>(view: &V) -> Grid {
    let mut grid = Grid::new(view.width(), view.height(), view.tile_type_count());
    for y in 0..view.height() as i32 {
        for x in 0..view.width() as i32 {
            grid.set_tile(x, y, view.get_tile(x, y));
        }
    }
    grid
}

/// Every adjacent swap that would create a match, in row-major order of `a`.
///
/// Each unordered pair appears once, with `b` to the right of or above `a`.
pub fn find_swaps<V: BoardView + ?Sized>(view: &V) -> Vec<Swap> {
    let mut grid = scratch_copy(view);
    let mut swaps = Vec::new();

    for y in 0..view.height() as i32 {
        for x in 0..view.width() as i32 {
            let a = Position::new(x, y);
            for b in forward_neighbors(view, a) {
                if grid.tile_at(a) == grid.tile_at(b) {
                    continue;
                }
                grid.swap(a, b);
                if has_match_at(&grid, a) || has_match_at(&grid, b) {
                    let matched = find_matches(&grid).cells().len();
                    trace!("hint: {} <-> {} matches {} cells", a, b, matched);
                    swaps.push(Swap { a, b, matched });
                }
                grid.swap(a, b);
            }
        }
    }

    swaps
}

/// The swap matching the most cells right away; earliest in scan order on ties
pub fn best_swap<V: BoardView + ?Sized>(view: &V) -> Option<Swap> {
    find_swaps(view)
        .into_iter()
        .fold(None, |best: Option<Swap>, s| match best {
            Some(b) if b.matched >= s.matched => Some(b),
            _ => Some(s),
        })
}

/// No swap on the board creates a match
pub fn is_deadlocked<V: BoardView + ?Sized>(view: &V) -> bool {
    find_swaps(view).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, ScriptedSpawner};

    #[test]
    fn finds_single_swap() {
        // y=2: 3 0 1 0
        // y=1: 0 1 0 1
        // y=0: 2 2 0 2
        let rows = [[2u8, 2, 0, 2], [0, 1, 0, 1], [3, 0, 1, 0]];
        let board = Board::from_rows(&rows, ScriptedSpawner::new(4, vec![0])).unwrap();
        let swaps = find_swaps(&board);
        assert!(swaps.contains(&Swap {
            a: Position::new(2, 0),
            b: Position::new(3, 0),
            matched: 3,
        }));
        for s in &swaps {
            assert!(s.a.is_adjacent(s.b));
            assert!(s.matched >= 3);
        }
        assert!(!is_deadlocked(&board));
    }

    #[test]
    fn deadlocked_board() {
        // y=1: 1 2 3 0
        // y=0: 0 1 2 3
        let rows = [[0u8, 1, 2, 3], [1, 2, 3, 0]];
        let board = Board::from_rows(&rows, ScriptedSpawner::new(4, vec![0])).unwrap();
        assert!(is_deadlocked(&board));
        assert_eq!(best_swap(&board), None);
    }

    #[test]
    fn best_swap_prefers_larger_match() {
        // Swapping (2,1)<->(2,0) completes a 5-run on row 0;
        // swapping (2,0)<->(3,0) only makes a 3-run.
        // y=2: 3 1 0 2 3
        // y=1: 1 0 4 0 2
        // y=0: 4 4 0 4 4
        let rows = [[4u8, 4, 0, 4, 4], [1, 0, 4, 0, 2], [3, 1, 0, 2, 3]];
        let board = Board::from_rows(&rows, ScriptedSpawner::new(5, vec![0])).unwrap();
        let best = best_swap(&board).unwrap();
        assert_eq!(best.a, Position::new(2, 0));
        assert_eq!(best.b, Position::new(2, 1));
        assert_eq!(best.matched, 5);
    }

    #[test]
    fn search_does_not_touch_board() {
        let board = Board::with_seed(8, 8, 6, 99);
        let before = board.grid().clone();
        let _ = find_swaps(&board);
        assert_eq!(board.grid(), &before);
    }
}

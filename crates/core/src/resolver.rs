//! Resolver - swap validation and the cascade loop
//!
//! A swap is accepted only if both cells are on the board, adjacent, and the
//! exchange produces at least one run. Accepted swaps then resolve to a fixpoint:
//!
//! 1. find every run and crossing
//! 2. activate special tiles under matched cells (and any they reach)
//! 3. plan new special tiles; their anchor cells survive the clear
//! 4. clear every other marked cell
//! 5. collapse each column toward `y = 0`, refill the top from the spawner
//!
//! Each pass that clears something is one chain. The loop stops when a pass
//! finds no run, or after [`MAX_CASCADE_PASSES`] passes.
//!
//! Refill order is column by column from `x = 0`, bottom vacancy first, so a
//! given spawner sequence always lands on the same cells.

use log::{debug, warn};

use crate::board::{Board, BoardView};
use crate::matcher::{find_matches, has_match};
use crate::special::{activate_marked, plan_creations};
use crate::spawner::Spawner;
use crate::types::{Position, SwapResult, MAX_CASCADE_PASSES};

/// Two positions are adjacent iff their Manhattan distance is 1
pub fn are_adjacent(a: Position, b: Position) -> bool {
    a.is_adjacent(b)
}

/// What one cascade pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeStep {
    /// 1-based pass number
    pub chain: u32,
    /// Cells that were part of a run
    pub matched: Vec<Position>,
    /// Special tiles that fired, in firing order
    pub activated: Vec<Position>,
    /// Cells emptied this pass (matched or in an effect area, minus new specials)
    pub cleared: Vec<Position>,
    /// Cells refilled from the spawner
    pub spawned: Vec<Position>,
    /// Where each new special tile sits once its column has collapsed
    pub created: Vec<Position>,
}

impl<S: Spawner> Board<S> {
    /// Swap `a` and `b` and resolve every cascade that follows.
    ///
    /// Rejected swaps (off-board, not adjacent, or no resulting run) leave the
    /// board untouched and return [`SwapResult::rejected`]. The last-operation
    /// lists are reset at the start of every call.
    pub fn try_swap_and_resolve(&mut self, a: Position, b: Position) -> SwapResult {
        self.clear_last_operation();

        if !self.in_bounds(a) || !self.in_bounds(b) || !are_adjacent(a, b) {
            debug!("swap {} <-> {} rejected: not an adjacent on-board pair", a, b);
            return SwapResult::rejected();
        }

        self.grid.swap(a, b);
        if !has_match(&self.grid) {
            self.grid.swap(a, b);
            debug!("swap {} <-> {} rejected: no match", a, b);
            return SwapResult::rejected();
        }

        let result = self.resolve_cascades();
        debug!(
            "swap {} <-> {}: cleared {} over {} chain(s)",
            a, b, result.cleared, result.chains
        );
        result
    }

    /// Resolve whatever runs are already on the board without swapping.
    ///
    /// Useful after [`Board::from_rows`] or manual edits. Empty cells are
    /// collapsed and refilled first. `success` is true if anything was cleared.
    pub fn settle(&mut self) -> SwapResult {
        self.clear_last_operation();
        self.resolve_cascades()
    }

    /// Drop every column toward `y = 0` and fill the vacancies left on top.
    ///
    /// Columns go left to right, bottom vacancy first. Returns the refilled cells.
    fn collapse_and_refill(&mut self) -> Vec<Position> {
        let height = self.grid.height();
        let mut spawned = Vec::new();
        for x in 0..self.grid.width() {
            let vacant = self.grid.collapse_column(x);
            for y in height - vacant..height {
                let value = self.spawner.next_tile_value();
                self.grid.set_tile(x as i32, y as i32, Some(value));
                spawned.push(Position::new(x as i32, y as i32));
            }
        }
        spawned
    }

    fn resolve_cascades(&mut self) -> SwapResult {
        let mut cleared_total = 0u32;
        let mut chains = 0u32;

        // Cells emptied through `set_tile` fall and refill before the first scan.
        if self.grid.count_empty() > 0 {
            let spawned = self.collapse_and_refill();
            debug!("refilled {} empty cell(s) before resolving", spawned.len());
            self.last_spawned.extend_from_slice(&spawned);
        }

        loop {
            if chains >= MAX_CASCADE_PASSES {
                warn!(
                    "cascade stopped after {} passes; board left full but not at rest",
                    chains
                );
                break;
            }

            let matches = find_matches(&self.grid);
            if matches.is_empty() {
                break;
            }
            chains += 1;

            let area = self.grid.area();
            let mut marked = vec![false; area];
            for p in matches.cells() {
                if let Some(i) = self.grid.index(p.x, p.y) {
                    marked[i] = true;
                }
            }

            let activated = activate_marked(&self.grid, &mut marked);

            // New specials keep their tile; everything else marked is cleared.
            let creations = plan_creations(&matches);
            for c in &creations {
                if let Some(i) = self.grid.index(c.position.x, c.position.y) {
                    marked[i] = false;
                }
            }

            let mut step = CascadeStep {
                chain: chains,
                matched: matches.cells().to_vec(),
                activated,
                ..CascadeStep::default()
            };

            for (i, _) in marked.iter().enumerate().filter(|&(_, &m)| m) {
                let p = self.grid.position(i);
                self.grid.clear_cell(p);
                step.cleared.push(p);
            }

            for c in &creations {
                self.grid
                    .set_special_tile(c.position.x, c.position.y, Some(c.special));
            }

            step.spawned = self.collapse_and_refill();

            // An anchor drops by the number of cleared cells beneath it.
            for c in &creations {
                let below = step
                    .cleared
                    .iter()
                    .filter(|p| p.x == c.position.x && p.y < c.position.y)
                    .count() as i32;
                step.created.push(c.position.offset(0, -below));
            }

            debug!(
                "chain {}: {} matched, {} specials fired, {} cleared, {} created",
                chains,
                step.matched.len(),
                step.activated.len(),
                step.cleared.len(),
                step.created.len()
            );

            cleared_total += step.cleared.len() as u32;
            self.last_cleared.extend_from_slice(&step.cleared);
            self.last_spawned.extend_from_slice(&step.spawned);
            self.last_created.extend_from_slice(&step.created);
            self.last_steps.push(step);
        }

        debug_assert_eq!(self.grid.count_empty(), 0, "resolve left an empty cell");
        debug_assert_eq!(self.grid.tiles().len(), self.grid.specials().len());

        SwapResult {
            success: chains > 0,
            cleared: cleared_total,
            chains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawner::ScriptedSpawner;
    use crate::types::{SpecialKind, SpecialTile};

    #[test]
    fn rejects_non_adjacent_and_off_board() {
        let mut board = Board::with_seed(6, 6, 5, 21);
        let before = board.grid().clone();

        let r = board.try_swap_and_resolve(Position::new(0, 0), Position::new(2, 0));
        assert_eq!(r, SwapResult::rejected());
        let r = board.try_swap_and_resolve(Position::new(0, 0), Position::new(1, 1));
        assert_eq!(r, SwapResult::rejected());
        let r = board.try_swap_and_resolve(Position::new(0, 0), Position::new(-1, 0));
        assert_eq!(r, SwapResult::rejected());
        let r = board.try_swap_and_resolve(Position::new(5, 5), Position::new(5, 6));
        assert_eq!(r, SwapResult::rejected());

        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn non_matching_swap_is_reverted() {
        // y=1: 1 2 3
        // y=0: 0 1 2
        let rows = [[0u8, 1, 2], [1, 2, 3]];
        let mut board = Board::from_rows(&rows, ScriptedSpawner::new(4, vec![0])).unwrap();
        let before = board.grid().clone();

        let r = board.try_swap_and_resolve(Position::new(0, 0), Position::new(1, 0));
        assert!(!r.success);
        assert_eq!(board.grid(), &before);
        assert!(board.last_cleared().is_empty());
    }

    #[test]
    fn settle_clears_preexisting_run() {
        // y=2: 0 1 0
        // y=1: 1 0 1
        // y=0: 2 2 2
        let rows = [[2u8, 2, 2], [1, 0, 1], [0, 1, 0]];
        let mut board = Board::from_rows(&rows, ScriptedSpawner::new(4, vec![3, 2, 3])).unwrap();

        let r = board.settle();
        assert_eq!(r, SwapResult { success: true, cleared: 3, chains: 1 });
        // Columns dropped by one, refills on top
        assert_eq!(board.get_tile(0, 0), Some(1));
        assert_eq!(board.get_tile(1, 0), Some(0));
        assert_eq!(board.get_tile(2, 0), Some(1));
        assert_eq!(board.get_tile(0, 2), Some(3));
        assert_eq!(board.get_tile(1, 2), Some(2));
        assert_eq!(board.get_tile(2, 2), Some(3));
        assert_eq!(board.last_spawned().len(), 3);
        assert!(board.is_at_rest());
    }

    #[test]
    fn special_in_match_fires() {
        // y=2: 0 1 0 1
        // y=1: 1 0 1 0
        // y=0: 2 2 2 3   bomb on (1,0)
        let rows = [[2u8, 2, 2, 3], [1, 0, 1, 0], [0, 1, 0, 1]];
        let refill = vec![4, 5, 5, 4, 4, 5];
        let mut board = Board::from_rows(&rows, ScriptedSpawner::new(6, refill)).unwrap();
        board.set_special_tile(1, 0, Some(SpecialTile::new(2, SpecialKind::Bomb)));

        let r = board.settle();
        assert_eq!(r, SwapResult { success: true, cleared: 6, chains: 1 });
        let first = &board.last_steps()[0];
        assert_eq!(first.activated, vec![Position::new(1, 0)]);
        // Bomb at (1,0) radius 1 covers x 0..=2, y 0..=1 (6 cells)
        assert_eq!(first.cleared.len(), 6);
        assert!(board.grid().specials().iter().all(|s| s.is_none()));
    }

    #[test]
    fn settle_refills_emptied_cell() {
        // y=2: 2 0 1
        // y=1: 1 2 0
        // y=0: 0 1 2
        let rows = [[0u8, 1, 2], [1, 2, 0], [2, 0, 1]];
        let mut board = Board::from_rows(&rows, ScriptedSpawner::new(4, vec![3])).unwrap();
        assert!(board.set_tile(1, 1, None));

        let r = board.settle();
        assert_eq!(r, SwapResult::rejected());
        assert_eq!(board.grid().count_empty(), 0);
        // Column 1 dropped by one and took the refill on top
        assert_eq!(board.get_tile(1, 1), Some(0));
        assert_eq!(board.get_tile(1, 2), Some(3));
        assert_eq!(board.last_spawned(), &[Position::new(1, 2)]);
        assert!(board.is_at_rest());
    }

    #[test]
    fn settle_refills_then_resolves_new_run() {
        let mut board = Board::with_seed(6, 6, 5, 21);
        board.set_tile(3, 3, None);
        board.set_tile(0, 5, None);
        board.settle();
        assert_eq!(board.grid().count_empty(), 0);
        assert!(board.is_at_rest());
    }

    #[test]
    fn cascade_cap_stops_constant_spawner() {
        let rows = [[0u8, 0, 0], [1, 2, 1], [2, 1, 2]];
        let mut board = Board::from_rows(&rows, ScriptedSpawner::new(3, vec![0])).unwrap();
        let r = board.settle();
        assert_eq!(r.chains, MAX_CASCADE_PASSES);
        assert_eq!(board.grid().count_empty(), 0);
    }
}

use crate::core::{Board, BoardView, Spawner};
use crate::types::{Position, SwapResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    NotAdjacent,
    NoMatch,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::OutOfBounds | MoveError::NotAdjacent => "invalid_move",
            MoveError::NoMatch => "no_match",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::OutOfBounds => "swap position is off the board",
            MoveError::NotAdjacent => "swap positions are not orthogonally adjacent",
            MoveError::NoMatch => "swap would not create a match",
        }
    }
}

/// Swap `a` and `b`, reporting why a rejected swap was rejected.
///
/// Same semantics as [`Board::try_swap_and_resolve`]: on `Err` the board is
/// unchanged.
pub fn apply_move<S: Spawner>(
    board: &mut Board<S>,
    a: Position,
    b: Position,
) -> Result<SwapResult, MoveError> {
    if !board.in_bounds(a) || !board.in_bounds(b) {
        return Err(MoveError::OutOfBounds);
    }
    if !a.is_adjacent(b) {
        return Err(MoveError::NotAdjacent);
    }

    let result = board.try_swap_and_resolve(a, b);
    if !result.success {
        return Err(MoveError::NoMatch);
    }
    Ok(result)
}

//! Board tests - construction, read surface and setters

use match3::core::{Board, BoardError, BoardView, ScriptedSpawner, WeightedSpawner};
use match3::types::{Position, SpecialKind, SpecialTile, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[test]
fn test_board_default_size_is_full() {
    let board = Board::with_seed(DEFAULT_WIDTH, DEFAULT_HEIGHT, 6, 12345);
    assert_eq!(board.width(), DEFAULT_WIDTH);
    assert_eq!(board.height(), DEFAULT_HEIGHT);
    assert_eq!(board.tile_type_count(), 6);

    for y in 0..DEFAULT_HEIGHT as i32 {
        for x in 0..DEFAULT_WIDTH as i32 {
            let tile = board.get_tile(x, y);
            assert!(tile.is_some(), "Cell ({}, {}) should be filled", x, y);
            assert!(tile.unwrap() < 6);
            assert_eq!(board.get_special_tile(x, y), None);
        }
    }
    assert!(board.is_at_rest());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::with_seed(5, 4, 4, 1);

    // Negative coordinates
    assert_eq!(board.get_tile(-1, 0), None);
    assert_eq!(board.get_tile(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get_tile(5, 0), None);
    assert_eq!(board.get_tile(0, 4), None);
    assert_eq!(board.get_special_tile(5, 4), None);

    assert!(!board.in_bounds(Position::new(5, 0)));
    assert!(board.in_bounds(Position::new(4, 3)));
}

#[test]
fn test_board_set_tile_and_special() {
    let mut board = Board::with_seed(4, 4, 5, 8);

    assert!(board.set_tile(2, 3, Some(4)));
    assert_eq!(board.get_tile(2, 3), Some(4));

    let star = SpecialTile::new(4, SpecialKind::Star).with_power(2);
    assert!(board.set_special_tile(2, 3, Some(star)));
    assert_eq!(board.get_special_tile(2, 3), Some(star));
    assert_eq!(board.special_at(Position::new(2, 3)), Some(star));

    // Emptying a cell drops its special as well
    assert!(board.set_tile(2, 3, None));
    assert_eq!(board.get_tile(2, 3), None);
    assert_eq!(board.get_special_tile(2, 3), None);
    assert!(!board.is_at_rest());
}

#[test]
fn test_same_seed_same_board() {
    let a = Board::with_seed(8, 8, 6, 777);
    let b = Board::with_seed(8, 8, 6, 777);
    let c = Board::with_seed(8, 8, 6, 778);
    assert_eq!(a.grid(), b.grid());
    assert_ne!(a.grid(), c.grid());
}

#[test]
fn test_reinitialize_keeps_drawing_from_spawner() {
    let mut board = Board::with_seed(6, 6, 6, 31);
    let first = board.grid().clone();
    board.initialize();
    assert_ne!(board.grid(), &first);
    assert!(board.is_at_rest());
    assert!(board.last_cleared().is_empty());
}

#[test]
fn test_fill_with_scripted_spawner_is_predictable() {
    // With three types cycling 0 1 2 no value can ever complete a run.
    let board = Board::new(3, 2, ScriptedSpawner::new(3, vec![0, 1, 2]));
    assert_eq!(board.get_tile(0, 0), Some(0));
    assert_eq!(board.get_tile(1, 0), Some(1));
    assert_eq!(board.get_tile(2, 0), Some(2));
    assert_eq!(board.get_tile(0, 1), Some(0));
    assert_eq!(board.spawner().drawn(), 6);
}

#[test]
fn test_fill_retries_run_completing_values() {
    // (2,0) draws 0 first, which would make 0 0 0, so it is re-drawn.
    let board = Board::new(3, 1, ScriptedSpawner::new(3, vec![0, 0, 0, 1]));
    assert_eq!(board.get_tile(2, 0), Some(1));
    assert_eq!(board.spawner().drawn(), 4);
}

#[test]
fn test_weighted_spawner_board() {
    let spawner = WeightedSpawner::with_seed(&[5, 5, 5, 5, 0], 9).unwrap();
    let board = Board::new(8, 8, spawner);
    assert_eq!(board.tile_type_count(), 5);
    assert!(board.tiles().iter().all(|&t| t != Some(4)));
    assert!(board.specials().iter().all(Option::is_none));
}

#[test]
fn test_weighted_spawner_rejects_bad_weights() {
    assert!(WeightedSpawner::with_seed(&[0, 0, 0], 1).is_err());
    assert!(WeightedSpawner::with_seed(&[], 1).is_err());
}

#[test]
fn test_from_rows_reports_bad_tile() {
    let rows = [[0u8, 1], [2, 7]];
    match Board::from_rows(&rows, ScriptedSpawner::new(4, vec![0])) {
        Err(BoardError::TileOutOfRange {
            value, position, ..
        }) => {
            assert_eq!(value, 7);
            assert_eq!(position, Position::new(1, 1));
        }
        other => panic!("expected TileOutOfRange, got {:?}", other.map(|_| ())),
    }
}

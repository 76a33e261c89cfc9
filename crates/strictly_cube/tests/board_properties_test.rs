//! Tests for the placement protocol and turn alternation.

use std::collections::HashSet;
use strictly_cube::{
    BoardState, Cell, CubeInvariants, InvariantSet, Offset, PlacementError, PlayerKind, cell_at,
    to_offset,
};

#[test]
fn test_round_trip_every_cell() {
    for cell in Cell::ALL {
        assert_eq!(cell_at(to_offset(cell)), Ok(cell), "round trip for {}", cell);
    }
}

#[test]
fn test_turn_alternation_parity() {
    let mut board = BoardState::new();
    for (n, cell) in Cell::ALL.iter().enumerate() {
        let expected = if n % 2 == 0 {
            PlayerKind::First
        } else {
            PlayerKind::Second
        };
        assert_eq!(board.current_player(), expected, "before placement {}", n);
        board.place_at(*cell).expect("cell is empty");
    }
    // 27 placements: odd count leaves Second to move
    assert_eq!(board.current_player(), PlayerKind::Second);
}

#[test]
fn test_no_overwrite() {
    let mut board = BoardState::new();
    board.place_at(Cell::new(1, 0, -1)).expect("first placement");
    let after_first = board.current_player();

    let result = board.place_at(Cell::new(1, 0, -1));
    assert_eq!(result, Err(PlacementError::CellOccupied(Cell::new(1, 0, -1))));
    assert_eq!(board.len(), 1);
    assert_eq!(board.current_player(), after_first);
}

#[test]
fn test_capacity() {
    let mut board = BoardState::new();
    for cell in Cell::ALL {
        board.place_at(cell).expect("cell is empty");
    }

    assert_eq!(board.len(), 27);
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());

    let keys: HashSet<Cell> = board.occupied().keys().copied().collect();
    let all: HashSet<Cell> = Cell::ALL.iter().copied().collect();
    assert_eq!(keys, all);
    assert!(CubeInvariants::check_all(&board).is_ok());

    // Every further placement is rejected
    for cell in Cell::ALL {
        assert_eq!(board.place_at(cell), Err(PlacementError::CellOccupied(cell)));
    }
    assert_eq!(board.len(), 27);
}

#[test]
fn test_bounds_rejection() {
    let mut board = BoardState::new();
    let result = board.place_at(Cell::new(2, 0, 0));
    assert_eq!(result, Err(PlacementError::InvalidCell(Cell::new(2, 0, 0))));
    assert!(board.occupied().is_empty());
    assert_eq!(board.current_player(), PlayerKind::First);
}

#[test]
fn test_end_to_end_scenario() {
    let mut board = BoardState::new();

    let placement = board.place_at(Cell::new(0, 0, 0)).expect("center is empty");
    assert_eq!(placement.piece().cell(), Cell::new(0, 0, 0));
    assert_eq!(placement.piece().owner(), PlayerKind::First);
    assert_eq!(placement.offset(), Offset::new(0.0, 0.0, 0.0));
    assert_eq!(board.current_player(), PlayerKind::Second);

    assert_eq!(
        board.place_at(Cell::new(0, 0, 0)),
        Err(PlacementError::CellOccupied(Cell::new(0, 0, 0)))
    );
    assert_eq!(board.current_player(), PlayerKind::Second);

    let placement = board.place_at(Cell::new(1, 1, 1)).expect("corner is empty");
    assert_eq!(placement.piece().cell(), Cell::new(1, 1, 1));
    assert_eq!(placement.piece().owner(), PlayerKind::Second);
    assert_eq!(placement.offset(), Offset::new(24.0, 24.0, 24.0));
    assert_eq!(board.current_player(), PlayerKind::First);
}

#[test]
fn test_snapshot_serializes() {
    let mut board = BoardState::new();
    board.place_at(Cell::new(-1, 1, 0)).expect("cell is empty");

    let json = serde_json::to_value(board.snapshot()).expect("serializable");
    assert_eq!(json["current_player"], "Second");
    assert_eq!(json["pieces"][0]["owner"], "First");
    assert_eq!(json["pieces"][0]["cell"]["i"], -1);
}

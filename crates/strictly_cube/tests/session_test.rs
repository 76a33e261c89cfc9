//! Tests for sessions, rules and the rendering seam working together.

use std::sync::Arc;
use std::thread;
use strictly_cube::{
    Cell, GameSession, GameStatus, Offset, PieceRenderer, PlacementError, PlayerKind, Ray,
    RuleSet, SceneModel, SessionManager, pick,
};

#[test]
fn test_pick_then_place_then_render() {
    let mut session = GameSession::new(RuleSet::Open);
    let mut scene = SceneModel::new();

    // Pointer ray straight down through the top-front-right column
    let ray = Ray::new(Offset::new(24.0, 200.0, 24.0), Offset::new(0.0, -1.0, 0.0));
    let cell = pick(&ray).expect("ray crosses the board");
    assert_eq!(cell, Cell::new(1, 1, 1));

    let placement = session.place_at(cell).expect("empty cell");
    let handle = scene.spawn_piece(placement.piece().owner(), placement.offset());
    assert_eq!(handle, (PlayerKind::First, 0));
    assert_eq!(scene.spheres()[0][0].position, Offset::new(24.0, 24.0, 24.0));

    // The same ray now lands on an occupied cell
    let cell = pick(&ray).expect("ray crosses the board");
    assert_eq!(
        session.place_at(cell),
        Err(PlacementError::CellOccupied(cell))
    );
    assert_eq!(session.board().current_player(), PlayerKind::Second);
}

#[test]
fn test_second_player_can_win() {
    let mut session = GameSession::new(RuleSet::ThreeInARow);
    let moves = [
        Cell::new(-1, -1, -1), // First
        Cell::new(-1, 1, -1),  // Second
        Cell::new(1, -1, 1),   // First
        Cell::new(0, 1, -1),   // Second
        Cell::new(0, -1, 1),   // First
        Cell::new(1, 1, -1),   // Second completes the top-back row
    ];
    for cell in moves {
        session.place_at(cell).expect("legal move");
    }

    match session.status() {
        GameStatus::Won { winner, .. } => assert_eq!(winner, PlayerKind::Second),
        other => panic!("Expected Second to win, got {:?}", other),
    }
    assert_eq!(
        session.place_at(Cell::CENTER),
        Err(PlacementError::GameAlreadyOver)
    );
}

#[test]
fn test_concurrent_placements_are_serialized() {
    let manager = Arc::new(SessionManager::new());
    manager
        .create_session("shared".to_string(), RuleSet::Open)
        .expect("new session");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                Cell::ALL
                    .iter()
                    .filter(|cell| manager.place_at("shared", **cell).is_ok())
                    .count()
            })
        })
        .collect();

    let total: usize = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .sum();
    assert_eq!(total, 27);

    let snapshot = manager.snapshot("shared").expect("session exists");
    assert_eq!(snapshot.pieces().len(), 27);
    let firsts = snapshot
        .pieces()
        .iter()
        .filter(|p| p.owner() == PlayerKind::First)
        .count();
    assert_eq!(firsts, 14);
    assert_eq!(snapshot.current_player(), PlayerKind::Second);
}

use connect_four::{Cell, GameEngine, MoveError, Player, COLS, ROWS};

#[test]
fn test_opening_moves_alternate_players() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.active_player(), Player::One);

    let first = engine.attempt_move(0).unwrap();
    assert_eq!(first.column, 0);
    assert_eq!(first.row, ROWS - 1);
    assert_eq!(first.player, Player::One);
    assert_eq!(engine.active_player(), Player::Two);
    assert_eq!(
        engine.state().board.cells[ROWS - 1][0],
        Cell::Filled(Player::One)
    );

    let second = engine.attempt_move(0).unwrap();
    assert_eq!(second.row, ROWS - 2);
    assert_eq!(second.player, Player::Two);
    assert_eq!(engine.active_player(), Player::One);
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut engine = GameEngine::new();
    for _ in 0..ROWS {
        engine.attempt_move(2).unwrap();
    }
    let active = engine.active_player();

    assert_eq!(engine.attempt_move(2).unwrap_err(), MoveError::ColumnFull);
    assert_eq!(engine.active_player(), active);
    assert_eq!(engine.attempt_move(-1).unwrap_err(), MoveError::InvalidColumn);
    assert_eq!(
        engine.attempt_move(COLS as i32).unwrap_err(),
        MoveError::InvalidColumn
    );
    assert_eq!(engine.active_player(), active);
}

#[test]
fn test_engine_stays_usable_after_failures() {
    let mut engine = GameEngine::new();
    assert!(engine.attempt_move(99).is_err());
    assert!(engine.attempt_move(-3).is_err());

    let mv = engine.attempt_move(6).unwrap();
    assert_eq!(mv.player, Player::One);
    assert_eq!(mv.row, ROWS - 1);
}

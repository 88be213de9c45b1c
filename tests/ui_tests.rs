use connect_four::{
    centered_start, render_board, render_chat, BoardSurface, ChatLog, GameEngine, Player, Side,
    CELL_GAP, CELL_SIZE, COLS, ROWS, SURFACE_WIDTH,
};

fn column_center(column: i32) -> i32 {
    let start = centered_start(SURFACE_WIDTH, CELL_SIZE, CELL_GAP, COLS as i32);
    start + column * (CELL_SIZE + CELL_GAP) + CELL_SIZE / 2
}

#[test]
fn test_click_drives_the_engine() {
    let surface = BoardSurface::new(SURFACE_WIDTH);
    let mut engine = GameEngine::new();

    let mv = surface.click(column_center(3), &mut engine).unwrap();
    assert_eq!(mv.column, 3);
    assert_eq!(mv.row, ROWS - 1);
    assert_eq!(mv.player, Player::One);

    let mv = surface.click(column_center(3), &mut engine).unwrap();
    assert_eq!(mv.column, 3);
    assert_eq!(mv.row, ROWS - 2);
    assert_eq!(mv.player, Player::Two);
}

#[test]
fn test_margin_click_is_a_silent_no_op() {
    let surface = BoardSurface::new(SURFACE_WIDTH);
    let mut engine = GameEngine::new();
    let before = engine.state();

    assert!(surface.click(0, &mut engine).is_none());
    assert!(surface.click(SURFACE_WIDTH - 1, &mut engine).is_none());
    assert_eq!(engine.state(), before);
}

#[test]
fn test_full_column_click_is_a_silent_no_op() {
    let surface = BoardSurface::new(SURFACE_WIDTH);
    let mut engine = GameEngine::new();
    for _ in 0..ROWS {
        surface.click(column_center(0), &mut engine).unwrap();
    }

    let before = engine.state();
    assert!(surface.click(column_center(0), &mut engine).is_none());
    assert_eq!(engine.state(), before);
}

#[test]
fn test_resized_surface_resolves_against_new_geometry() {
    let mut engine = GameEngine::new();
    let mut surface = BoardSurface::new(SURFACE_WIDTH);
    let x = column_center(0);
    surface.click(x, &mut engine).unwrap();

    // shrink the surface: the same pixel now lands in a different column
    surface.width = 400;
    let narrow_start = centered_start(400, CELL_SIZE, CELL_GAP, COLS as i32);
    let expected = (x - narrow_start).div_euclid(CELL_SIZE + CELL_GAP);
    let mv = surface.click(x, &mut engine).unwrap();
    assert_eq!(mv.column as i32, expected);
}

#[test]
fn test_render_board_marks_both_players() {
    let mut engine = GameEngine::new();
    engine.attempt_move(0).unwrap();
    engine.attempt_move(1).unwrap();

    let text = render_board(&engine.state());
    let lines: Vec<&str> = text.lines().collect();
    // header plus one line per row
    assert_eq!(lines.len(), ROWS + 1);
    assert!(lines[0].contains('1'));
    assert!(lines[0].contains('7'));

    let bottom = lines[ROWS];
    assert!(bottom.contains('X'));
    assert!(bottom.contains('O'));
    // nothing above the bottom row yet
    assert!(!lines[1].contains('X'));
}

#[test]
fn test_render_chat_aligns_sides() {
    let mut log = ChatLog::new();
    log.append("Hello!", Side::Local);
    log.append("Hi there!", Side::Remote);

    let text = render_chat(&log, 20);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], format!("{:>20}", "Hello!"));
    assert_eq!(lines[1], "Hi there!");
}

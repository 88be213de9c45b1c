#![cfg(feature = "std")]

//! Terminal presentation: board and chat rendering plus the click pipeline.
//!
//! The rendering layer only reads engine snapshots; the single mutation
//! path is `BoardSurface::click`, which forwards resolved columns to the
//! engine.

use crate::{
    chat::{ChatLog, Side},
    common::{Cell, Player},
    config::{CELL_GAP, CELL_SIZE, COLS},
    game::{GameEngine, GameState, Move},
    geometry::resolve_column,
};

/// Width of the chat gutter used to right-align local messages.
pub const CHAT_WIDTH: usize = 40;

/// The board's drawing surface. Carries the current pixel width so clicks
/// can be resolved against the centered grid; on resize, update `width`
/// and the next click resolves against the new geometry.
#[derive(Debug, Clone, Copy)]
pub struct BoardSurface {
    pub width: i32,
}

impl BoardSurface {
    pub fn new(width: i32) -> Self {
        Self { width }
    }

    /// Handle a pointer click at pixel `x`: resolve the column and forward
    /// it to the engine. A rejected move is a silent no-op toward the user.
    pub fn click(&self, x: i32, engine: &mut GameEngine) -> Option<Move> {
        let column = resolve_column(x, self.width, CELL_SIZE, CELL_GAP, COLS as i32);
        match engine.attempt_move(column) {
            Ok(mv) => Some(mv),
            Err(err) => {
                log::debug!("ignoring click at x={}: {}", x, err);
                None
            }
        }
    }
}

/// Render the grid as text, top row first, with a 1-based column header.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for c in 0..COLS {
        out.push_str(&format!(" {}", c + 1));
    }
    out.push('\n');
    for row in &state.board.cells {
        out.push_str("  ");
        for cell in row {
            let ch = match cell {
                Cell::Empty => '.',
                Cell::Filled(Player::One) => 'X',
                Cell::Filled(Player::Two) => 'O',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Print the board and whose turn it is.
pub fn print_board(state: &GameState) {
    print!("{}", render_board(state));
    println!("\n{} to move.", state.active_player);
}

/// Render the chat log: local messages right-aligned within `width`,
/// remote messages left-aligned.
pub fn render_chat(log: &ChatLog, width: usize) -> String {
    let mut out = String::new();
    for entry in log.entries() {
        match entry.side {
            Side::Remote => out.push_str(&entry.text),
            Side::Local => out.push_str(&format!("{:>width$}", entry.text)),
        }
        out.push('\n');
    }
    out
}

/// Print the chat history panel.
pub fn print_chat(log: &ChatLog) {
    println!("CHAT HISTORY");
    print!("{}", render_chat(log, CHAT_WIDTH));
}

/// Print the game info panel. The timer lines are static display text,
/// not a live countdown.
pub fn print_game_info() {
    println!("GAME INFO");
    println!("Click on a column to make a move.");
    println!("Player 1: X");
    println!("Player 2: O");
    println!("Timer: 35 sec");
    println!("Game Timer: 1 min 3 sec");
}

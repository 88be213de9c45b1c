use crate::{
    board::{Board, BoardState},
    common::{MoveError, Player},
    config::COLS,
};

/// A successfully applied move. The row is derived by the gravity rule at
/// the time of the attempt, never supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Serializable overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub active_player: Player,
}

/// Core game logic holding the grid and the player whose move is next.
pub struct GameEngine {
    board: Board,
    active: Player,
}

impl GameEngine {
    /// Create a new engine with an empty board; Player 1 moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::One,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move will be applied next.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Attempt to drop the active player's piece into `column`.
    ///
    /// The parameter is signed so raw resolver output can be passed straight
    /// through; anything outside `0..COLS` fails with `InvalidColumn`. On
    /// success exactly one cell is filled and the turn flips to the other
    /// player. On failure nothing changes and the engine stays usable.
    pub fn attempt_move(&mut self, column: i32) -> Result<Move, MoveError> {
        if column < 0 || column >= COLS as i32 {
            return Err(MoveError::InvalidColumn);
        }
        let column = column as usize;
        let row = self.board.place(column, self.active)?;
        let mv = Move {
            column,
            row,
            player: self.active,
        };
        self.active = self.active.other();
        Ok(mv)
    }

    /// Generate a read-only snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            active_player: self.active,
        }
    }

    /// Restore an engine from a previously captured snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: Board::from(state.board),
            active: state.active_player,
        }
    }
}

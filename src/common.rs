//! Common types for connect four: players, cells, and move errors.

use core::fmt;

/// One of the two players. `Player::One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player, used for turn rotation.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id as shown to users (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// No piece has been dropped here yet.
    Empty,
    /// Occupied by the given player. A filled cell never reverts.
    Filled(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Errors returned by move attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Column index is outside the board.
    InvalidColumn,
    /// Every cell in the chosen column is already filled.
    ColumnFull,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidColumn => write!(f, "Column index is outside the board"),
            MoveError::ColumnFull => write!(f, "Column is full"),
        }
    }
}

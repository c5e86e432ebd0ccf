use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board is too large, at most {max} rows and {max} columns are supported")]
    BoardTooLarge { max: Coord },
    #[error("Too many mines, requested {requested} but at most {max} fit")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    GameAlreadyOver,
    #[error("Cell is already revealed")]
    CellAlreadyRevealed,
    #[error("Cell is flagged, unflag it before revealing")]
    CellFlagged,
    #[error("Cell is not revealed yet")]
    CellNotRevealed,
}

impl GameError {
    /// Whether the error rejects the board parameters themselves.
    pub const fn is_invalid_config(self) -> bool {
        matches!(self, Self::EmptyBoard | Self::BoardTooLarge { .. } | Self::TooManyMines { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

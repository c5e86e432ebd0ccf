use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Hidden,
    Flagged,
    Mine,
    Clear(u8),
}

impl CellStatus {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Read-only projection of a cell that only answers for revealed contents.
#[derive(Copy, Clone)]
pub struct CellView {
    cell: Cell,
}

impl CellView {
    pub(crate) const fn new(cell: Cell) -> Self {
        Self { cell }
    }

    pub const fn is_flagged(&self) -> bool {
        self.cell.flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.cell.revealed
    }

    pub const fn is_mined(&self) -> Result<bool> {
        match self.check_revealed() {
            Ok(()) => Ok(self.cell.mined),
            Err(err) => Err(err),
        }
    }

    pub const fn adjacent_mines(&self) -> Result<u8> {
        match self.check_revealed() {
            Ok(()) => Ok(self.cell.adjacent_mines),
            Err(err) => Err(err),
        }
    }

    /// A flag wins over revealed contents, so a flagged mine stays `Flagged` after a loss.
    pub const fn status(&self) -> CellStatus {
        let Cell {
            adjacent_mines,
            mined,
            flagged,
            revealed,
        } = self.cell;

        match (flagged, revealed, mined) {
            (true, _, _) => CellStatus::Flagged,
            (false, false, _) => CellStatus::Hidden,
            (false, true, true) => CellStatus::Mine,
            (false, true, false) => CellStatus::Clear(adjacent_mines),
        }
    }

    const fn check_revealed(&self) -> Result<()> {
        if self.cell.revealed {
            Ok(())
        } else {
            Err(GameError::CellNotRevealed)
        }
    }
}

/// Two views are equal when a player could not tell them apart.
impl PartialEq for CellView {
    fn eq(&self, other: &Self) -> bool {
        self.is_flagged() == other.is_flagged()
            && self.is_revealed() == other.is_revealed()
            && self.is_mined().ok() == other.is_mined().ok()
            && self.adjacent_mines().ok() == other.adjacent_mines().ok()
    }
}

impl Eq for CellView {}

impl fmt::Debug for CellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellView")
            .field("flagged", &self.is_flagged())
            .field("revealed", &self.is_revealed())
            .field("status", &self.status())
            .finish()
    }
}

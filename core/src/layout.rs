use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Final placement of mines on a board, fixed before any cell is revealed.
#[derive(Clone, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a mine mask indexed by `[row, column]`.
    ///
    /// The mask must describe a valid game: non-empty and with at least one safe cell.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        if rows > usize::from(Coord::MAX) || columns > usize::from(Coord::MAX) {
            return Err(GameError::BoardTooLarge { max: Coord::MAX });
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let layout = Self {
            mine_count: CellCount::try_from(mine_count).unwrap_or(CellCount::MAX),
            mine_mask,
        };
        layout.game_config().validate()?;
        Ok(layout)
    }

    /// Builds a layout from explicit mine positions; duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size.0, size.1, 0)?;
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub(crate) fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub(crate) fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, so this always fits
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Only the shape and count are printed, so a layout can be logged without spoiling it.
impl core::fmt::Debug for MineLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MineLayout")
            .field("size", &self.size())
            .field("mine_count", &self.mine_count)
            .finish_non_exhaustive()
    }
}

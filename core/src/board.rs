use core::fmt;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// One grid position.
///
/// `mined` and `adjacent_mines` are fixed when the board is built; only the engine
/// touches `flagged` and `revealed` afterwards.
///
/// No `PartialEq`: comparing cells would expose hidden contents.
#[derive(Copy, Clone)]
pub struct Cell {
    pub(crate) adjacent_mines: u8,
    pub(crate) mined: bool,
    pub(crate) flagged: bool,
    pub(crate) revealed: bool,
}

impl Cell {
    pub(crate) const fn hidden(mined: bool, adjacent_mines: u8) -> Self {
        Self {
            adjacent_mines,
            mined,
            flagged: false,
            revealed: false,
        }
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn view(&self) -> CellView {
        CellView::new(*self)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view().status(), f)
    }
}

/// Fixed-size grid of cells with mines placed and adjacency counts derived.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Places the layout's mines and derives every cell's adjacency count in one pass.
    pub fn new(layout: &MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, column)| {
            // the layout never exceeds Coord::MAX on either axis
            let coords = (row as Coord, column as Coord);
            Cell::hidden(
                layout.contains_mine(coords),
                layout.adjacent_mine_count(coords),
            )
        });

        Self {
            cells,
            mine_count: layout.mine_count(),
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// The in-bounds 8-neighborhood of `coords`, in row-major order.
    pub fn neighbors_of(&self, coords: Coord2) -> Result<Neighbors> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords).collect())
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub(crate) fn indexed_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, column), cell)| ((row as Coord, column as Coord), cell))
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

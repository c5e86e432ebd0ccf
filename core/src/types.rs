use ndarray::Array2;
use smallvec::SmallVec;

/// Single coordinate axis used for board rows, columns and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Inline storage for the at most eight neighbors of a cell.
pub type Neighbors = SmallVec<[Coord2; 8]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size of a grid as `(rows, columns)`.
///
/// Grids in this crate are never built larger than `Coord::MAX` on either axis.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, columns) = grid.dim();
    (
        Coord::try_from(rows).unwrap_or(Coord::MAX),
        Coord::try_from(columns).unwrap_or(Coord::MAX),
    )
}

pub(crate) const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, grid_size(self))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    let (rows, columns) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_column = column.checked_add_signed(d_column)?;
    if next_column >= columns {
        return None;
    }

    Some((next_row, next_column))
}

/// Iterates the in-bounds 8-neighborhood of a cell in row-major order.
///
/// Holds no borrow of the grid, so callers may mutate the grid while iterating.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}

use crate::*;
pub use random::*;

mod random;

/// Produces the mine placement for a new game.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Guarantee made about the cell the player intends to open first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartTile {
    /// No guarantee, the start cell may hold a mine.
    Random,
    /// The start cell never holds a mine.
    SimpleSafe,
    /// Neither the start cell nor any of its neighbors hold a mine, so opening it cascades.
    AlwaysZero,
}

impl Default for StartTile {
    fn default() -> Self {
        Self::Random
    }
}

use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A single game: the board plus win/loss tracking.
///
/// Every mutation takes `&mut self`, so a cascading reveal is never observed half done.
///
/// There is no `PartialEq`, since comparing against a game built from a guessed layout
/// would expose hidden mines. `Clone` is kept, but a clone shares the mine layout: an
/// embedder holding one can play ahead on the copy, so do not hand clones to players.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    unflagged_mines: CellCount,
    flags_placed: CellCount,
    revealed_safe: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        config.validate()?;
        let layout = generator.generate(config)?;
        Ok(Self::from_layout(&layout))
    }

    pub fn with_rng<R: Rng>(config: GameConfig, rng: R) -> Result<Self> {
        Self::new(config, RandomMinefieldGenerator::new(rng))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMinefieldGenerator::from_seed(seed))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        let board = Board::new(layout);
        let (rows, columns) = board.size();
        log::debug!(
            "New {}x{} game with {} mines",
            rows,
            columns,
            board.mine_count()
        );

        Self {
            unflagged_mines: board.mine_count(),
            board,
            state: GameState::default(),
            flags_placed: 0,
            revealed_safe: 0,
            triggered_mine: None,
        }
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_victory(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.total_mines(),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines that do not carry a flag yet.
    pub fn unflagged_mine_count(&self) -> CellCount {
        self.unflagged_mines
    }

    /// Flags currently on the board, whether or not they sit on a mine.
    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    /// Mine counter as a player sees it: total mines minus flags placed, possibly negative.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.total_mines()) - i32::from(self.flags_placed)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn state(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.board.cell_at(coords)?.view())
    }

    /// Player-visible status of every cell, indexed by `[row, column]`.
    pub fn snapshot(&self) -> Array2<CellStatus> {
        let (rows, columns) = self.size();
        Array2::from_shape_fn((usize::from(rows), usize::from(columns)), |(row, column)| {
            self.board[(row as Coord, column as Coord)].view().status()
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = self.board[coords];
        if cell.revealed {
            return Ok(RevealOutcome::NoChange);
        }
        if cell.flagged {
            return Err(GameError::CellFlagged);
        }

        if cell.mined {
            self.lose(coords);
            return Ok(RevealOutcome::HitMine);
        }

        let opened = self.cascade_reveal(coords);
        self.revealed_safe += opened;
        log::trace!("Reveal at {:?} opened {} cells", coords, opened);

        if self.revealed_safe == self.board.safe_cell_count() {
            self.state = GameState::Won;
            log::debug!("Game won");
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let cell = self.markable_cell(coords)?;
        if cell.flagged {
            return Ok(MarkOutcome::NoChange);
        }

        cell.flagged = true;
        let mined = cell.mined;
        self.flags_placed += 1;
        if mined {
            self.unflagged_mines -= 1;
        }
        Ok(MarkOutcome::Changed)
    }

    pub fn unflag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let cell = self.markable_cell(coords)?;
        if !cell.flagged {
            return Ok(MarkOutcome::NoChange);
        }

        cell.flagged = false;
        let mined = cell.mined;
        self.flags_placed -= 1;
        if mined {
            self.unflagged_mines += 1;
        }
        Ok(MarkOutcome::Changed)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        if self.board.cell_at(coords)?.flagged {
            self.unflag(coords)
        } else {
            self.flag(coords)
        }
    }

    /// Reveals `start` and, through zero-count cells, everything connected to it.
    ///
    /// A cell is marked revealed before it enters the frontier, so each cell is visited
    /// at most once. Flagged cells are neither revealed nor expanded. Returns the number
    /// of cells revealed.
    fn cascade_reveal(&mut self, start: Coord2) -> CellCount {
        self.board.cell_mut(start).revealed = true;
        let mut opened = 1;
        let mut frontier = Vec::from([start]);

        while let Some(coords) = frontier.pop() {
            if self.board[coords].adjacent_mines != 0 {
                continue;
            }

            for neighbor in self.board.iter_neighbors(coords) {
                let cell = self.board.cell_mut(neighbor);
                if cell.revealed || cell.flagged {
                    continue;
                }
                cell.revealed = true;
                opened += 1;
                frontier.push(neighbor);
            }
        }

        opened
    }

    fn lose(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
        self.state = GameState::Lost;
        for cell in self.board.cells_mut().filter(|cell| cell.mined) {
            cell.revealed = true;
        }
        log::debug!("Game lost at {:?}", coords);
    }

    fn markable_cell(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = self.board.cell_mut(coords);
        if cell.revealed {
            Err(GameError::CellAlreadyRevealed)
        } else {
            Ok(cell)
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

//! Rules engine for a Minesweeper board.
//!
//! A [`Game`] owns a [`Board`] built from a [`MineLayout`], and is the only way to
//! mutate it: [`Game::reveal`], [`Game::flag`] and [`Game::unflag`]. Cell contents are
//! read through [`CellView`], which refuses to answer for cells that are not revealed.
//!
//! ```
//! use minefield_core::*;
//!
//! let layout = MineLayout::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
//! let mut game = Game::from_layout(&layout);
//!
//! assert_eq!(game.reveal((0, 0)), Ok(RevealOutcome::Won));
//! assert_eq!(game.state((1, 1)).unwrap().adjacent_mines(), Ok(1));
//! assert_eq!(game.state((2, 2)).unwrap().is_mined(), Err(GameError::CellNotRevealed));
//! ```
#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use types::*;
pub use view::*;

mod board;
mod config;
mod engine;
mod error;
mod generator;
mod layout;
mod types;
mod view;

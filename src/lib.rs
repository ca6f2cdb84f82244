//! A computer opponent for the board game 'Connect 4'
//!
//! This agent explores the game tree to a fixed depth with alpha-beta
//! pruning and a positional heuristic to pick the computer's move.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four_ai::{board::{Board, Player}, search::Minimax};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("445566")?;
//! let mut engine = Minimax::new(6);
//! let result = engine.best_move(&board, Player::One);
//!
//! assert!((result.column, result.score) == (Some(2), 1005));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod search;


pub use crate::board::{Board, Cell, GameState, Player};
pub use crate::search::{Minimax, SearchResult};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that a four-in-a-row fits on the board in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);

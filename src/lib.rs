//! A computer opponent for the board game 'Connect 4' on boards of any size
//!
//! The opponent uses a depth-limited minimax search with alpha-beta pruning,
//! scoring positions by counting promising four-cell windows.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_bot::{grid::Grid, search::{get_best_move, Difficulty}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one threatens to complete the bottom row in column 4
//! let grid = Grid::from_moves(6, 7, "17273")?;
//! let best_move = get_best_move(&grid, Difficulty::new(5)?)?;
//!
//! assert_eq!(best_move, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod evaluation;

pub mod search;

pub mod config;

pub mod session;


/// The number of pieces in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// The smallest number of rows a game can be played with
pub const MIN_ROWS: usize = 6;
/// One more than the largest number of rows
pub const MAX_ROWS: usize = 14;
/// The smallest number of columns a game can be played with
pub const MIN_COLUMNS: usize = 7;
/// One more than the largest number of columns
pub const MAX_COLUMNS: usize = 16;

// every allowed board must fit a four-in-a-row
const_assert!(MIN_ROWS >= WIN_LENGTH && MIN_COLUMNS >= WIN_LENGTH);
// columns are written as single hexadecimal digits
const_assert!(MAX_COLUMNS <= 16);
// an open opponent three must outweigh building an own three
const_assert!(-evaluation::OPPONENT_THREE_SCORE > evaluation::THREE_SCORE);

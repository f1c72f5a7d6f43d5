//! An automated player for four-in-a-row on boards of any size
//!
//! Marks can be placed on any empty cell of an `R x C` board. The agent
//! scores positions with a pattern heuristic over every row, column and
//! diagonal, and picks moves with a depth-bounded minimax search.
//!
//! # Basic Usage
//!
//! ```
//! use four_ai::{board::BoardState, board::Player, selector::find_best_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = BoardState::create_empty(6, 5)?;
//! let opening = find_best_move(&board, Player::One, 2)?;
//!
//! assert_eq!(opening, (3, 2));
//! # Ok(())
//! # }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluator;

pub mod search;

pub mod selector;


pub use board::{BoardState, Direction, Line, Mark, Move, Player};
pub use error::{GameError, Result};
pub use evaluator::{eval, heuristic, terminal, Outcome};
pub use search::SearchEngine;
pub use selector::{find_best_move, next_player, Decision, MoveSelector};

/// The number of rows of the board used by the command line driver
pub const DEFAULT_ROWS: usize = 6;

/// The number of columns of the board used by the command line driver
pub const DEFAULT_COLS: usize = 5;

/// The number of identical marks in a line needed to win
pub const WIN_LENGTH: usize = 4;

/// The value of a won position for the winner (and its negation for the loser)
pub const TERMINAL_SCORE: i32 = 2000;

const_assert!(DEFAULT_ROWS >= 1 && DEFAULT_COLS >= 1);
// a proven result must outweigh the best pattern a single line can hold
const_assert!(TERMINAL_SCORE > 10 * evaluator::Pattern::OpenThreeBoth.mine_weight());

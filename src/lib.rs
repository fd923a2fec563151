//! A move-selection engine for the board game 'Connect 4'
//!
//! Two depth-limited tree searches are provided: minimax with alpha-beta
//! pruning against an adversarial opponent, and expectimax against an
//! opponent that picks uniformly among its legal moves.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, get_alpha_beta_move, get_expectimax_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("4455")?;
//!
//! let column = get_alpha_beta_move(&board, 1)?;
//! assert!(board.column_has_space(column));
//!
//! let column = get_expectimax_move(&board, 1)?;
//! assert!(board.column_has_space(column));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
use std::convert::TryFrom;

pub use anyhow;

pub mod error;

pub mod board;

pub mod moves;

pub mod runs;

pub mod evaluation;

pub mod selection;

pub mod config;

pub mod alphabeta;

pub mod expectimax;

pub mod player;

pub mod game;


pub use crate::{
    alphabeta::AlphaBeta,
    board::{Board, Cell, Move, PlayerId},
    config::{RootSelection, SearchConfig},
    error::EngineError,
    expectimax::Expectimax,
};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The length of a winning run
pub const CONNECT: usize = 4;

// a winning run has to fit in every line direction
const_assert!(CONNECT <= WIDTH);
const_assert!(CONNECT <= HEIGHT);

/// Picks a column for `player_number` with the default alpha-beta search
pub fn get_alpha_beta_move(board: &Board, player_number: u8) -> Result<usize, EngineError> {
    let player = PlayerId::try_from(player_number)?;
    AlphaBeta::new(*board, player).search()
}

/// Picks a column for `player_number` with the default expectimax search
pub fn get_expectimax_move(board: &Board, player_number: u8) -> Result<usize, EngineError> {
    let player = PlayerId::try_from(player_number)?;
    Expectimax::new(*board, player).search()
}

/// Picks a column uniformly among the columns that still have space
pub fn get_random_move<R: rand::Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, EngineError> {
    use rand::seq::SliceRandom;

    let moves = moves::valid_moves(board);
    moves
        .choose(rng)
        .map(|m| m.column)
        .ok_or(EngineError::NoLegalMoves)
}

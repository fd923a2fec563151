//! Legal move enumeration

use std::ops::Deref;

use crate::{
    board::{Board, Move},
    WIDTH,
};

/// The legal moves of a position in ascending column order
///
/// At most one move exists per column, so the list lives on the stack.
#[derive(Copy, Clone, Debug)]
pub struct MoveList {
    size: usize,
    moves: [Move; WIDTH],
}

impl MoveList {
    fn new() -> Self {
        Self {
            size: 0,
            moves: [Move::default(); WIDTH],
        }
    }

    fn push(&mut self, new_move: Move) {
        self.moves[self.size] = new_move;
        self.size += 1;
    }

    /// The columns of the moves, in order
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|m| m.column)
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves[..self.size]
    }
}

/// Enumerates one move per column with space, paired with the column's
/// landing row
///
/// Columns are visited 0 to `WIDTH - 1`; the root tie-break of both searches
/// depends on this order.
pub fn valid_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    for column in 0..WIDTH {
        if let Ok(row) = board.landing_row(column) {
            moves.push(Move::new(row, column));
        }
    }
    moves
}

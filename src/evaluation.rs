//! Heuristic scoring of positions

use crate::{
    board::{Board, PlayerId},
    runs::has_run,
    CONNECT,
};

/// Score of a completed run of four
pub const WIN_SCORE: i32 = 200_000;
/// Score of a run of three
pub const THREE_SCORE: i32 = 10_000;
/// Score of a run of two
pub const TWO_SCORE: i32 = 2_000;

const RUN_WEIGHTS: [(usize, i32); 3] = [(CONNECT, WIN_SCORE), (3, THREE_SCORE), (2, TWO_SCORE)];

/// Scores `board` from `player`'s point of view
///
/// Every run length the player holds adds its weight and every run length the
/// opponent holds subtracts it; the terms are cumulative, so a four also
/// counts as a three and a two.
pub fn evaluate(board: &Board, player: PlayerId) -> i32 {
    let opponent = player.opponent();

    RUN_WEIGHTS
        .iter()
        .map(|&(run_length, weight)| {
            let mut value = 0;
            if has_run(board, run_length, player) {
                value += weight;
            }
            if has_run(board, run_length, opponent) {
                value -= weight;
            }
            value
        })
        .sum()
}

/// Returns true if either player has completed a run of four
pub fn is_terminal(board: &Board, player: PlayerId) -> bool {
    has_run(board, CONNECT, player) || has_run(board, CONNECT, player.opponent())
}

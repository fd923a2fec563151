//! Depth-limited minimax search with alpha-beta pruning

use log::{debug, trace};

use crate::{
    board::{Board, PlayerId},
    config::{validate_depth, ALPHA_BETA_DEPTH},
    error::EngineError,
    evaluation::{evaluate, is_terminal},
    moves::valid_moves,
    selection::select_best,
};

/// Bound of the initial search window, outside any reachable score
pub const INFINITY: i32 = i32::MAX;

/// An agent choosing moves against an adversarial opponent
///
/// # Scoring
/// Leaves are scored with [`evaluate`] from the root player's point of view and
/// multiplied by the depth remaining when the leaf was reached, so a win found
/// closer to the root outweighs the same win found deeper.
#[derive(Clone)]
pub struct AlphaBeta {
    board: Board,
    player: PlayerId,
    opponent: PlayerId,
    depth: u32,

    /// The number of nodes searched by this `AlphaBeta` so far (for diagnostics only)
    pub node_count: usize,
}

impl AlphaBeta {
    /// Creates a new search for `player` to move on `board` at the default depth
    pub fn new(board: Board, player: PlayerId) -> Self {
        Self {
            board,
            player,
            opponent: player.opponent(),
            depth: ALPHA_BETA_DEPTH,
            node_count: 0,
        }
    }

    /// Sets the search depth in plies
    pub fn with_depth(mut self, depth: u32) -> Result<Self, EngineError> {
        self.depth = validate_depth(depth)?;
        Ok(self)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Scores every legal root move, returning `(value, column)` pairs in
    /// column order
    pub fn scored_moves(&mut self) -> Result<Vec<(i32, usize)>, EngineError> {
        let moves = valid_moves(&self.board);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let (alpha, beta) = (-INFINITY, INFINITY);
        let depth = self.depth - 1;
        let mut values = Vec::with_capacity(moves.len());
        for &root_move in moves.iter() {
            let child = self.board.with_piece(root_move, self.player);
            let value = alpha.max(self.min_value(&child, alpha, beta, depth));
            values.push((value, root_move.column));
        }
        Ok(values)
    }

    /// Calculates the column to play
    pub fn search(&mut self) -> Result<usize, EngineError> {
        let values = self.scored_moves()?;
        let column = select_best(&values).ok_or(EngineError::NoLegalMoves)?;

        debug!(
            "alpha-beta for player {} at depth {}: {:?} -> column {}",
            self.player, self.depth, values, column
        );
        trace!("alpha-beta searched {} nodes", self.node_count);
        Ok(column)
    }

    /// Leaf value if the search stops at this node
    fn leaf_value(&self, board: &Board, depth: u32, has_moves: bool) -> Option<i32> {
        if depth <= 1 || !has_moves || is_terminal(board, self.player) {
            Some(evaluate(board, self.player) * depth as i32)
        } else {
            None
        }
    }

    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        self.node_count += 1;

        let moves = valid_moves(board);
        if let Some(value) = self.leaf_value(board, depth, !moves.is_empty()) {
            return value;
        }

        let mut v = -INFINITY;
        for &next_move in moves.iter() {
            let child = board.with_piece(next_move, self.player);
            v = v.max(self.min_value(&child, alpha, beta, depth - 1));
            // the minimizing parent already has a better option
            if v >= beta {
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32, depth: u32) -> i32 {
        self.node_count += 1;

        let moves = valid_moves(board);
        if let Some(value) = self.leaf_value(board, depth, !moves.is_empty()) {
            return value;
        }

        let mut v = INFINITY;
        for &next_move in moves.iter() {
            let child = board.with_piece(next_move, self.opponent);
            v = v.min(self.max_value(&child, alpha, beta, depth - 1));
            // the maximizing parent already has a better option
            if v <= alpha {
                return v;
            }
            beta = beta.min(v);
        }
        v
    }
}

impl std::ops::Deref for AlphaBeta {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

//! Depth-limited expectimax search against a uniformly random opponent

use log::{debug, trace};

use crate::{
    board::{Board, PlayerId},
    config::{validate_depth, RootSelection, EXPECTIMAX_DEPTH},
    error::EngineError,
    evaluation::{evaluate, is_terminal},
    moves::valid_moves,
    selection::select_best,
};

/// An agent choosing moves against an opponent that plays any legal move with
/// equal probability
///
/// Opponent nodes are not sampled: every reply is searched and the node's
/// value is the mean of the replies' values. Leaves are scored the same way as
/// in [`AlphaBeta`](crate::alphabeta::AlphaBeta).
#[derive(Clone)]
pub struct Expectimax {
    board: Board,
    player: PlayerId,
    opponent: PlayerId,
    depth: u32,
    root_selection: RootSelection,

    /// The number of nodes searched by this `Expectimax` so far (for diagnostics only)
    pub node_count: usize,
}

impl Expectimax {
    /// Creates a new search for `player` to move on `board` at the default depth
    pub fn new(board: Board, player: PlayerId) -> Self {
        Self {
            board,
            player,
            opponent: player.opponent(),
            depth: EXPECTIMAX_DEPTH,
            root_selection: RootSelection::default(),
            node_count: 0,
        }
    }

    /// Sets the search depth in plies
    pub fn with_depth(mut self, depth: u32) -> Result<Self, EngineError> {
        self.depth = validate_depth(depth)?;
        Ok(self)
    }

    pub fn with_root_selection(mut self, root_selection: RootSelection) -> Self {
        self.root_selection = root_selection;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Scores every legal root move, returning `(value, column)` pairs in
    /// column order as recorded by the configured [`RootSelection`]
    pub fn scored_moves(&mut self) -> Result<Vec<(f64, usize)>, EngineError> {
        let moves = valid_moves(&self.board);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let depth = self.depth - 1;
        let mut v = f64::NEG_INFINITY;
        let mut values = Vec::with_capacity(moves.len());
        for &root_move in moves.iter() {
            let child = self.board.with_piece(root_move, self.player);
            let expected = self.expected_value(&child, depth);
            v = v.max(expected);
            let recorded = match self.root_selection {
                RootSelection::RunningBest => v,
                RootSelection::PerColumn => expected,
            };
            values.push((recorded, root_move.column));
        }
        Ok(values)
    }

    /// Calculates the column to play
    pub fn search(&mut self) -> Result<usize, EngineError> {
        let values = self.scored_moves()?;
        let column = select_best(&values).ok_or(EngineError::NoLegalMoves)?;

        debug!(
            "expectimax ({:?}) for player {} at depth {}: {:?} -> column {}",
            self.root_selection, self.player, self.depth, values, column
        );
        trace!("expectimax searched {} nodes", self.node_count);
        Ok(column)
    }

    fn leaf_value(&self, board: &Board, depth: u32, has_moves: bool) -> Option<f64> {
        if depth <= 1 || !has_moves || is_terminal(board, self.player) {
            Some(f64::from(evaluate(board, self.player) * depth as i32))
        } else {
            None
        }
    }

    fn max_value(&mut self, board: &Board, depth: u32) -> f64 {
        self.node_count += 1;

        let moves = valid_moves(board);
        if let Some(value) = self.leaf_value(board, depth, !moves.is_empty()) {
            return value;
        }

        let mut v = f64::NEG_INFINITY;
        for &next_move in moves.iter() {
            let child = board.with_piece(next_move, self.player);
            v = v.max(self.expected_value(&child, depth - 1));
        }
        v
    }

    fn expected_value(&mut self, board: &Board, depth: u32) -> f64 {
        self.node_count += 1;

        let moves = valid_moves(board);
        if let Some(value) = self.leaf_value(board, depth, !moves.is_empty()) {
            return value;
        }

        let total: f64 = moves
            .iter()
            .map(|&reply| {
                let child = board.with_piece(reply, self.opponent);
                self.max_value(&child, depth - 1)
            })
            .sum();
        total / moves.len() as f64
    }
}

impl std::ops::Deref for Expectimax {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

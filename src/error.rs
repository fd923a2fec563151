use thiserror::Error;

use crate::{HEIGHT, WIDTH};

/// Errors raised by the engine when it is handed a board, player or column
/// outside its contract
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("column {column} is full, it has no landing row")]
    InvalidColumn { column: usize },

    #[error("column {column} out of range, columns must be between 0 and {}", WIDTH - 1)]
    ColumnOutOfRange { column: usize },

    #[error("no legal moves remain, the board is full")]
    NoLegalMoves,

    #[error("invalid player identity {0}, players must be 1 or 2")]
    InvalidPlayerIdentity(u8),

    #[error("invalid cell value {value} at row {row}, column {column} (expected 0, 1 or 2)")]
    InvalidCell { row: usize, column: usize, value: u8 },

    #[error("search depth {0} out of range (1-{})", WIDTH * HEIGHT)]
    InvalidDepth(u32),

    #[error("invalid value '{value}' for {name}")]
    InvalidSetting { name: String, value: String },

    #[error("could not parse move {position}: {reason}")]
    ParseMove { position: usize, reason: String },

    #[error("the game is already over")]
    GameOver,
}

use thiserror::Error;

use crate::board::Side;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid coordinate: {0:?}")]
    Coord(String),
    #[error("invalid board at line {line}: {msg}")]
    Board { line: usize, msg: String },
    #[error("expected 8 board rows, found {0}")]
    RowCount(usize),
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// The side to move has no legal move at the root; it has lost.
    #[error("{side} has no legal moves")]
    ForcedLoss { side: Side },
}

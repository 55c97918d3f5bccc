//! Game-level rules shared by the agent, the console loop and self-play.

use std::fmt;

use crate::board::{Board, Side, Square};
use crate::error::ParseError;
use crate::movegen::{self, Move};

/// The two squares a side may empty for its first move.
pub fn opening_squares(side: Side) -> [Square; 2] {
    match side {
        Side::White => [Square::new(35), Square::new(28)], // D4, E5
        Side::Black => [Square::new(27), Square::new(36)], // D5, E4
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayedMove {
    /// Opening removal of one of the mover's own pieces.
    Remove(Square),
    Slide(Move),
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedMove::Remove(sq) => write!(f, "{sq}"),
            PlayedMove::Slide(mv) => write!(f, "{mv}"),
        }
    }
}

impl Board {
    pub fn apply(&mut self, mv: PlayedMove) {
        match mv {
            PlayedMove::Remove(sq) => self.clear(sq),
            PlayedMove::Slide(m) => self.toggle(m.mask()),
        }
    }
}

/// Every move `side` may play: the openings while its partition is still
/// full, otherwise every slide in discovery order.
pub fn legal_moves(board: Board, side: Side) -> Vec<PlayedMove> {
    if board.is_partition_full(side) {
        return opening_squares(side).into_iter().map(PlayedMove::Remove).collect();
    }
    movegen::generate_moves(board, side).into_iter().map(PlayedMove::Slide).collect()
}

/// Parse `DEST-SRC` or an opening coordinate and check it is legal.
pub fn parse_move(board: Board, side: Side, text: &str) -> Result<PlayedMove, ParseError> {
    let text = text.trim();
    let candidate = match text.split_once('-') {
        Some((dst, src)) => PlayedMove::Slide(Move { dst: dst.parse()?, src: src.parse()? }),
        None => PlayedMove::Remove(text.parse()?),
    };
    if legal_moves(board, side).contains(&candidate) {
        Ok(candidate)
    } else {
        Err(ParseError::IllegalMove(text.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub to_move: Side,
    pub history: Vec<PlayedMove>,
}

impl Game {
    /// Black moves first from the full board.
    pub fn new() -> Self {
        Self::from_board(Board::full(), Side::Black)
    }

    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self { board, to_move, history: Vec::new() }
    }

    /// The winner once the side to move has no legal move.
    pub fn winner(&self) -> Option<Side> {
        if legal_moves(self.board, self.to_move).is_empty() {
            Some(self.to_move.opponent())
        } else {
            None
        }
    }

    pub fn play(&mut self, mv: PlayedMove) {
        self.board.apply(mv);
        self.history.push(mv);
        self.to_move = self.to_move.opponent();
    }

    /// Record a move already applied to `board` by the agent.
    pub fn commit(&mut self, mv: PlayedMove, board: Board) {
        self.board = board;
        self.history.push(mv);
        self.to_move = self.to_move.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

use crate::board::{Board, Side, CORNERS};
use crate::movegen::movable_pieces;
use crate::search::{saturate, Score};

const CORNER_WEIGHT: i32 = 2;

/// Mobility plus a corner bonus, from White's point of view: positive
/// favours White, negative favours Black.
pub fn evaluate(board: Board) -> Score {
    let white = movable_pieces(board, Side::White);
    let black = movable_pieces(board, Side::Black);
    mobility_score(white, black)
}

fn mobility_score(white: u64, black: u64) -> Score {
    let mobility = white.count_ones() as i32 - black.count_ones() as i32;
    let corners = CORNER_WEIGHT * (white & CORNERS).count_ones() as i32
        - CORNER_WEIGHT * (black & CORNERS).count_ones() as i32;
    saturate(mobility + corners)
}

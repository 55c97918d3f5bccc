use crate::board::{Board, Side};
use crate::game::legal_moves;
use crate::movegen::for_each_move;

// Leaf count of the legal move tree, openings included.
pub fn perft(board: Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if board.is_partition_full(side) {
        let mut nodes = 0u64;
        for mv in legal_moves(board, side) {
            let mut child = board;
            child.apply(mv);
            nodes += perft(child, side.opponent(), depth - 1);
        }
        return nodes;
    }
    if depth == 1 {
        let mut n = 0u64;
        for_each_move(board, side, |_, _| n += 1);
        return n;
    }
    let mut nodes = 0u64;
    for_each_move(board, side, |_, child| {
        nodes += perft(child, side.opponent(), depth - 1);
    });
    nodes
}

use konane::game::{legal_moves, Game};
use konane::perft::perft;
use konane::search::pool::NodePool;
use konane::{Board, Side};

#[test]
fn perft_opening_plies() {
    let b = Board::full();
    assert_eq!(perft(b, Side::Black, 0), 1);
    assert_eq!(perft(b, Side::Black, 1), 2);
    assert_eq!(perft(b, Side::Black, 2), 4);
}

#[test]
fn perft_sums_children() {
    let b = Board::full();
    for depth in 1..=4 {
        let total: u64 = legal_moves(b, Side::Black)
            .into_iter()
            .map(|mv| {
                let mut c = b;
                c.apply(mv);
                perft(c, Side::White, depth - 1)
            })
            .sum();
        assert_eq!(perft(b, Side::Black, depth), total, "depth {depth}");
    }
}

#[test]
fn perft_one_matches_expansion() {
    let mut g = Game::new();
    for _ in 0..8 {
        let moves = legal_moves(g.board, g.to_move);
        if moves.is_empty() { break; }
        g.play(moves[moves.len() / 2]);
        if g.board.is_partition_full(g.to_move) { continue; }
        let mut pool = NodePool::new();
        let root = pool.alloc_root(g.board);
        let kids = pool.expand(root, g.to_move);
        assert_eq!(perft(g.board, g.to_move, 1), kids.len() as u64);
    }
}

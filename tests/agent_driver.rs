use konane::error::AgentError;
use konane::game::{legal_moves, Game, PlayedMove};
use konane::search::minimax::{SearchParams, Searcher};
use konane::search::pool::NodePool;
use konane::search::{SCORE_MAX, SCORE_MIN};
use konane::{Agent, AgentConfig, Board, Side, Square};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn board_of(squares: &[&str]) -> Board {
    let mut b = Board::empty();
    for s in squares { b.set(s.parse::<Square>().expect("valid coord")); }
    b
}

fn agent(depth: u32) -> Agent {
    Agent::new(AgentConfig { search: SearchParams { depth, alpha_beta: true }, seed: Some(1) })
}

fn random_midgame(rng: &mut SmallRng, plies: usize) -> Game {
    let mut g = Game::new();
    for _ in 0..plies {
        let moves = legal_moves(g.board, g.to_move);
        if moves.is_empty() { break; }
        let mv = moves[rng.gen_range(0..moves.len())];
        g.play(mv);
    }
    g
}

#[test]
fn single_legal_move_is_played() {
    let board = board_of(&["A8", "B8", "C8"]);
    for depth in 1..=4 {
        let mut a = agent(depth);
        let chosen = a.choose(&board, Side::White).expect("white can move");
        assert_eq!(chosen.label(), "D8-B8");

        // Same score as forcing the move and searching the child directly.
        let mut child = board;
        child.apply(chosen.mv);
        assert_eq!(chosen.board, child);
        let mut pool = NodePool::new();
        let root = pool.alloc_root(child);
        let mut s = Searcher::new(SearchParams { depth, alpha_beta: true });
        let direct = s.minimax(&mut pool, root, depth, SCORE_MIN, SCORE_MAX, Side::Black);
        assert_eq!(chosen.score, Some(direct), "depth {depth}");
    }
}

#[test]
fn forced_win_found_at_depth_four() {
    let chosen = agent(4).choose(&board_of(&["A8", "B8", "C8"]), Side::White).expect("white can move");
    assert_eq!(chosen.score, Some(SCORE_MAX));
}

#[test]
fn immobilized_mover_is_forced_loss() {
    let mut board = board_of(&["A8", "B8", "C8"]);
    let before = board;
    let mut a = agent(2);
    let err = a.play(&mut board, Side::Black).expect_err("black is stuck");
    assert_eq!(err, AgentError::ForcedLoss { side: Side::Black });
    assert_eq!(board, before, "board must not change on a forced loss");
    assert!(a.pool().is_empty(), "episode must still be reset");
}

#[test]
fn pool_is_reset_after_every_decision() {
    let mut rng = SmallRng::seed_from_u64(21);
    let g = random_midgame(&mut rng, 6);
    let mut a = agent(2);
    let chosen = a.choose(&g.board, g.to_move).expect("midgame has moves");
    assert!(chosen.nodes > 1);
    assert!(a.pool().is_empty());
    assert_eq!(a.pool().episode(), 1);
    assert!(a.pool().peak() >= chosen.nodes);
}

#[test]
fn best_child_ties_go_to_first_discovered() {
    let mut rng = SmallRng::seed_from_u64(99);
    for trial in 0..20 {
        let g = random_midgame(&mut rng, 4 + trial % 10);
        if legal_moves(g.board, g.to_move).is_empty() { continue; }
        if g.board.is_partition_full(g.to_move) { continue; }
        let depth = 2;

        // Score every root move independently, then pick the first best.
        let mut pool = NodePool::new();
        let root = pool.alloc_root(g.board);
        let kids = pool.expand(root, g.to_move);
        let mut expected: Option<(String, i8)> = None;
        for child in kids.iter() {
            let mut s = Searcher::new(SearchParams { depth, alpha_beta: true });
            let score = s.minimax(&mut pool, child, depth, SCORE_MIN, SCORE_MAX, g.to_move.opponent());
            let better = match &expected {
                None => true,
                Some((_, best)) => match g.to_move {
                    Side::White => score > *best,
                    Side::Black => score < *best,
                },
            };
            if better { expected = Some((pool[child].label(), score)); }
        }
        let (label, score) = expected.expect("at least one move");

        let chosen = agent(depth).choose(&g.board, g.to_move).expect("has moves");
        assert_eq!(chosen.label(), label, "trial {trial}");
        assert_eq!(chosen.score, Some(score));
        assert!(matches!(chosen.mv, PlayedMove::Slide(_)));
    }
}

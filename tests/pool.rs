use konane::search::pool::NodePool;
use konane::{Board, Side, Square};
use pretty_assertions::assert_eq;

fn sq(s: &str) -> Square { s.parse().expect("valid coord") }

fn midgame() -> Board {
    let mut b = Board::full();
    // Both openings, then a couple of empties so each side has moves.
    for s in ["D5", "D4", "F5", "C6"] { b.clear(sq(s)); }
    b
}

#[test]
fn root_has_empty_label() {
    let mut pool = NodePool::new();
    let root = pool.alloc_root(Board::full());
    assert_eq!(pool[root].label(), "");
    assert!(pool[root].mv.is_none());
    assert_eq!(pool.len(), 1);
}

#[test]
fn children_are_contiguous_and_ordered() {
    let mut pool = NodePool::new();
    let board = midgame();
    let root = pool.alloc_root(board);
    let kids = pool.expand(root, Side::Black);
    let expected = konane::movegen::generate_moves(board, Side::Black);
    assert!(!kids.is_empty());
    assert_eq!(kids.len(), expected.len());
    assert_eq!(pool.len(), 1 + kids.len());
    for (child, mv) in kids.iter().zip(expected.iter()) {
        assert_eq!(pool[child].mv, Some(*mv));
        assert_eq!(pool[child].label(), mv.to_string());
        assert_eq!(pool[child].board.bits() ^ board.bits(), mv.mask());
    }
}

#[test]
fn expanding_twice_returns_same_children() {
    let mut pool = NodePool::new();
    let root = pool.alloc_root(midgame());
    let a = pool.expand(root, Side::White);
    let n = pool.len();
    let b = pool.expand(root, Side::White);
    assert_eq!(a, b);
    assert_eq!(pool.len(), n);
    assert!(pool[root].is_expanded());
}

#[test]
fn reset_discards_episode() {
    let mut pool = NodePool::new();
    let root = pool.alloc_root(midgame());
    let kids = pool.expand(root, Side::Black);
    let first = kids.first().expect("black has moves");
    assert!(pool.contains(root));
    assert!(pool.contains(first));
    let before = pool.len();

    pool.reset();
    assert!(pool.is_empty());
    assert_eq!(pool.episode(), 1);
    assert!(!pool.contains(root));
    assert!(!pool.contains(first));
    assert_eq!(pool.peak(), before);

    // Fresh ids from the next episode are valid again.
    let root2 = pool.alloc_root(Board::full());
    assert!(pool.contains(root2));
    assert!(!pool.contains(root));
}

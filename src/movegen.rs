use std::fmt;

use crate::board::{Board, Side, Square, Squares};

/// Scan directions, named by bit-index arithmetic: up is +8 per step,
/// left +1, down -8, right -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Discovery order for children.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    fn flag(self) -> u8 {
        match self {
            Direction::Up => 0x8,
            Direction::Left => 0x4,
            Direction::Down => 0x2,
            Direction::Right => 0x1,
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Shift a single-bit mask `k` steps, or `None` if it would leave the 64 bits.
    #[inline]
    pub fn shift(self, bit: u64, k: u32) -> Option<u64> {
        let idx = bit.trailing_zeros();
        match self {
            Direction::Up => (idx + 8 * k <= 63).then(|| bit << (8 * k)),
            Direction::Left => (idx + k <= 63).then(|| bit << k),
            Direction::Down => (idx >= 8 * k).then(|| bit >> (8 * k)),
            Direction::Right => (idx >= k).then(|| bit >> k),
        }
    }
}

/// Per direction, bit k set means the mover's piece at distance k can
/// slide into the scanned square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionMasks([u8; 4]);

impl DirectionMasks {
    pub fn get(&self, dir: Direction) -> u8 { self.0[dir.slot()] }

    pub fn has(&self, dir: Direction, k: u32) -> bool { self.0[dir.slot()] & (1 << k) != 0 }

    pub fn is_empty(&self) -> bool { self.0 == [0; 4] }

    fn record(&mut self, dir: Direction, k: u32) { self.0[dir.slot()] |= 1 << k; }
}

/// A slide of one piece from `src` into the empty square `dst`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub dst: Square,
    pub src: Square,
}

impl Move {
    /// The two bits this move toggles.
    #[inline]
    pub fn mask(self) -> u64 { self.src.bit() | self.dst.bit() }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.dst, self.src)
    }
}

const MAX_DISTANCE: u32 = 7;

/// Scan outward from the empty square `dest` for pieces of `side` that may
/// move into it. `dest` must be empty and on `side`'s partition.
pub fn source_masks(board: Board, side: Side, dest: Square) -> DirectionMasks {
    let jump = dest.bit();
    let own = board.pieces(side);
    let opp = board.pieces(side.opponent());
    let own_part = side.partition();
    let opp_part = side.opponent().partition();

    let mut open: u8 = 0xF;
    let mut masks = DirectionMasks::default();
    for k in 1..=MAX_DISTANCE {
        let odd = k % 2 == 1;
        for dir in Direction::ALL {
            if open & dir.flag() == 0 { continue; }
            let Some(step) = dir.shift(jump, k) else {
                open &= !dir.flag();
                continue;
            };
            // Parity must alternate along a row; a mismatch means we wrapped.
            if dir.is_horizontal() && ((!odd && step & opp_part != 0) || (odd && step & own_part != 0)) {
                open &= !dir.flag();
            } else if step & own != 0 {
                masks.record(dir, k);
                open &= !dir.flag();
            } else if odd && step & opp == 0 {
                open &= !dir.flag();
            }
            // Opponent pieces are transparent.
        }
    }
    masks
}

/// Call `f` with every move into `dest` recorded in `masks` and the board it
/// produces, in direction then distance order.
pub fn for_each_child<F>(board: Board, side: Side, dest: Square, masks: &DirectionMasks, mut f: F)
where
    F: FnMut(Move, Board),
{
    let own = board.pieces(side);
    for dir in Direction::ALL {
        if masks.get(dir) == 0 { continue; }
        for k in 1..=MAX_DISTANCE {
            if !masks.has(dir, k) { continue; }
            let Some(src_bit) = dir.shift(dest.bit(), k) else { continue };
            if src_bit & own == 0 { continue; }
            let Some(src) = Square::from_bit(src_bit) else { continue };
            let mv = Move { dst: dest, src };
            let mut child = board;
            child.toggle(mv.mask());
            f(mv, child);
        }
    }
}

/// Every slide for `side`: ascending destination, then direction, then distance.
pub fn for_each_move<F>(board: Board, side: Side, mut f: F)
where
    F: FnMut(Move, Board),
{
    for dest in Squares::new(board.empty_for(side)) {
        let masks = source_masks(board, side, dest);
        if masks.is_empty() { continue; }
        for_each_child(board, side, dest, &masks, &mut f);
    }
}

pub fn generate_moves(board: Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    for_each_move(board, side, |mv, _| moves.push(mv));
    moves
}

/// Pieces of `side` that appear as a source of at least one move.
pub fn movable_pieces(board: Board, side: Side) -> u64 {
    let mut movable = 0u64;
    for_each_move(board, side, |mv, _| movable |= mv.src.bit());
    movable
}

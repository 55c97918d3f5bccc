pub mod io;
pub mod square;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
pub use square::{Square, Squares};

/// Squares White may ever occupy. Row 0 holds white on odd columns.
pub const WHITE_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;
/// Squares Black may ever occupy; the complement of [`WHITE_SQUARES`].
pub const BLACK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;
pub const CORNERS: u64 = 0x8100_0000_0000_0081;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self { Side::White => Side::Black, Side::Black => Side::White }
    }

    /// The fixed half of the board this side's pieces live on.
    #[inline]
    pub fn partition(self) -> u64 {
        match self { Side::White => WHITE_SQUARES, Side::Black => BLACK_SQUARES }
    }

    pub fn to_char(self) -> char {
        match self { Side::White => 'W', Side::Black => 'B' }
    }

    pub fn from_char(c: char) -> Option<Side> {
        match c.to_ascii_uppercase() {
            'W' => Some(Side::White),
            'B' => Some(Side::Black),
            _ => None,
        }
    }

    /// Which side's partition contains `sq`.
    pub fn owner_of(sq: Square) -> Side {
        if sq.bit() & WHITE_SQUARES != 0 { Side::White } else { Side::Black }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Side::White => write!(f, "White"), Side::Black => write!(f, "Black") }
    }
}

/// Occupancy of the 64 squares. Color comes from the partition, not the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board(u64);

impl Board {
    pub const fn empty() -> Self { Self(0) }

    /// Every square occupied: the starting position.
    pub const fn full() -> Self { Self(u64::MAX) }

    pub const fn from_bits(bits: u64) -> Self { Self(bits) }

    #[inline]
    pub fn bits(self) -> u64 { self.0 }

    #[inline]
    pub fn is_occupied(self, sq: Square) -> bool { self.0 & sq.bit() != 0 }

    /// Pieces belonging to `side`.
    #[inline]
    pub fn pieces(self, side: Side) -> u64 { self.0 & side.partition() }

    /// Empty squares `side` could land on.
    #[inline]
    pub fn empty_for(self, side: Side) -> u64 { !self.0 & side.partition() }

    /// True while `side` has not removed its first piece.
    pub fn is_partition_full(self, side: Side) -> bool {
        self.pieces(side) == side.partition()
    }

    /// Flip every bit in `mask`.
    #[inline]
    pub fn toggle(&mut self, mask: u64) { self.0 ^= mask; }

    pub fn set(&mut self, sq: Square) { self.0 |= sq.bit(); }
    pub fn clear(&mut self, sq: Square) { self.0 &= !sq.bit(); }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let sq = Square::from_row_col(row, col).ok_or(fmt::Error)?;
                let c = if self.is_occupied(sq) { Side::owner_of(sq).to_char() } else { 'O' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse eight rows of `B`, `W` and `O`. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = 0u64;
        let mut row = 0u8;
        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() { continue; }
            if row >= 8 { return Err(ParseError::RowCount(row as usize + 1)); }
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(ParseError::Board { line: lineno + 1, msg: format!("expected 8 squares, found {}", chars.len()) });
            }
            for (col, c) in chars.into_iter().enumerate() {
                let sq = Square::from_row_col(row, col as u8)
                    .ok_or_else(|| ParseError::Board { line: lineno + 1, msg: "square out of range".into() })?;
                match c.to_ascii_uppercase() {
                    'O' => {}
                    ch => {
                        let side = Side::from_char(ch).ok_or_else(|| ParseError::Board {
                            line: lineno + 1,
                            msg: format!("unexpected character {ch:?} at {sq}"),
                        })?;
                        if Side::owner_of(sq) != side {
                            return Err(ParseError::Board {
                                line: lineno + 1,
                                msg: format!("{side} piece on {} square {sq}", Side::owner_of(sq)),
                            });
                        }
                        bits |= sq.bit();
                    }
                }
            }
            row += 1;
        }
        if row != 8 { return Err(ParseError::RowCount(row as usize)); }
        Ok(Board(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_split_the_board() {
        assert_eq!(WHITE_SQUARES & BLACK_SQUARES, 0);
        assert_eq!(WHITE_SQUARES | BLACK_SQUARES, u64::MAX);
        assert_eq!(WHITE_SQUARES.count_ones(), 32);
    }

    #[test]
    fn openings_sit_on_their_own_partition() {
        for (c, side) in [("D4", Side::White), ("E5", Side::White), ("D5", Side::Black), ("E4", Side::Black)] {
            let sq: Square = c.parse().unwrap();
            assert_eq!(Side::owner_of(sq), side, "{c}");
        }
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Bit index 0..64 on the 8x8 grid, `row * 8 + col`.
///
/// Text coordinates are a column letter `A`..`H` followed by a row digit
/// `1`..`8`; digit 8 is row 0, so the first line of a board file is rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Square `idx & 63`.
    pub const fn new(idx: u8) -> Self { Self(idx & 63) }

    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx < 64 { Some(Self(idx)) } else { None }
    }

    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 { Some(Self(row * 8 + col)) } else { None }
    }

    /// Lowest set bit of `mask`, if any.
    pub fn from_bit(mask: u64) -> Option<Self> {
        if mask == 0 { None } else { Some(Self(mask.trailing_zeros() as u8)) }
    }

    #[inline]
    pub fn index(self) -> u8 { self.0 }
    #[inline]
    pub fn row(self) -> u8 { self.0 / 8 }
    #[inline]
    pub fn col(self) -> u8 { self.0 % 8 }
    #[inline]
    pub fn bit(self) -> u64 { 1u64 << self.0 }

    pub fn all() -> impl Iterator<Item = Square> { (0..64u8).map(Square) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if b.len() != 2 { return Err(ParseError::Coord(s.to_string())); }
        let f = b[0].to_ascii_uppercase();
        let r = b[1];
        if !(b'A'..=b'H').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ParseError::Coord(s.to_string()));
        }
        let col = f - b'A';
        let row = b'8' - r;
        Ok(Self(row * 8 + col))
    }
}

/// Iterator over the set bits of a mask in ascending index order.
pub struct Squares(u64);

impl Squares {
    pub fn new(mask: u64) -> Self { Self(mask) }
}

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let sq = Square::from_bit(self.0)?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_corners() {
        assert_eq!("A8".parse::<Square>().unwrap().index(), 0);
        assert_eq!("H8".parse::<Square>().unwrap().index(), 7);
        assert_eq!("A1".parse::<Square>().unwrap().index(), 56);
        assert_eq!("h1".parse::<Square>().unwrap().index(), 63);
    }

    #[test]
    fn squares_iterates_ascending() {
        let v: Vec<u8> = Squares::new(0x8000_0000_0000_0081).map(Square::index).collect();
        assert_eq!(v, vec![0, 7, 63]);
    }
}

//! Square indexing.
//!
//! Squares are numbered 0..63 as `rank * 8 + file`, with rank 0 being
//! White's first rank: a1 = 0, h1 = 7, a8 = 56, h8 = 63. Both codecs walk
//! squares in this order.

use std::fmt;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

const FILE_NAMES: &[u8; 8] = b"abcdefgh";
const RANK_NAMES: &[u8; 8] = b"12345678";

/// A board square, always in 0..64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);

    /// Returns the square with the given index, or None if out of range.
    pub const fn new(index: usize) -> Option<Square> {
        if index < SQUARE_COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Builds a square from file (0 = a) and rank (0 = first rank).
    pub const fn from_coords(file: usize, rank: usize) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> usize {
        self.0 as usize % 8
    }

    #[inline]
    pub const fn rank(self) -> usize {
        self.0 as usize / 8
    }

    /// Iterates all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }

    /// Parses algebraic notation such as "e3".
    pub fn parse(name: &str) -> Option<Square> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = FILE_NAMES.iter().position(|&c| c == bytes[0])?;
        let rank = RANK_NAMES.iter().position(|&c| c == bytes[1])?;
        Square::from_coords(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILE_NAMES[self.file()] as char,
            RANK_NAMES[self.rank()] as char
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_indices() {
        assert_eq!(Square::parse("a1"), Some(Square::A1));
        assert_eq!(Square::parse("h1"), Some(Square::H1));
        assert_eq!(Square::parse("a8"), Some(Square::A8));
        assert_eq!(Square::parse("h8"), Some(Square::H8));
        assert_eq!(Square::parse("e3").map(Square::index), Some(20));
        assert_eq!(Square::parse("e6").map(Square::index), Some(44));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Square::parse(""), None);
        assert_eq!(Square::parse("i1"), None);
        assert_eq!(Square::parse("a9"), None);
        assert_eq!(Square::parse("e33"), None);
    }

    #[test]
    fn display_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::parse(&sq.to_string()), Some(sq));
        }
        assert_eq!(Square::all().count(), SQUARE_COUNT);
    }

    #[test]
    fn new_bounds() {
        assert_eq!(Square::new(63), Some(Square::H8));
        assert_eq!(Square::new(64), None);
        assert_eq!(Square::from_coords(8, 0), None);
    }
}

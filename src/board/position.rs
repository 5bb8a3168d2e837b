//! The position capability consumed by the codec.
//!
//! The codec never inspects a concrete board type. It reads and writes
//! positions only through this trait, so any chess-rules library can be
//! plugged in by implementing it.

use super::piece::{Color, Piece};
use super::square::Square;

/// One of the four castling permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingRight {
    /// The four rights in metadata-block order.
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    /// Returns the FEN castling letter.
    pub const fn fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }

    /// Parses a FEN castling letter.
    pub fn from_fen_char(c: char) -> Option<CastlingRight> {
        match c {
            'K' => Some(CastlingRight::WhiteKingside),
            'Q' => Some(CastlingRight::WhiteQueenside),
            'k' => Some(CastlingRight::BlackKingside),
            'q' => Some(CastlingRight::BlackQueenside),
            _ => None,
        }
    }
}

/// Read/write access to a chess position.
pub trait Position {
    /// Creates a position with no pieces, White to move, no castling rights
    /// and no en-passant target.
    fn empty() -> Self
    where
        Self: Sized;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn set_piece_at(&mut self, square: Square, occupant: Option<Piece>);

    fn turn(&self) -> Color;

    fn set_turn(&mut self, color: Color);

    fn has_castling_right(&self, right: CastlingRight) -> bool;

    fn set_castling_right(&mut self, right: CastlingRight, allowed: bool);

    /// Revokes all four castling rights.
    fn clear_castling_rights(&mut self) {
        for right in CastlingRight::ALL {
            self.set_castling_right(right, false);
        }
    }

    fn ep_square(&self) -> Option<Square>;

    fn set_ep_square(&mut self, square: Option<Square>);
}

//! Board state representation.
//!
//! Holds a complete chess position snapshot: piece placement, side to move,
//! castling rights, en-passant target and the two move counters.

use super::piece::{Color, Piece, PieceKind};
use super::position::{CastlingRight, Position};
use super::square::{Square, SQUARE_COUNT};

/// Complete board state at a point in time.
///
/// Uses a fixed-size array indexed by `Square::index()` for O(1) lookup,
/// with no heap allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square: Some(piece) or None.
    pub squares: [Option<Piece>; SQUARE_COUNT],
    pub turn: Color,
    /// Castling permissions indexed by `CastlingRight as usize`.
    pub castling: [bool; 4],
    pub ep_square: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Board {
    /// Creates an empty board: no pieces, White to move, no rights.
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARE_COUNT],
            turn: Color::White,
            castling: [false; 4],
            ep_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn starting() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[file] = Some(Piece::new(kind, Color::White));
            board.squares[8 + file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[48 + file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[56 + file] = Some(Piece::new(kind, Color::Black));
        }
        board.castling = [true; 4];
        board
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }
}

impl Position for Board {
    fn empty() -> Self {
        Board::empty()
    }

    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    fn set_piece_at(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.index()] = occupant;
    }

    fn turn(&self) -> Color {
        self.turn
    }

    fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    fn has_castling_right(&self, right: CastlingRight) -> bool {
        self.castling[right as usize]
    }

    fn set_castling_right(&mut self, right: CastlingRight, allowed: bool) {
        self.castling[right as usize] = allowed;
    }

    fn clear_castling_rights(&mut self) {
        self.castling = [false; 4];
    }

    fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    fn set_ep_square(&mut self, square: Option<Square>) {
        self.ep_square = square;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert!(board.squares.iter().all(|s| s.is_none()));
        assert_eq!(board.turn, Color::White);
        assert_eq!(board.castling, [false; 4]);
        assert_eq!(board.ep_square, None);
        assert_eq!(board.fullmove_number, 1);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.piece_at(Square::A1).map(Piece::symbol), Some('R'));
        assert_eq!(
            Square::parse("e1").and_then(|sq| board.piece_at(sq)).map(Piece::symbol),
            Some('K')
        );
        assert_eq!(
            Square::parse("d8").and_then(|sq| board.piece_at(sq)).map(Piece::symbol),
            Some('q')
        );
        assert!(CastlingRight::ALL.iter().all(|&r| board.has_castling_right(r)));
    }

    #[test]
    fn clear_castling_rights_revokes_all() {
        let mut board = Board::starting();
        board.clear_castling_rights();
        assert!(CastlingRight::ALL.iter().all(|&r| !board.has_castling_right(r)));
        board.set_castling_right(CastlingRight::BlackKingside, true);
        assert_eq!(board.castling, [false, false, true, false]);
    }

    #[test]
    fn castling_letters_roundtrip() {
        for right in CastlingRight::ALL {
            assert_eq!(CastlingRight::from_fen_char(right.fen_char()), Some(right));
        }
    }
}

//! Piece kinds, colors, and their FEN symbols.

/// The side a piece belongs to, or the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the single-character FEN abbreviation for the side to move.
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parses a side to move from its FEN abbreviation.
    pub fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

/// The kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Returns the uppercase FEN letter.
    pub const fn upper_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece of a given kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// The twelve pieces in symbol order `P N B R Q K p n b r q k`.
    ///
    /// Piece code tables are laid out in this order.
    pub const ALL: [Piece; 12] = [
        Piece::new(PieceKind::Pawn, Color::White),
        Piece::new(PieceKind::Knight, Color::White),
        Piece::new(PieceKind::Bishop, Color::White),
        Piece::new(PieceKind::Rook, Color::White),
        Piece::new(PieceKind::Queen, Color::White),
        Piece::new(PieceKind::King, Color::White),
        Piece::new(PieceKind::Pawn, Color::Black),
        Piece::new(PieceKind::Knight, Color::Black),
        Piece::new(PieceKind::Bishop, Color::Black),
        Piece::new(PieceKind::Rook, Color::Black),
        Piece::new(PieceKind::Queen, Color::Black),
        Piece::new(PieceKind::King, Color::Black),
    ];

    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Position of this piece within [`Piece::ALL`].
    pub const fn ordinal(self) -> usize {
        let base = match self.color {
            Color::White => 0,
            Color::Black => 6,
        };
        base + self.kind as usize
    }

    /// Returns the FEN symbol: uppercase for white, lowercase for black.
    pub const fn symbol(self) -> char {
        let c = self.kind.upper_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parses a piece from its FEN symbol.
    pub fn from_symbol(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

/// Returns the grid symbol for a square's occupant, `.` when empty.
pub fn occupant_symbol(occupant: Option<Piece>) -> char {
    occupant.map_or('.', Piece::symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_roundtrip_for_all_pieces() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
        }
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('.'), None);
    }

    #[test]
    fn ordinal_matches_all_order() {
        for (i, piece) in Piece::ALL.iter().enumerate() {
            assert_eq!(piece.ordinal(), i);
        }
    }

    #[test]
    fn color_fen_char() {
        assert_eq!(Color::from_fen_char('w'), Some(Color::White));
        assert_eq!(Color::from_fen_char('b'), Some(Color::Black));
        assert_eq!(Color::from_fen_char('x'), None);
        assert_eq!(Color::Black.fen_char(), 'b');
    }

    #[test]
    fn empty_occupant_is_dot() {
        assert_eq!(occupant_symbol(None), '.');
        assert_eq!(occupant_symbol(Piece::from_symbol('q')), 'q');
    }
}

//! FEN encoding and decoding.
//!
//! Format: `<placement> <turn> <castling> <en-passant> [<halfmove> <fullmove>]`
//!
//! The two move counters are optional on input and default to `0 1`.

use crate::board::{Board, CastlingRight, Color, Piece, Square};

/// Errors that can occur during FEN parsing.
#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("expected 4 to 6 fields separated by whitespace, got {0}")]
    WrongFieldCount(usize),

    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank '{0}' does not describe exactly 8 squares")]
    BadRankLength(String),

    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move: '{0}'")]
    InvalidTurn(String),

    #[error("invalid castling character: '{0}'")]
    InvalidCastling(char),

    #[error("invalid en-passant square: '{0}'")]
    InvalidSquare(String),

    #[error("invalid move counter: '{0}'")]
    InvalidCounter(String),
}

/// Parses the piece placement field into the board.
fn parse_placement(s: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    // FEN lists rank 8 first.
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::BadRankLength(rank_str.to_string()));
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_symbol(c).ok_or(FenError::InvalidPiece(c))?;
                let square = Square::from_coords(file, rank)
                    .ok_or_else(|| FenError::BadRankLength(rank_str.to_string()))?;
                board.squares[square.index()] = Some(piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::BadRankLength(rank_str.to_string()));
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength(rank_str.to_string()));
        }
    }

    Ok(())
}

/// Parses the castling field (`-` or a subset of `KQkq`).
fn parse_castling(s: &str) -> Result<[bool; 4], FenError> {
    let mut rights = [false; 4];
    if s == "-" {
        return Ok(rights);
    }
    for c in s.chars() {
        let right = CastlingRight::from_fen_char(c).ok_or(FenError::InvalidCastling(c))?;
        rights[right as usize] = true;
    }
    Ok(rights)
}

fn parse_counter(s: &str) -> Result<u32, FenError> {
    s.parse()
        .map_err(|_| FenError::InvalidCounter(s.to_string()))
}

/// Parses a FEN string into a Board.
pub fn parse_fen(s: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(FenError::WrongFieldCount(fields.len()));
    }

    let mut board = Board::empty();
    parse_placement(fields[0], &mut board)?;

    board.turn = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidTurn(other.to_string())),
    };

    board.castling = parse_castling(fields[2])?;

    board.ep_square = match fields[3] {
        "-" => None,
        name => Some(Square::parse(name).ok_or_else(|| FenError::InvalidSquare(name.to_string()))?),
    };

    if let Some(half) = fields.get(4) {
        board.halfmove_clock = parse_counter(half)?;
    }
    if let Some(full) = fields.get(5) {
        board.fullmove_number = parse_counter(full)?;
    }

    Ok(board)
}

/// Encodes the piece placement field, rank 8 first.
fn encode_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for rank in (0..8).rev() {
        let mut empty_run = 0;
        for file in 0..8 {
            match board.squares[rank * 8 + file] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

/// Encodes the castling field in `KQkq` order.
fn encode_castling(board: &Board) -> String {
    let s: String = CastlingRight::ALL
        .iter()
        .filter(|&&right| board.castling[right as usize])
        .map(|right| right.fen_char())
        .collect();
    if s.is_empty() {
        "-".to_string()
    } else {
        s
    }
}

/// Encodes the en-passant field.
///
/// Only a third- or sixth-rank square can follow a double pawn push; any other
/// target is written as `-`. A decoded "no en-passant" comes back as a1 and
/// therefore renders as `-`.
fn encode_ep(board: &Board) -> String {
    match board.ep_square {
        Some(sq) if sq.rank() == 2 || sq.rank() == 5 => sq.to_string(),
        _ => "-".to_string(),
    }
}

/// Encodes a Board into a canonical six-field FEN string.
pub fn encode_fen(board: &Board) -> String {
    format!(
        "{} {} {} {} {} {}",
        encode_placement(board),
        board.turn.fen_char(),
        encode_castling(board),
        encode_ep(board),
        board.halfmove_clock,
        board.fullmove_number
    )
}

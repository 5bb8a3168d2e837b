//! Position <-> bit vector conversion.
//!
//! Layout of a vector with piece-code width `W`:
//!   [0 .. 64W)        square codes, a1 first, h8 last
//!   64W               side to move: 0 = white, 1 = black
//!   64W + 1 .. +5     castling: white kingside, white queenside,
//!                     black kingside, black queenside
//!   64W + 5 .. +11    en-passant square index, 6 bits, big-endian
//!
//! Move counters are not encoded. "No en-passant square" is written as six
//! zero bits, which reads back as a1 (index 0).

use std::marker::PhantomData;

use super::bits::{read_bits, BitVector};
use super::table::{Dense4, OneHot12, PieceCodeTable};
use crate::board::{Board, CastlingRight, Color, Position, Square, SQUARE_COUNT};
use crate::protocol::fen::encode_fen;
use crate::protocol::grid::to_symbol_grid;

/// Size of the trailing metadata block.
pub const METADATA_BITS: usize = 11;

/// Width of the en-passant field.
const EP_BITS: usize = 6;

/// Errors produced when ingesting or decoding a bit vector.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("expected a vector of {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid bit value '{value}' at index {index}")]
    InvalidBit { index: usize, value: String },

    #[error("unsupported piece code width: {0} (expected 4 or 12)")]
    UnsupportedWidth(usize),
}

/// Encoder/decoder for one piece-code table.
///
/// Stateless; all methods are associated functions.
#[derive(Debug, Clone, Copy)]
pub struct PositionCodec<T: PieceCodeTable>(PhantomData<T>);

/// 4-bit piece codes, 267 bits in total.
pub type Cm267 = PositionCodec<Dense4>;

/// 12-bit one-hot piece codes, 779 bits in total.
pub type Cm779 = PositionCodec<OneHot12>;

impl<T: PieceCodeTable> PositionCodec<T> {
    /// Bits used by the 64 square codes.
    pub const BOARD_BITS: usize = SQUARE_COUNT * T::WIDTH;

    /// Total vector length.
    pub const LEN: usize = Self::BOARD_BITS + METADATA_BITS;

    /// Encodes a position. Never fails.
    pub fn encode<P: Position>(position: &P) -> BitVector {
        let mut out = BitVector::with_capacity(Self::LEN);

        for square in Square::all() {
            out.push_bits(T::code_for(position.piece_at(square)), T::WIDTH);
        }

        out.push(position.turn() == Color::Black);
        for right in CastlingRight::ALL {
            out.push(position.has_castling_right(right));
        }
        let ep = position.ep_square().map_or(0, |sq| sq.index() as u16);
        out.push_bits(ep, EP_BITS);

        debug_assert_eq!(out.len(), Self::LEN);
        out
    }

    /// Decodes a vector into a fresh position.
    ///
    /// Castling rights are cleared and then re-granted from the four flags,
    /// without regard to where kings and rooks stand. The en-passant target is
    /// always set from the 6-bit field, so an encoded "none" comes back as a1.
    pub fn decode<P: Position>(bits: &[bool]) -> Result<P, CodecError> {
        if bits.len() != Self::LEN {
            return Err(CodecError::LengthMismatch {
                expected: Self::LEN,
                actual: bits.len(),
            });
        }

        let mut position = P::empty();
        for square in Square::all() {
            let code = read_bits(bits, square.index() * T::WIDTH, T::WIDTH);
            position.set_piece_at(square, T::occupant_for(code));
        }

        let meta = &bits[Self::BOARD_BITS..];
        position.set_turn(if meta[0] { Color::Black } else { Color::White });

        position.clear_castling_rights();
        for (i, right) in CastlingRight::ALL.into_iter().enumerate() {
            if meta[1 + i] {
                position.set_castling_right(right, true);
            }
        }

        let ep = read_bits(meta, 5, EP_BITS) as usize;
        position.set_ep_square(Square::new(ep));

        Ok(position)
    }

    /// Decodes into the crate's own `Board`.
    pub fn decode_board(bits: &BitVector) -> Result<Board, CodecError> {
        Self::decode(bits.as_slice())
    }

    /// Decodes and serializes as FEN. Counters are always `0 1`.
    pub fn decode_to_fen(bits: &BitVector) -> Result<String, CodecError> {
        Self::decode_board(bits).map(|board| encode_fen(&board))
    }

    /// Decodes and renders the 8x8 symbol grid, rank 8 first.
    pub fn decode_to_grid(bits: &BitVector) -> Result<[[char; 8]; 8], CodecError> {
        Self::decode_board(bits).map(|board| to_symbol_grid(&board))
    }
}

/// Runtime choice between the two codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodecKind {
    #[default]
    Dense4,
    OneHot12,
}

impl CodecKind {
    /// Selects a codec by piece-code width.
    pub fn from_width(width: usize) -> Result<CodecKind, CodecError> {
        match width {
            4 => Ok(CodecKind::Dense4),
            12 => Ok(CodecKind::OneHot12),
            other => Err(CodecError::UnsupportedWidth(other)),
        }
    }

    pub const fn width(self) -> usize {
        match self {
            CodecKind::Dense4 => Dense4::WIDTH,
            CodecKind::OneHot12 => OneHot12::WIDTH,
        }
    }

    /// Total vector length for this codec.
    pub const fn len(self) -> usize {
        match self {
            CodecKind::Dense4 => Cm267::LEN,
            CodecKind::OneHot12 => Cm779::LEN,
        }
    }

    /// Column prefix used in exported CSV headers.
    pub const fn name(self) -> &'static str {
        match self {
            CodecKind::Dense4 => Dense4::NAME,
            CodecKind::OneHot12 => OneHot12::NAME,
        }
    }

    pub fn encode<P: Position>(self, position: &P) -> BitVector {
        match self {
            CodecKind::Dense4 => Cm267::encode(position),
            CodecKind::OneHot12 => Cm779::encode(position),
        }
    }

    pub fn decode<P: Position>(self, bits: &[bool]) -> Result<P, CodecError> {
        match self {
            CodecKind::Dense4 => Cm267::decode(bits),
            CodecKind::OneHot12 => Cm779::decode(bits),
        }
    }

    pub fn decode_to_fen(self, bits: &BitVector) -> Result<String, CodecError> {
        match self {
            CodecKind::Dense4 => Cm267::decode_to_fen(bits),
            CodecKind::OneHot12 => Cm779::decode_to_fen(bits),
        }
    }
}

//! Piece code tables.
//!
//! A table maps each of the 13 occupant states (12 pieces plus empty) to a
//! fixed-width code and back. Codes are written most significant bit first.
//!
//! Code layout:
//!   Dense4    empty = 0, P N B R Q K = 1..6, p n b r q k = 9..14
//!             (7, 8 and 15 are unassigned and decode to empty)
//!   OneHot12  empty = 0, P = 1 << 0, N = 1 << 1, ... k = 1 << 11
//!             (every other pattern decodes to empty)

use crate::board::Piece;

/// A bidirectional mapping between occupants and `WIDTH`-bit codes.
///
/// `occupant_for` is total over all `2^WIDTH` patterns and is a left inverse
/// of `code_for`.
pub trait PieceCodeTable {
    /// Bits per square.
    const WIDTH: usize;

    /// Short name used in CSV headers and diagnostics.
    const NAME: &'static str;

    fn code_for(occupant: Option<Piece>) -> u16;

    fn occupant_for(code: u16) -> Option<Piece>;
}

/// Builds a decode table of `N` entries, default-filled with empty.
const fn build_decode<const N: usize>(codes: &[u16; 12]) -> [Option<Piece>; N] {
    let mut table = [None; N];
    let mut i = 0;
    while i < 12 {
        table[codes[i] as usize] = Some(Piece::ALL[i]);
        i += 1;
    }
    table
}

/// Dense 4-bit codes, indexed by `Piece::ordinal()`.
const DENSE4_CODES: [u16; 12] = [1, 2, 3, 4, 5, 6, 9, 10, 11, 12, 13, 14];

static DENSE4_DECODE: [Option<Piece>; 16] = build_decode(&DENSE4_CODES);

/// One-hot 12-bit codes, indexed by `Piece::ordinal()`.
const ONEHOT12_CODES: [u16; 12] = {
    let mut codes = [0u16; 12];
    let mut i = 0;
    while i < 12 {
        codes[i] = 1 << i;
        i += 1;
    }
    codes
};

static ONEHOT12_DECODE: [Option<Piece>; 4096] = build_decode(&ONEHOT12_CODES);

/// The 4-bit table behind the 267-bit vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dense4;

impl PieceCodeTable for Dense4 {
    const WIDTH: usize = 4;
    const NAME: &'static str = "cm267";

    #[inline]
    fn code_for(occupant: Option<Piece>) -> u16 {
        occupant.map_or(0, |p| DENSE4_CODES[p.ordinal()])
    }

    #[inline]
    fn occupant_for(code: u16) -> Option<Piece> {
        DENSE4_DECODE.get(code as usize).copied().flatten()
    }
}

/// The 12-bit one-hot table behind the 779-bit vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneHot12;

impl PieceCodeTable for OneHot12 {
    const WIDTH: usize = 12;
    const NAME: &'static str = "cm779";

    #[inline]
    fn code_for(occupant: Option<Piece>) -> u16 {
        occupant.map_or(0, |p| ONEHOT12_CODES[p.ordinal()])
    }

    #[inline]
    fn occupant_for(code: u16) -> Option<Piece> {
        ONEHOT12_DECODE.get(code as usize).copied().flatten()
    }
}
